//! Integration tests for the flat-file cache store

use nba_shots::storage::models::{ShotRecord, ZoneRecord, LEAGUE_ENTITY};
use nba_shots::{CacheKind, CacheStore, Season, ShotsError, Zone};
use std::fs;
use tempfile::tempdir;

fn league_row(season: u16, zone: Zone, fga: u32, fgm: u32) -> ZoneRecord {
    ZoneRecord {
        season: Season::new(season),
        entity: LEAGUE_ENTITY.to_string(),
        zone,
        fga,
        fgm,
    }
}

fn curry_shot(season: u16, event_id: u32, made: bool) -> ShotRecord {
    ShotRecord {
        season: Season::new(season),
        entity: "Stephen Curry".to_string(),
        game_id: format!("002{}00012", season % 100),
        game_event_id: event_id,
        game_date: format!("{}1027", season),
        loc_x: -220,
        loc_y: 90,
        made,
        zone: Zone::LeftCorner3,
    }
}

#[test]
fn test_fetch_then_cache_yields_one_row_per_season_zone() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    // A fetch of two seasons for the league entity stages one row per
    // (season, zone) pair the client returned.
    let mut staged = Vec::new();
    for season in [2014, 2015] {
        for zone in Zone::ALL {
            staged.push(league_row(season, zone, 100, 40));
        }
    }
    store
        .merge_and_save(CacheKind::LeagueZones, staged)
        .unwrap();

    let loaded: Vec<ZoneRecord> = store.load(CacheKind::LeagueZones).unwrap();
    assert_eq!(loaded.len(), 2 * Zone::ALL.len());

    for season in [Season::new(2014), Season::new(2015)] {
        for zone in Zone::ALL {
            let matches = loaded
                .iter()
                .filter(|r| r.season == season && r.zone == zone)
                .count();
            assert_eq!(matches, 1, "expected exactly one row for {season} {zone}");
        }
    }
}

#[test]
fn test_merge_keeps_prior_rows_and_new_rows_without_duplicates() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    store
        .merge_and_save(
            CacheKind::LeagueZones,
            vec![
                league_row(2014, Zone::MidRange, 500, 200),
                league_row(2015, Zone::MidRange, 450, 180),
            ],
        )
        .unwrap();
    store
        .merge_and_save(
            CacheKind::LeagueZones,
            vec![
                league_row(2015, Zone::MidRange, 460, 184), // corrected stats
                league_row(2016, Zone::MidRange, 400, 150),
            ],
        )
        .unwrap();

    let loaded: Vec<ZoneRecord> = store.load(CacheKind::LeagueZones).unwrap();
    assert_eq!(loaded.len(), 3);

    // Last write wins on the shared key.
    let corrected = loaded
        .iter()
        .find(|r| r.season == Season::new(2015))
        .unwrap();
    assert_eq!(corrected.fga, 460);
}

#[test]
fn test_cache_file_is_flat_csv_with_stable_header() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    store
        .merge_and_save(
            CacheKind::ShotChart,
            vec![curry_shot(2015, 17, true), curry_shot(2015, 44, false)],
        )
        .unwrap();

    let text = fs::read_to_string(store.path(CacheKind::ShotChart)).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "SEASON,ENTITY,GAME_ID,GAME_EVENT_ID,GAME_DATE,LOC_X,LOC_Y,SHOT_MADE_FLAG,SHOT_ZONE_BASIC"
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_cache_survives_process_round_trip() {
    let dir = tempdir().unwrap();

    {
        let store = CacheStore::with_root(dir.path());
        store
            .merge_and_save(CacheKind::ShotChart, vec![curry_shot(2015, 17, true)])
            .unwrap();
    }

    // A fresh store instance sees only the on-disk bytes.
    let store = CacheStore::with_root(dir.path());
    let loaded: Vec<ShotRecord> = store.load(CacheKind::ShotChart).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].entity, "Stephen Curry");
    assert_eq!(loaded[0].game_event_id, 17);
}

#[test]
fn test_load_miss_names_the_kind() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    match store.load::<ShotRecord>(CacheKind::ShotChart) {
        Err(ShotsError::CacheMiss { kind }) => assert_eq!(kind, CacheKind::ShotChart),
        other => panic!("expected CacheMiss, got {other:?}"),
    }
}

#[test]
fn test_kinds_use_separate_files() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    store
        .merge_and_save(CacheKind::LeagueZones, vec![league_row(2015, Zone::MidRange, 1, 1)])
        .unwrap();
    store
        .merge_and_save(CacheKind::ShotChart, vec![curry_shot(2015, 17, true)])
        .unwrap();

    assert!(store.path(CacheKind::LeagueZones).exists());
    assert!(store.path(CacheKind::ShotChart).exists());
    assert!(!store.path(CacheKind::PlayerZones).exists());

    // Player zones stays a miss even though its siblings exist.
    assert!(store.load::<ZoneRecord>(CacheKind::PlayerZones).is_err());
}

#[test]
fn test_status_coverage_drives_incremental_planning() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    let staged: Vec<ShotRecord> = (2014..=2016)
        .flat_map(|season| vec![curry_shot(season, 17, true), curry_shot(season, 44, false)])
        .collect();
    store.merge_and_save(CacheKind::ShotChart, staged).unwrap();

    let status = store.status(CacheKind::ShotChart).unwrap();
    assert!(status.exists);
    assert_eq!(status.rows, 6);
    assert_eq!(status.seasons.len(), 3);
    assert_eq!(status.entities.len(), 1);

    // A refresh request for 2014 through 2018 should plan only 2017 and 2018.
    let requested: Vec<(Season, String)> = (2014..=2018)
        .map(|y| (Season::new(y), "Stephen Curry".to_string()))
        .collect();
    let planned = nba_shots::nba::plan_pairs(&requested, &status, false);
    let seasons: Vec<Season> = planned.into_iter().map(|(s, _)| s).collect();
    assert_eq!(seasons, vec![Season::new(2017), Season::new(2018)]);
}

#[test]
fn test_replace_regenerates_the_table() {
    let dir = tempdir().unwrap();
    let store = CacheStore::with_root(dir.path());

    store
        .merge_and_save(
            CacheKind::ShotChart,
            vec![curry_shot(2014, 1, true), curry_shot(2015, 2, true)],
        )
        .unwrap();
    store
        .replace(CacheKind::ShotChart, vec![curry_shot(2016, 3, false)])
        .unwrap();

    let loaded: Vec<ShotRecord> = store.load(CacheKind::ShotChart).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].season, Season::new(2016));
}
