//! Per-player zone table command implementation

use super::{print_skipped, resolve_players, save_staged, summarize_zones};
use crate::{
    cli::types::Season,
    cli::FetchArgs,
    nba::{plan_pairs, Fetcher, TrackedPlayer},
    storage::models::ZoneRecord,
    CacheKind, CacheStore, Result,
};

/// Handle the player zones command
pub async fn handle_player_zones(args: FetchArgs, names: Option<Vec<String>>) -> Result<()> {
    let store = CacheStore::new()?;
    let players = resolve_players(names.as_deref())?;
    let seasons = Season::range(args.start_season, args.end_season);
    if seasons.is_empty() {
        println!(
            "⚠ Empty season range: {} is after {}",
            args.start_season, args.end_season
        );
        return Ok(());
    }

    let status = store.status(CacheKind::PlayerZones)?;

    // Season ascending, players in directory order within a season; seasons
    // before a player's rookie year are never requested.
    let mut requested: Vec<(Season, String)> = Vec::new();
    for &season in &seasons {
        for player in &players {
            if season.start_year() >= player.rookie_year {
                requested.push((season, player.name.to_string()));
            }
        }
    }

    let fetch_wanted = args.hard_refresh || args.refresh || !status.exists;
    let planned = if fetch_wanted {
        plan_pairs(&requested, &status, args.hard_refresh)
    } else {
        Vec::new()
    };

    if planned.is_empty() {
        if fetch_wanted {
            println!("✓ Player zone cache already covers the requested range");
        }
    } else {
        let pairs: Vec<(&TrackedPlayer, Season)> = planned
            .iter()
            .filter_map(|(season, name)| {
                players
                    .iter()
                    .find(|p| p.name == name.as_str())
                    .map(|p| (*p, *season))
            })
            .collect();
        println!(
            "Fetching player shot zones for {} (player, season) pair(s)...",
            pairs.len()
        );

        let mut fetcher = Fetcher::new()?;
        let report = fetcher.player_zones(&pairs).await;
        print_skipped(&report.skipped);
        save_staged(&store, CacheKind::PlayerZones, report.rows, args.hard_refresh)?;
    }

    let records: Vec<ZoneRecord> = store.load(CacheKind::PlayerZones)?;
    let names_of: Vec<&str> = players.iter().map(|p| p.name).collect();
    let in_range: Vec<ZoneRecord> = records
        .into_iter()
        .filter(|r| {
            r.season >= args.start_season
                && r.season <= args.end_season
                && names_of.contains(&r.entity.as_str())
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&in_range)?);
    } else {
        summarize_zones(&in_range, &names_of, args.verbose);
    }

    Ok(())
}
