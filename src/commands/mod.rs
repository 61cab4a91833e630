//! Command implementations for the NBA shot-location CLI

pub mod cache_status;
pub mod league_zones;
pub mod player_zones;
pub mod shot_chart;
pub mod update_all_data;

use std::collections::BTreeSet;

use crate::cli::types::{Season, Zone};
use crate::compute::{self, ShareDelta};
use crate::nba::{find_player, SkippedPair, TrackedPlayer, TRACKED_PLAYERS};
use crate::storage::models::{CacheRecord, ShotRecord, ZoneRecord};
use crate::{CacheKind, CacheStore, Result};

/// Resolve optional name filters against the tracked-player directory.
/// No filter means every tracked player.
pub(crate) fn resolve_players(names: Option<&[String]>) -> Result<Vec<&'static TrackedPlayer>> {
    match names {
        None => Ok(TRACKED_PLAYERS.iter().collect()),
        Some(names) => {
            let mut players = Vec::new();
            for name in names {
                let player = find_player(name)?;
                if !players.iter().any(|p: &&TrackedPlayer| p.id == player.id) {
                    players.push(player);
                }
            }
            Ok(players)
        }
    }
}

/// Print the skipped-pair list from a fetch run, if any.
pub(crate) fn print_skipped(skipped: &[SkippedPair]) {
    if skipped.is_empty() {
        return;
    }
    println!("⚠ {} pair(s) skipped:", skipped.len());
    for pair in skipped {
        println!("  {} {}: {}", pair.entity, pair.season, pair.reason);
    }
}

/// Persist a staging table: merge by default, overwrite on hard refresh.
///
/// An empty staging table never touches the cache; a run where every pair
/// failed must not truncate the previous file.
pub(crate) fn save_staged<R: CacheRecord>(
    store: &CacheStore,
    kind: CacheKind,
    rows: Vec<R>,
    hard_refresh: bool,
) -> Result<()> {
    if rows.is_empty() {
        println!("⚠ Nothing fetched for {}; cache left untouched", kind);
        return Ok(());
    }

    if hard_refresh {
        let total = store.replace(kind, rows)?;
        println!("✓ {} cache rebuilt ({} rows)", kind, total);
    } else {
        let stats = store.merge_and_save(kind, rows)?;
        println!(
            "✓ {} cache updated ({} added, {} replaced, {} total rows)",
            kind, stats.added, stats.replaced, stats.total
        );
    }
    Ok(())
}

/// Text summary of a zone table: row counts plus the shot-selection shifts
/// the dashboard highlights for each entity.
pub(crate) fn summarize_zones(records: &[ZoneRecord], entities: &[&str], verbose: bool) {
    if records.is_empty() {
        println!("⚠ No zone rows in the requested range");
        return;
    }

    let seasons: BTreeSet<Season> = records.iter().map(|r| r.season).collect();
    println!(
        "✓ {} zone rows across {} season(s)",
        records.len(),
        seasons.len()
    );

    let shares = compute::zone_shares(records);
    for &entity in entities {
        let Some(three) = compute::share_delta(&shares, entity, &Zone::THREE_POINT) else {
            continue;
        };
        println!("\n{}:", entity);
        print_delta("3-point share", three);
        if let Some(mid) = compute::share_delta(&shares, entity, &[Zone::MidRange]) {
            print_delta("Mid-range share", mid);
        }
        if let Some(ra) = compute::share_delta(&shares, entity, &[Zone::RestrictedArea]) {
            print_delta("Restricted area share", ra);
        }

        if verbose {
            for (season, share) in compute::three_point_share(&shares, entity) {
                println!("  {}  3PT {:>5.1}%", season, share * 100.0);
            }
        }
    }
}

fn print_delta(label: &str, delta: ShareDelta) {
    println!(
        "  {}: {:.1}% ({:+.1} pts since {})",
        label,
        delta.last * 100.0,
        delta.change() * 100.0,
        delta.first_season
    );
}

/// Text summary of a shot-chart table for one player.
pub(crate) fn summarize_shots(shots: &[ShotRecord], entity: &str) {
    if shots.is_empty() {
        println!("⚠ No shots in the requested range for {}", entity);
        return;
    }

    let made = shots.iter().filter(|s| s.made).count();
    let threes = shots.iter().filter(|s| s.zone.is_three_point()).count();
    let seasons: BTreeSet<Season> = shots.iter().map(|s| s.season).collect();

    println!(
        "✓ {} shots for {} across {} season(s)",
        shots.len(),
        entity,
        seasons.len()
    );
    println!(
        "  FG: {}/{} ({:.1}%)",
        made,
        shots.len(),
        made as f64 / shots.len() as f64 * 100.0
    );
    println!(
        "  3PT attempt rate: {:.1}%",
        threes as f64 / shots.len() as f64 * 100.0
    );
}
