//! League zone table command implementation

use super::{print_skipped, save_staged, summarize_zones};
use crate::{
    cli::types::Season,
    cli::FetchArgs,
    nba::{plan_pairs, Fetcher},
    storage::models::{ZoneRecord, LEAGUE_ENTITY},
    CacheKind, CacheStore, Result,
};

/// Handle the league zones command
pub async fn handle_league_zones(args: FetchArgs) -> Result<()> {
    let store = CacheStore::new()?;
    let seasons = Season::range(args.start_season, args.end_season);
    if seasons.is_empty() {
        println!(
            "⚠ Empty season range: {} is after {}",
            args.start_season, args.end_season
        );
        return Ok(());
    }

    let status = store.status(CacheKind::LeagueZones)?;
    let requested: Vec<(Season, String)> = seasons
        .iter()
        .map(|&season| (season, LEAGUE_ENTITY.to_string()))
        .collect();

    let fetch_wanted = args.hard_refresh || args.refresh || !status.exists;
    let planned = if fetch_wanted {
        plan_pairs(&requested, &status, args.hard_refresh)
    } else {
        Vec::new()
    };

    if planned.is_empty() {
        if fetch_wanted {
            println!(
                "✓ League zone cache already covers {} through {}",
                args.start_season, args.end_season
            );
        }
    } else {
        let to_fetch: Vec<Season> = planned.into_iter().map(|(season, _)| season).collect();
        println!(
            "Fetching league shot zones for {} season(s)...",
            to_fetch.len()
        );

        let mut fetcher = Fetcher::new()?;
        let report = fetcher.league_zones(&to_fetch).await;
        print_skipped(&report.skipped);
        save_staged(&store, CacheKind::LeagueZones, report.rows, args.hard_refresh)?;
    }

    let records: Vec<ZoneRecord> = store.load(CacheKind::LeagueZones)?;
    let in_range: Vec<ZoneRecord> = records
        .into_iter()
        .filter(|r| r.season >= args.start_season && r.season <= args.end_season)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&in_range)?);
    } else {
        summarize_zones(&in_range, &[LEAGUE_ENTITY], args.verbose);
    }

    Ok(())
}
