//! Shot chart table command implementation

use super::{print_skipped, save_staged, summarize_shots};
use crate::{
    cli::types::Season,
    cli::FetchArgs,
    nba::{default_chart_player, find_player, plan_pairs, Fetcher},
    storage::models::ShotRecord,
    CacheKind, CacheStore, Result,
};

/// Handle the shot chart command
pub async fn handle_shot_chart(args: FetchArgs, name: Option<String>) -> Result<()> {
    let store = CacheStore::new()?;
    let player = match &name {
        Some(n) => find_player(n)?,
        None => default_chart_player(),
    };

    let seasons = player.active_seasons(&Season::range(args.start_season, args.end_season));
    if seasons.is_empty() {
        println!(
            "⚠ {} has no seasons in {} through {}",
            player.name, args.start_season, args.end_season
        );
        return Ok(());
    }

    let status = store.status(CacheKind::ShotChart)?;
    let requested: Vec<(Season, String)> = seasons
        .iter()
        .map(|&season| (season, player.name.to_string()))
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
                "✓ Shot chart cache already covers {} for the requested range",
                player.name
            );
        }
    } else {
        let to_fetch: Vec<Season> = planned.into_iter().map(|(season, _)| season).collect();
        println!(
            "Fetching shot chart for {} across {} season(s)...",
            player.name,
            to_fetch.len()
        );

        let mut fetcher = Fetcher::new()?;
        let report = fetcher.shot_chart(player, &to_fetch).await;
        if report.out_of_bounds > 0 {
            println!(
                "  {} shot(s) outside the half-court bounds dropped",
                report.out_of_bounds
            );
        }
        print_skipped(&report.skipped);
        save_staged(&store, CacheKind::ShotChart, report.rows, args.hard_refresh)?;
    }

    let records: Vec<ShotRecord> = store.load(CacheKind::ShotChart)?;
    let in_range: Vec<ShotRecord> = records
        .into_iter()
        .filter(|r| {
            r.entity == player.name
                && r.season >= args.start_season
                && r.season <= args.end_season
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&in_range)?);
    } else {
        summarize_shots(&in_range, player.name);
    }

    Ok(())
}
