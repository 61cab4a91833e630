//! Update all cache tables command for bulk data population
//!
//! Efficiently populates every cache table for a season range by running the
//! three single-table commands in sequence, each topping up whatever
//! coverage its table is missing.

use super::{
    league_zones::handle_league_zones, player_zones::handle_player_zones,
    shot_chart::handle_shot_chart,
};
use crate::{cli::FetchArgs, Result};

/// Update league zones, player zones, and the shot chart for one range
///
/// Unless a hard refresh was requested, each table is refreshed
/// incrementally, so already-covered (season, entity) pairs cost no
/// network calls.
pub async fn handle_update_all_data(args: FetchArgs) -> Result<()> {
    println!(
        "Updating all shot-location tables for {} through {}",
        args.start_season, args.end_season
    );

    // Top up missing coverage even when the files already exist.
    let pass = FetchArgs {
        refresh: true,
        ..args
    };

    println!("\n--- League zones ---");
    handle_league_zones(pass.clone()).await?;

    println!("\n--- Player zones ---");
    handle_player_zones(pass.clone(), None).await?;

    println!("\n--- Shot chart ---");
    handle_shot_chart(pass, None).await?;

    println!("\n✓ Data update complete!");
    Ok(())
}
