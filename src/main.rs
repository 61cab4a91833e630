//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_shots::{
    cli::{Commands, GetCmd, NbaShots},
    commands::{
        cache_status::handle_status, league_zones::handle_league_zones,
        player_zones::handle_player_zones, shot_chart::handle_shot_chart,
        update_all_data::handle_update_all_data,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaShots::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::LeagueZones { fetch } => handle_league_zones(fetch).await?,

            GetCmd::PlayerZones { fetch, player } => handle_player_zones(fetch, player).await?,

            GetCmd::ShotChart { fetch, player } => handle_shot_chart(fetch, player).await?,

            GetCmd::UpdateAllData { fetch } => handle_update_all_data(fetch).await?,
        },

        Commands::Status { json } => handle_status(json)?,
    }

    Ok(())
}
