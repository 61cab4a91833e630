//! CLI argument definitions and parsing structures.

use super::types::Season;
use crate::{FIRST_SEASON, LAST_SEASON};
use clap::{Args, Parser, Subcommand};

/// Common fetch/refresh arguments shared between commands
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// First season of the requested range, by label or start year (e.g. 2015-16 or 2015).
    #[clap(long, default_value_t = Season::new(FIRST_SEASON))]
    pub start_season: Season,

    /// Last season of the requested range (inclusive).
    #[clap(long, default_value_t = Season::new(LAST_SEASON))]
    pub end_season: Season,

    /// Fetch whatever coverage is missing from the cache and merge it in.
    #[clap(long)]
    pub refresh: bool,

    /// Ignore existing coverage: refetch the whole range and overwrite the cache file.
    #[clap(long)]
    pub hard_refresh: bool,

    /// Output the resulting table as JSON instead of a summary.
    #[clap(long)]
    pub json: bool,

    /// Show detailed progress information.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "nba-shots", about = "NBA shot-location data fetcher and cache")]
pub struct NbaShots {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch shot-location data into the local cache
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },

    /// Report cache file coverage for every record kind
    Status {
        /// Output the report as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// League-wide shot attempts and makes by court zone, one row per season + zone.
    ///
    /// Queries `leaguedashteamshotlocations` (distance range "By Zone") once per
    /// season and aggregates the per-team triples into league totals.
    LeagueZones {
        #[clap(flatten)]
        fetch: FetchArgs,
    },

    /// Per-player shot attempts and makes by court zone for the tracked players.
    ///
    /// Queries `shotchartdetail` once per (player, season) and groups the
    /// returned shots by zone. Seasons before a player's rookie year are skipped.
    PlayerZones {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Restrict to players whose name contains this string - repeatable: `-n Curry -n Harden`.
        #[clap(long, short = 'n')]
        player: Option<Vec<String>>,
    },

    /// Individual shot attempts with court coordinates for one tracked player.
    ShotChart {
        #[clap(flatten)]
        fetch: FetchArgs,

        /// Player name (substring match against the tracked players). Defaults to Stephen Curry.
        #[clap(long, short = 'n')]
        player: Option<String>,
    },

    /// Populate every cache table for the requested season range.
    ///
    /// Runs league zones, player zones, and the shot chart in sequence, so a
    /// fresh machine ends up with all three tables in one command.
    UpdateAllData {
        #[clap(flatten)]
        fetch: FetchArgs,
    },
}
