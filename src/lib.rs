//! NBA Shot-Location CLI Library
//!
//! A Rust library and CLI for pulling historical NBA shot-location data from
//! the stats.nba.com API, caching it as flat CSV tables, and reshaping it
//! into the aggregate tables a dashboard renders.
//!
//! ## Features
//!
//! - **League zone table**: league-wide attempts and makes by court zone,
//!   one row per season + zone
//! - **Player zone tables**: the same breakdown per tracked player
//! - **Shot chart**: individual shot attempts with court coordinates for one
//!   tracked player
//! - **Idempotent caching**: incremental refresh fetches only missing
//!   (season, entity) coverage; hard refresh rebuilds a table from scratch
//! - **Rate limiting**: jittered pacing between sequential stats API calls
//! - **Partial-failure tolerance**: a failed pair is skipped and reported,
//!   never aborting the run
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_shots::storage::models::ZoneRecord;
//! use nba_shots::{CacheKind, CacheStore, Result};
//!
//! # fn example() -> Result<()> {
//! // Read the cached league table; a miss means it must be fetched first
//! // (e.g. `nba-shots get league-zones`).
//! let store = CacheStore::new()?;
//! let rows: Vec<ZoneRecord> = store.load(CacheKind::LeagueZones)?;
//! println!("{} cached zone rows", rows.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod compute;
pub mod core;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, Zone};
pub use error::{Result, ShotsError};
pub use storage::{CacheKind, CacheStatus, CacheStore};

/// Start year of the earliest season the dashboard tracks.
pub const FIRST_SEASON: u16 = 2000;
/// Start year of the latest season the dashboard tracks.
pub const LAST_SEASON: u16 = 2024;
