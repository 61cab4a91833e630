//! Remote stats client boundary and fetch orchestration
//!
//! - `http`: raw stats.nba.com endpoint calls
//! - `types`: response envelopes and normalization into cache records
//! - `players`: tracked-player directory and name resolution
//! - `fetch`: sequential, rate-limited fetch runs with per-pair skip

pub mod fetch;
pub mod http;
pub mod players;
pub mod types;

pub use fetch::{plan_pairs, FetchReport, Fetcher, SkippedPair};
pub use players::{default_chart_player, find_player, TrackedPlayer, TRACKED_PLAYERS};
