//! Directory of the tracked players.
//!
//! The per-player tables cover a fixed set of stars whose shot selection the
//! dashboard compares against the league. Rookie seasons gate fetch planning
//! so pre-career seasons are never requested.

use crate::cli::types::{PlayerId, Season};
use crate::error::{Result, ShotsError};

/// A player the per-player tables track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedPlayer {
    pub id: PlayerId,
    pub name: &'static str,
    /// Start year of the player's first NBA season.
    pub rookie_year: u16,
}

impl TrackedPlayer {
    /// The subset of `seasons` the player was active for.
    pub fn active_seasons(&self, seasons: &[Season]) -> Vec<Season> {
        seasons
            .iter()
            .copied()
            .filter(|s| s.start_year() >= self.rookie_year)
            .collect()
    }
}

/// Players of interest, in display order. Curry first; he is also the
/// default shot-chart subject.
pub const TRACKED_PLAYERS: &[TrackedPlayer] = &[
    TrackedPlayer {
        id: PlayerId(201939),
        name: "Stephen Curry",
        rookie_year: 2009,
    },
    TrackedPlayer {
        id: PlayerId(201935),
        name: "James Harden",
        rookie_year: 2009,
    },
    TrackedPlayer {
        id: PlayerId(2544),
        name: "LeBron James",
        rookie_year: 2003,
    },
    TrackedPlayer {
        id: PlayerId(201142),
        name: "Kevin Durant",
        rookie_year: 2007,
    },
    TrackedPlayer {
        id: PlayerId(201942),
        name: "DeMar DeRozan",
        rookie_year: 2009,
    },
];

/// Resolve a name to a tracked player by case-insensitive substring match.
pub fn find_player(name: &str) -> Result<&'static TrackedPlayer> {
    let needle = name.trim().to_lowercase();
    TRACKED_PLAYERS
        .iter()
        .find(|p| p.name.to_lowercase().contains(&needle))
        .ok_or_else(|| ShotsError::PlayerNotFound {
            name: name.to_string(),
        })
}

/// Default subject for the shot-chart table.
pub fn default_chart_player() -> &'static TrackedPlayer {
    &TRACKED_PLAYERS[0]
}
