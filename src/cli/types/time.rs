//! Season handling for NBA season labels like "2015-16".

use crate::error::{Result, ShotsError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for an NBA season, stored as its starting year.
///
/// The stats API and the cache files both use the two-year label form
/// (`"2015-16"`), which is what [`Season::label`] and `Display` produce.
///
/// # Examples
///
/// ```rust
/// use nba_shots::Season;
///
/// let season = Season::new(2015);
/// assert_eq!(season.label(), "2015-16");
/// assert_eq!("2015-16".parse::<Season>().unwrap(), season);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Season(pub u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    /// The calendar year the season starts in.
    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// Label in the stats API form, e.g. `"2000-01"` or `"2015-16"`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }

    /// Inclusive run of seasons from `start` through `end`.
    pub fn range(start: Season, end: Season) -> Vec<Season> {
        (start.0..=end.0).map(Season::new).collect()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Season {
    type Err = ShotsError;

    /// Accepts both the label form ("2015-16") and a bare start year ("2015").
    fn from_str(s: &str) -> Result<Self> {
        let start = s.split('-').next().unwrap_or(s);
        Ok(Self(start.trim().parse()?))
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
