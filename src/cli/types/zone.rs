//! Court zone types matching the stats API's `SHOT_ZONE_BASIC` categories.

use crate::error::ShotsError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Coarse court-location category used to bucket shot attempts.
///
/// The variants and their declaration order match the zone breakdown the
/// stats API reports when shot locations are requested by zone. Enum order
/// is the canonical display order, paint-out to backcourt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Zone {
    RestrictedArea,
    PaintNonRa,
    MidRange,
    LeftCorner3,
    RightCorner3,
    AboveTheBreak3,
    Backcourt,
}

impl Zone {
    /// All zones in canonical order.
    pub const ALL: [Zone; 7] = [
        Zone::RestrictedArea,
        Zone::PaintNonRa,
        Zone::MidRange,
        Zone::LeftCorner3,
        Zone::RightCorner3,
        Zone::AboveTheBreak3,
        Zone::Backcourt,
    ];

    /// The three-point zones, for attempt-rate trends.
    pub const THREE_POINT: [Zone; 3] = [Zone::LeftCorner3, Zone::RightCorner3, Zone::AboveTheBreak3];

    /// The exact string the stats API uses for this zone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::RestrictedArea => "Restricted Area",
            Zone::PaintNonRa => "In The Paint (Non-RA)",
            Zone::MidRange => "Mid-Range",
            Zone::LeftCorner3 => "Left Corner 3",
            Zone::RightCorner3 => "Right Corner 3",
            Zone::AboveTheBreak3 => "Above the Break 3",
            Zone::Backcourt => "Backcourt",
        }
    }

    pub fn is_three_point(&self) -> bool {
        Zone::THREE_POINT.contains(self)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zone {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Zone::ALL
            .iter()
            .find(|z| z.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| ShotsError::InvalidZone {
                zone: s.to_string(),
            })
    }
}

impl Serialize for Zone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_api_strings() {
        for zone in Zone::ALL {
            assert_eq!(zone.as_str().parse::<Zone>().unwrap(), zone);
        }
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let err = "Top of Key".parse::<Zone>();
        assert!(matches!(err, Err(ShotsError::InvalidZone { .. })));
    }

    #[test]
    fn test_three_point_classification() {
        assert!(Zone::LeftCorner3.is_three_point());
        assert!(Zone::AboveTheBreak3.is_three_point());
        assert!(!Zone::MidRange.is_three_point());
        assert!(!Zone::Backcourt.is_three_point());
    }
}
