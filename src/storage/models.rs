//! Cached record types and their flat-table row codecs.

use crate::cli::types::{Season, Zone};
use crate::error::{Result, ShotsError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Entity identifier for league-aggregate rows.
pub const LEAGUE_ENTITY: &str = "league";

/// Half-court bounds (tenths of feet) used for shot-chart rendering.
/// X spans the 50 ft court width; Y runs baseline to the half-court line.
pub const COURT_X_MIN: i32 = -250;
pub const COURT_X_MAX: i32 = 250;
pub const COURT_Y_MIN: i32 = -52;
pub const COURT_Y_MAX: i32 = 418;

/// The record kinds the cache persists, one flat file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheKind {
    LeagueZones,
    PlayerZones,
    ShotChart,
}

impl CacheKind {
    pub const ALL: [CacheKind; 3] = [
        CacheKind::LeagueZones,
        CacheKind::PlayerZones,
        CacheKind::ShotChart,
    ];

    /// File name of this kind's table under the cache root.
    pub fn file_name(&self) -> &'static str {
        match self {
            CacheKind::LeagueZones => "league_shot_zones.csv",
            CacheKind::PlayerZones => "player_shot_zones.csv",
            CacheKind::ShotChart => "player_shotchart.csv",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CacheKind::LeagueZones => "league-zones",
            CacheKind::PlayerZones => "player-zones",
            CacheKind::ShotChart => "shot-chart",
        };
        write!(f, "{}", s)
    }
}

/// A record type that can live in a cache table.
///
/// `HEADER` must start with the SEASON and ENTITY columns; coverage
/// reporting reads those two positions without knowing the record type.
pub trait CacheRecord: Clone {
    const HEADER: &'static [&'static str];

    /// Natural key; duplicates collapse on it, last write wins.
    type Key: Ord + Clone;

    fn key(&self) -> Self::Key;
    fn season(&self) -> Season;
    fn entity(&self) -> &str;
    fn to_row(&self) -> Vec<String>;
    fn from_row(row: &[String]) -> Result<Self>;
}

/// One row per (season, entity, zone): attempts and makes in that zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRecord {
    pub season: Season,
    pub entity: String,
    pub zone: Zone,
    pub fga: u32,
    pub fgm: u32,
}

impl CacheRecord for ZoneRecord {
    const HEADER: &'static [&'static str] = &["SEASON", "ENTITY", "SHOT_ZONE_BASIC", "FGA", "FGM"];

    type Key = (Season, String, Zone);

    fn key(&self) -> Self::Key {
        (self.season, self.entity.clone(), self.zone)
    }

    fn season(&self) -> Season {
        self.season
    }

    fn entity(&self) -> &str {
        &self.entity
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.season.label(),
            self.entity.clone(),
            self.zone.as_str().to_string(),
            self.fga.to_string(),
            self.fgm.to_string(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self> {
        Ok(Self {
            season: parse_cell(row, 0, "SEASON")?,
            entity: cell(row, 1, "ENTITY")?.to_string(),
            zone: parse_cell(row, 2, "SHOT_ZONE_BASIC")?,
            fga: parse_cell(row, 3, "FGA")?,
            fgm: parse_cell(row, 4, "FGM")?,
        })
    }
}

/// One row per individual shot attempt for a tracked player.
///
/// (game_id, game_event_id) is the per-shot index within a season; the
/// coordinates are in tenths of feet, origin at the basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShotRecord {
    pub season: Season,
    pub entity: String,
    pub game_id: String,
    pub game_event_id: u32,
    pub game_date: String,
    pub loc_x: i32,
    pub loc_y: i32,
    pub made: bool,
    pub zone: Zone,
}

impl ShotRecord {
    /// Whether the shot falls inside the half-court render bounds.
    pub fn in_bounds(&self) -> bool {
        (COURT_X_MIN..=COURT_X_MAX).contains(&self.loc_x)
            && (COURT_Y_MIN..=COURT_Y_MAX).contains(&self.loc_y)
    }
}

impl CacheRecord for ShotRecord {
    const HEADER: &'static [&'static str] = &[
        "SEASON",
        "ENTITY",
        "GAME_ID",
        "GAME_EVENT_ID",
        "GAME_DATE",
        "LOC_X",
        "LOC_Y",
        "SHOT_MADE_FLAG",
        "SHOT_ZONE_BASIC",
    ];

    type Key = (Season, String, String, u32);

    fn key(&self) -> Self::Key {
        (
            self.season,
            self.entity.clone(),
            self.game_id.clone(),
            self.game_event_id,
        )
    }

    fn season(&self) -> Season {
        self.season
    }

    fn entity(&self) -> &str {
        &self.entity
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.season.label(),
            self.entity.clone(),
            self.game_id.clone(),
            self.game_event_id.to_string(),
            self.game_date.clone(),
            self.loc_x.to_string(),
            self.loc_y.to_string(),
            if self.made { "1" } else { "0" }.to_string(),
            self.zone.as_str().to_string(),
        ]
    }

    fn from_row(row: &[String]) -> Result<Self> {
        let made_flag: u8 = parse_cell(row, 7, "SHOT_MADE_FLAG")?;
        Ok(Self {
            season: parse_cell(row, 0, "SEASON")?,
            entity: cell(row, 1, "ENTITY")?.to_string(),
            game_id: cell(row, 2, "GAME_ID")?.to_string(),
            game_event_id: parse_cell(row, 3, "GAME_EVENT_ID")?,
            game_date: cell(row, 4, "GAME_DATE")?.to_string(),
            loc_x: parse_cell(row, 5, "LOC_X")?,
            loc_y: parse_cell(row, 6, "LOC_Y")?,
            made: made_flag != 0,
            zone: parse_cell(row, 8, "SHOT_ZONE_BASIC")?,
        })
    }
}

fn cell<'a>(row: &'a [String], idx: usize, name: &str) -> Result<&'a str> {
    row.get(idx).map(String::as_str).ok_or_else(|| ShotsError::Cache {
        message: format!("row too short, missing {name} column"),
    })
}

fn parse_cell<T>(row: &[String], idx: usize, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = cell(row, idx, name)?;
    raw.parse().map_err(|e| ShotsError::Cache {
        message: format!("bad {name} value {raw:?}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zone_record() -> ZoneRecord {
        ZoneRecord {
            season: Season::new(2015),
            entity: LEAGUE_ENTITY.to_string(),
            zone: Zone::AboveTheBreak3,
            fga: 24110,
            fgm: 8392,
        }
    }

    fn sample_shot_record() -> ShotRecord {
        ShotRecord {
            season: Season::new(2015),
            entity: "Stephen Curry".to_string(),
            game_id: "0021500003".to_string(),
            game_event_id: 17,
            game_date: "20151027".to_string(),
            loc_x: -213,
            loc_y: 95,
            made: true,
            zone: Zone::LeftCorner3,
        }
    }

    #[test]
    fn test_zone_record_row_round_trip() {
        let record = sample_zone_record();
        let row = record.to_row();

        assert_eq!(row.len(), ZoneRecord::HEADER.len());
        assert_eq!(ZoneRecord::from_row(&row).unwrap(), record);
    }

    #[test]
    fn test_shot_record_row_round_trip() {
        let record = sample_shot_record();
        let row = record.to_row();

        assert_eq!(row.len(), ShotRecord::HEADER.len());
        assert_eq!(ShotRecord::from_row(&row).unwrap(), record);
    }

    #[test]
    fn test_from_row_rejects_short_row() {
        let mut row = sample_zone_record().to_row();
        row.truncate(3);

        let err = ZoneRecord::from_row(&row);
        assert!(matches!(err, Err(ShotsError::Cache { .. })));
    }

    #[test]
    fn test_from_row_rejects_bad_number() {
        let mut row = sample_zone_record().to_row();
        row[3] = "not-a-count".to_string();

        let err = ZoneRecord::from_row(&row);
        assert!(matches!(err, Err(ShotsError::Cache { .. })));
    }

    #[test]
    fn test_shot_bounds() {
        let mut shot = sample_shot_record();
        assert!(shot.in_bounds());

        shot.loc_y = 700; // backcourt heave, past the half-court line
        assert!(!shot.in_bounds());

        shot.loc_y = 95;
        shot.loc_x = -260;
        assert!(!shot.in_bounds());
    }

    #[test]
    fn test_headers_lead_with_season_and_entity() {
        assert_eq!(&ZoneRecord::HEADER[..2], &["SEASON", "ENTITY"]);
        assert_eq!(&ShotRecord::HEADER[..2], &["SEASON", "ENTITY"]);
    }
}
