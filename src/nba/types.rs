//! Response envelopes for the stats API and normalization into cache records.
//!
//! The two endpoints use different `resultSets` shapes: `shotchartdetail`
//! returns an array of flat result sets, while `leaguedashteamshotlocations`
//! returns a single object whose headers are grouped by shot category with a
//! column span per zone.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::cli::types::{Season, Zone};
use crate::error::{Result, ShotsError};
use crate::storage::models::{ShotRecord, ZoneRecord, LEAGUE_ENTITY};


/// Envelope for endpoints whose `resultSets` is an array (`shotchartdetail`).
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// Envelope for `leaguedashteamshotlocations`, whose `resultSets` is one
/// object with two-level headers.
#[derive(Debug, Deserialize)]
pub struct ShotLocationsEnvelope {
    #[serde(rename = "resultSets")]
    pub result_sets: ShotLocationsSet,
}

#[derive(Debug, Deserialize)]
pub struct ShotLocationsSet {
    pub name: String,
    pub headers: Vec<ColumnGroup>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

/// One header group: the zone names plus how the flat columns map onto them.
#[derive(Debug, Deserialize)]
pub struct ColumnGroup {
    pub name: String,
    #[serde(rename = "columnsToSkip", default)]
    pub columns_to_skip: usize,
    #[serde(rename = "columnSpan")]
    pub column_span: usize,
    #[serde(rename = "columnNames")]
    pub column_names: Vec<String>,
}

fn malformed(context: impl Into<String>) -> ShotsError {
    ShotsError::MalformedResponse {
        context: context.into(),
    }
}

/// Normalize a shot-locations payload into one league row per zone.
///
/// Each team row carries an (FGM, FGA, FG_PCT) triple per zone; the triples
/// are summed across teams into league totals. Null cells (a zone a team
/// never shot from) count as zero.
pub fn league_zone_records(payload: Value, season: Season) -> Result<Vec<ZoneRecord>> {
    let envelope: ShotLocationsEnvelope =
        serde_json::from_value(payload).map_err(|e| malformed(format!("shot locations envelope: {e}")))?;
    let set = envelope.result_sets;

    let group = set
        .headers
        .first()
        .ok_or_else(|| malformed("missing shot category header group"))?;
    if group.column_span < 2 {
        return Err(malformed(format!(
            "unexpected column span {} in {} header group {}",
            group.column_span, set.name, group.name
        )));
    }
    if set.row_set.is_empty() {
        return Err(ShotsError::NoData);
    }

    let mut totals: BTreeMap<Zone, (u32, u32)> = BTreeMap::new();
    for row in &set.row_set {
        for (zone_index, zone_name) in group.column_names.iter().enumerate() {
            let zone: Zone = zone_name.parse()?;
            let base = group.columns_to_skip + zone_index * group.column_span;
            let fgm = count_at(row, base)?;
            let fga = count_at(row, base + 1)?;
            let entry = totals.entry(zone).or_insert((0, 0));
            entry.0 += fga;
            entry.1 += fgm;
        }
    }

    Ok(totals
        .into_iter()
        .map(|(zone, (fga, fgm))| ZoneRecord {
            season,
            entity: LEAGUE_ENTITY.to_string(),
            zone,
            fga,
            fgm,
        })
        .collect())
}

/// Normalize a shot-chart payload into per-shot records for one player.
///
/// Columns are located by header name, so reordered responses still parse.
/// An empty row set surfaces as [`ShotsError::NoData`] so the caller can
/// record the pair as skipped.
pub fn shot_records(payload: Value, season: Season, entity: &str) -> Result<Vec<ShotRecord>> {
    let envelope: ChartEnvelope =
        serde_json::from_value(payload).map_err(|e| malformed(format!("shot chart envelope: {e}")))?;
    let set = envelope
        .result_sets
        .into_iter()
        .find(|s| s.name == "Shot_Chart_Detail")
        .ok_or_else(|| malformed("missing Shot_Chart_Detail result set"))?;
    if set.row_set.is_empty() {
        return Err(ShotsError::NoData);
    }

    let col = |name: &str| {
        set.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| malformed(format!("missing {name} column")))
    };
    let game_id = col("GAME_ID")?;
    let game_event_id = col("GAME_EVENT_ID")?;
    let game_date = col("GAME_DATE")?;
    let loc_x = col("LOC_X")?;
    let loc_y = col("LOC_Y")?;
    let made_flag = col("SHOT_MADE_FLAG")?;
    let zone = col("SHOT_ZONE_BASIC")?;

    set.row_set
        .iter()
        .map(|row| {
            Ok(ShotRecord {
                season,
                entity: entity.to_string(),
                game_id: str_at(row, game_id)?.to_string(),
                game_event_id: count_at(row, game_event_id)?,
                game_date: str_at(row, game_date)?.to_string(),
                loc_x: coord_at(row, loc_x)?,
                loc_y: coord_at(row, loc_y)?,
                made: count_at(row, made_flag)? != 0,
                zone: str_at(row, zone)?.parse()?,
            })
        })
        .collect()
}

/// Group per-shot records into one zone row per (season, entity, zone).
pub fn aggregate_zone_counts(shots: &[ShotRecord]) -> Vec<ZoneRecord> {
    let mut totals: BTreeMap<(Season, String, Zone), (u32, u32)> = BTreeMap::new();
    for shot in shots {
        let entry = totals
            .entry((shot.season, shot.entity.clone(), shot.zone))
            .or_insert((0, 0));
        entry.0 += 1;
        if shot.made {
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|((season, entity, zone), (fga, fgm))| ZoneRecord {
            season,
            entity,
            zone,
            fga,
            fgm,
        })
        .collect()
}

fn value_at<'a>(row: &'a [Value], idx: usize) -> Result<&'a Value> {
    row.get(idx)
        .ok_or_else(|| malformed(format!("row shorter than expected at column {idx}")))
}

fn str_at<'a>(row: &'a [Value], idx: usize) -> Result<&'a str> {
    value_at(row, idx)?
        .as_str()
        .ok_or_else(|| malformed(format!("expected string at column {idx}")))
}

/// Non-negative count; nulls read as zero.
fn count_at(row: &[Value], idx: usize) -> Result<u32> {
    let value = value_at(row, idx)?;
    if value.is_null() {
        return Ok(0);
    }
    value
        .as_f64()
        .filter(|f| *f >= 0.0)
        .map(|f| f.round() as u32)
        .ok_or_else(|| malformed(format!("expected non-negative count at column {idx}")))
}

/// Signed court coordinate in tenths of feet.
fn coord_at(row: &[Value], idx: usize) -> Result<i32> {
    value_at(row, idx)?
        .as_i64()
        .map(|v| v as i32)
        .ok_or_else(|| malformed(format!("expected coordinate at column {idx}")))
}
