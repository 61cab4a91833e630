//! Aggregate reshaping of cached zone tables.
//!
//! Turns raw (season, entity, zone) counts into the share tables the
//! dashboard renders: per-season attempt shares by zone and three-point
//! attempt-rate trends.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::cli::types::{Season, Zone};
use crate::storage::models::ZoneRecord;

/// One zone's slice of an entity's attempts in one season.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneShare {
    pub season: Season,
    pub entity: String,
    pub zone: Zone,
    pub fga: u32,
    /// Fraction of the entity's attempts that season, 0.0 when the season
    /// total is zero.
    pub share: f64,
}

/// Compute per-season attempt shares for every row in the table.
pub fn zone_shares(records: &[ZoneRecord]) -> Vec<ZoneShare> {
    let mut season_totals: BTreeMap<(&str, Season), u64> = BTreeMap::new();
    for record in records {
        *season_totals
            .entry((record.entity.as_str(), record.season))
            .or_insert(0) += u64::from(record.fga);
    }

    records
        .iter()
        .map(|record| {
            let total = season_totals[&(record.entity.as_str(), record.season)];
            ZoneShare {
                season: record.season,
                entity: record.entity.clone(),
                zone: record.zone,
                fga: record.fga,
                share: if total == 0 {
                    0.0
                } else {
                    f64::from(record.fga) / total as f64
                },
            }
        })
        .collect()
}

/// Summed share of a zone group per season, for one entity.
pub fn grouped_share(shares: &[ZoneShare], entity: &str, zones: &[Zone]) -> BTreeMap<Season, f64> {
    let mut out = BTreeMap::new();
    for share in shares
        .iter()
        .filter(|s| s.entity == entity && zones.contains(&s.zone))
    {
        *out.entry(share.season).or_insert(0.0) += share.share;
    }
    out
}

/// Three-point attempt rate per season for one entity.
pub fn three_point_share(shares: &[ZoneShare], entity: &str) -> BTreeMap<Season, f64> {
    grouped_share(shares, entity, &Zone::THREE_POINT)
}

/// First-to-last movement of a zone group's share over the loaded range.
#[derive(Debug, Clone, Copy)]
pub struct ShareDelta {
    pub first_season: Season,
    pub last_season: Season,
    pub first: f64,
    pub last: f64,
}

impl ShareDelta {
    pub fn change(&self) -> f64 {
        self.last - self.first
    }
}

pub fn share_delta(shares: &[ZoneShare], entity: &str, zones: &[Zone]) -> Option<ShareDelta> {
    let by_season = grouped_share(shares, entity, zones);
    let (&first_season, &first) = by_season.iter().next()?;
    let (&last_season, &last) = by_season.iter().next_back()?;
    Some(ShareDelta {
        first_season,
        last_season,
        first,
        last,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::models::LEAGUE_ENTITY;

    fn record(season: u16, entity: &str, zone: Zone, fga: u32) -> ZoneRecord {
        ZoneRecord {
            season: Season::new(season),
            entity: entity.to_string(),
            zone,
            fga,
            fgm: fga / 2,
        }
    }

    fn sample_table() -> Vec<ZoneRecord> {
        vec![
            record(2000, LEAGUE_ENTITY, Zone::RestrictedArea, 400),
            record(2000, LEAGUE_ENTITY, Zone::MidRange, 400),
            record(2000, LEAGUE_ENTITY, Zone::AboveTheBreak3, 200),
            record(2015, LEAGUE_ENTITY, Zone::RestrictedArea, 300),
            record(2015, LEAGUE_ENTITY, Zone::MidRange, 200),
            record(2015, LEAGUE_ENTITY, Zone::AboveTheBreak3, 400),
            record(2015, LEAGUE_ENTITY, Zone::LeftCorner3, 100),
            record(2015, "Stephen Curry", Zone::AboveTheBreak3, 90),
            record(2015, "Stephen Curry", Zone::RestrictedArea, 10),
        ]
    }

    #[test]
    fn test_shares_sum_to_one_per_entity_season() {
        let shares = zone_shares(&sample_table());

        let mut sums: BTreeMap<(String, Season), f64> = BTreeMap::new();
        for s in &shares {
            *sums.entry((s.entity.clone(), s.season)).or_insert(0.0) += s.share;
        }
        for (_, sum) in sums {
            assert!((sum - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_three_point_share_sums_three_zones() {
        let shares = zone_shares(&sample_table());
        let league = three_point_share(&shares, LEAGUE_ENTITY);

        assert!((league[&Season::new(2000)] - 0.2).abs() < 1e-9);
        assert!((league[&Season::new(2015)] - 0.5).abs() < 1e-9);

        let curry = three_point_share(&shares, "Stephen Curry");
        assert!((curry[&Season::new(2015)] - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_share_delta_first_to_last() {
        let shares = zone_shares(&sample_table());
        let delta = share_delta(&shares, LEAGUE_ENTITY, &Zone::THREE_POINT).unwrap();

        assert_eq!(delta.first_season, Season::new(2000));
        assert_eq!(delta.last_season, Season::new(2015));
        assert!((delta.change() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_share_delta_missing_entity() {
        let shares = zone_shares(&sample_table());
        assert!(share_delta(&shares, "James Harden", &Zone::THREE_POINT).is_none());
    }

    #[test]
    fn test_zero_total_season_yields_zero_share() {
        let table = vec![record(2011, LEAGUE_ENTITY, Zone::Backcourt, 0)];
        let shares = zone_shares(&table);
        assert_eq!(shares[0].share, 0.0);
    }
}
