//! Sequential fetch orchestration over the stats API.
//!
//! One request per (season, entity) pair, paced by the rate limiter, in a
//! fixed order: season ascending, entities in configured list order. A
//! failed pair is recorded and skipped; it never aborts the run.

use reqwest::{header::HeaderMap, Client};
use std::time::Duration;

use super::players::TrackedPlayer;
use super::{http, types};
use crate::cli::types::Season;
use crate::core::{stats_header_map, RateLimiter};
use crate::storage::models::{ShotRecord, ZoneRecord, LEAGUE_ENTITY};
use crate::storage::CacheStatus;
use crate::Result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A (season, entity) pair that failed and was skipped.
#[derive(Debug, Clone)]
pub struct SkippedPair {
    pub season: Season,
    pub entity: String,
    pub reason: String,
}

/// Staging table plus the bookkeeping from one fetch run.
#[derive(Debug)]
pub struct FetchReport<R> {
    pub rows: Vec<R>,
    pub skipped: Vec<SkippedPair>,
    /// Pairs actually requested over the network.
    pub attempted: usize,
    /// Shots dropped for falling outside the half-court render bounds.
    pub out_of_bounds: usize,
}

impl<R> FetchReport<R> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            skipped: Vec::new(),
            attempted: 0,
            out_of_bounds: 0,
        }
    }

    fn record_skip(&mut self, season: Season, entity: &str, reason: String) {
        println!("  ⚠ Skipping {} {}: {}", entity, season, reason);
        self.skipped.push(SkippedPair {
            season,
            entity: entity.to_string(),
            reason,
        });
    }
}

/// Filter requested pairs down to those the cache does not cover yet.
///
/// With `hard_refresh` the coverage check is bypassed and every requested
/// pair is returned. A fully covered request therefore plans zero pairs and
/// an incremental refresh issues no network calls.
pub fn plan_pairs(
    requested: &[(Season, String)],
    status: &CacheStatus,
    hard_refresh: bool,
) -> Vec<(Season, String)> {
    if hard_refresh {
        return requested.to_vec();
    }
    requested
        .iter()
        .filter(|(season, entity)| !status.covers(*season, entity))
        .cloned()
        .collect()
}

/// Owns the HTTP client and rate limiter for one fetch run.
pub struct Fetcher {
    client: Client,
    headers: HeaderMap,
    limiter: RateLimiter,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_limiter(RateLimiter::default())
    }

    pub fn with_limiter(limiter: RateLimiter) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            headers: stats_header_map(),
            limiter,
        })
    }

    /// Fetch league-wide zone totals, one request per season.
    pub async fn league_zones(&mut self, seasons: &[Season]) -> FetchReport<ZoneRecord> {
        let total = seasons.len();
        let mut report = FetchReport::new();

        for (done, &season) in seasons.iter().enumerate() {
            println!("  [{}/{}] league {} ...", done + 1, total, season);
            report.attempted += 1;
            self.limiter.wait().await;

            let result = http::get_shot_locations(&self.client, self.headers.clone(), season)
                .await
                .and_then(|payload| types::league_zone_records(payload, season));
            match result {
                Ok(mut rows) => report.rows.append(&mut rows),
                Err(e) => report.record_skip(season, LEAGUE_ENTITY, e.to_string()),
            }
        }

        report
    }

    /// Fetch per-player zone totals for the given (player, season) pairs,
    /// one shot-chart request each, grouped by zone.
    pub async fn player_zones(
        &mut self,
        pairs: &[(&TrackedPlayer, Season)],
    ) -> FetchReport<ZoneRecord> {
        let total = pairs.len();
        let mut report = FetchReport::new();

        for (done, &(player, season)) in pairs.iter().enumerate() {
            println!("  [{}/{}] {} {} ...", done + 1, total, player.name, season);
            report.attempted += 1;
            self.limiter.wait().await;

            let result = http::get_shot_chart(&self.client, self.headers.clone(), player.id, season)
                .await
                .and_then(|payload| types::shot_records(payload, season, player.name));
            match result {
                Ok(shots) => report.rows.extend(types::aggregate_zone_counts(&shots)),
                Err(e) => report.record_skip(season, player.name, e.to_string()),
            }
        }

        report
    }

    /// Fetch the per-shot chart table for one player across seasons.
    ///
    /// Shots outside the half-court render bounds are dropped and counted;
    /// they still exist upstream but have no place on the chart.
    pub async fn shot_chart(
        &mut self,
        player: &TrackedPlayer,
        seasons: &[Season],
    ) -> FetchReport<ShotRecord> {
        let total = seasons.len();
        let mut report = FetchReport::new();

        for (done, &season) in seasons.iter().enumerate() {
            println!("  [{}/{}] {} {} ...", done + 1, total, player.name, season);
            report.attempted += 1;
            self.limiter.wait().await;

            let result = http::get_shot_chart(&self.client, self.headers.clone(), player.id, season)
                .await
                .and_then(|payload| types::shot_records(payload, season, player.name));
            match result {
                Ok(shots) => {
                    for shot in shots {
                        if shot.in_bounds() {
                            report.rows.push(shot);
                        } else {
                            report.out_of_bounds += 1;
                        }
                    }
                }
                Err(e) => report.record_skip(season, player.name, e.to_string()),
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::CacheKind;
    use std::collections::BTreeSet;

    fn status_covering(seasons: &[u16]) -> CacheStatus {
        let mut pairs = BTreeSet::new();
        let mut season_set = BTreeSet::new();
        for &year in seasons {
            pairs.insert((Season::new(year), LEAGUE_ENTITY.to_string()));
            season_set.insert(Season::new(year));
        }
        CacheStatus {
            kind: CacheKind::LeagueZones,
            exists: !seasons.is_empty(),
            rows: seasons.len(),
            seasons: season_set,
            entities: [LEAGUE_ENTITY.to_string()].into_iter().collect(),
            pairs,
        }
    }

    fn requested(years: std::ops::RangeInclusive<u16>) -> Vec<(Season, String)> {
        years
            .map(|y| (Season::new(y), LEAGUE_ENTITY.to_string()))
            .collect()
    }

    #[test]
    fn test_plan_pairs_fully_covered_is_empty() {
        let status = status_covering(&[2014, 2015, 2016]);
        let planned = plan_pairs(&requested(2014..=2016), &status, false);
        assert!(planned.is_empty());
    }

    #[test]
    fn test_plan_pairs_fetches_only_missing_coverage() {
        let status = status_covering(&[2014, 2015, 2016]);
        let planned = plan_pairs(&requested(2014..=2018), &status, false);

        let seasons: Vec<Season> = planned.into_iter().map(|(s, _)| s).collect();
        assert_eq!(seasons, vec![Season::new(2017), Season::new(2018)]);
    }

    #[test]
    fn test_plan_pairs_hard_refresh_bypasses_coverage() {
        let status = status_covering(&[2014, 2015, 2016]);
        let planned = plan_pairs(&requested(2014..=2016), &status, true);
        assert_eq!(planned.len(), 3);
    }

    #[test]
    fn test_plan_pairs_empty_cache_plans_everything() {
        let status = status_covering(&[]);
        let planned = plan_pairs(&requested(2014..=2015), &status, false);
        assert_eq!(planned.len(), 2);
    }
}
