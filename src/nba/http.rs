use reqwest::{header::HeaderMap, Client};
use serde_json::Value;

use crate::cli::types::{PlayerId, Season};
use crate::Result;

/// Base path for the stats.nba.com API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Query `leaguedashteamshotlocations` for one season, by zone.
///
/// The endpoint requires every parameter to be present, empty or not.
pub async fn get_shot_locations(
    client: &Client,
    headers: HeaderMap,
    season: Season,
) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/leaguedashteamshotlocations");
    let season_label = season.label();
    let params = [
        ("Conference", ""),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("DistanceRange", "By Zone"),
        ("Division", ""),
        ("GameScope", ""),
        ("GameSegment", ""),
        ("LastNGames", "0"),
        ("LeagueID", "00"),
        ("Location", ""),
        ("MeasureType", "Base"),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Outcome", ""),
        ("PORound", "0"),
        ("PaceAdjust", "N"),
        ("PerMode", "Totals"),
        ("Period", "0"),
        ("PlayerExperience", ""),
        ("PlayerPosition", ""),
        ("PlusMinus", "N"),
        ("Rank", "N"),
        ("Season", season_label.as_str()),
        ("SeasonSegment", ""),
        ("SeasonType", "Regular Season"),
        ("ShotClockRange", ""),
        ("StarterBench", ""),
        ("TeamID", "0"),
        ("VsConference", ""),
        ("VsDivision", ""),
    ];

    let res = client
        .get(&url)
        .headers(headers)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// Query `shotchartdetail` for one player and season, all field-goal attempts.
pub async fn get_shot_chart(
    client: &Client,
    headers: HeaderMap,
    player_id: PlayerId,
    season: Season,
) -> Result<Value> {
    let url = format!("{STATS_BASE_URL}/shotchartdetail");
    let season_label = season.label();
    let player = player_id.to_string();
    let params = [
        ("AheadBehind", ""),
        ("ClutchTime", ""),
        ("ContextFilter", ""),
        ("ContextMeasure", "FGA"),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("EndPeriod", "10"),
        ("EndRange", "28800"),
        ("GameID", ""),
        ("GameSegment", ""),
        ("LastNGames", "0"),
        ("LeagueID", "00"),
        ("Location", ""),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Outcome", ""),
        ("Period", "0"),
        ("PlayerID", player.as_str()),
        ("PlayerPosition", ""),
        ("PointDiff", ""),
        ("Position", ""),
        ("RangeType", "0"),
        ("RookieYear", ""),
        ("Season", season_label.as_str()),
        ("SeasonSegment", ""),
        ("SeasonType", "Regular Season"),
        ("StartPeriod", "1"),
        ("StartRange", "0"),
        ("TeamID", "0"),
        ("VsConference", ""),
        ("VsDivision", ""),
    ];

    let res = client
        .get(&url)
        .headers(headers)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}
