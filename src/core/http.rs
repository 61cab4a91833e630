//! HTTP utilities for stats API communication

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ORIGIN, REFERER, USER_AGENT};

/// Build the header block stats.nba.com requires.
///
/// The stats endpoints reject requests without a browser-like User-Agent
/// and the NBA referer/origin pair.
pub fn stats_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        ),
    );
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    h
}
