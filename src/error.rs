//! Error types for the NBA shot-location CLI

use thiserror::Error;

use crate::storage::CacheKind;

pub type Result<T> = std::result::Result<T, ShotsError>;

#[derive(Error, Debug)]
pub enum ShotsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stats API response missing or malformed: {context}")]
    MalformedResponse { context: String },

    #[error("No cache file for {kind}; fetch it first")]
    CacheMiss { kind: CacheKind },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Unknown shot zone: {zone}")]
    InvalidZone { zone: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Stats API returned no data")]
    NoData,
}

impl From<anyhow::Error> for ShotsError {
    fn from(err: anyhow::Error) -> Self {
        ShotsError::Cache {
            message: err.to_string(),
        }
    }
}
