//! Core utilities for the NBA shot-location CLI
//!
//! This module consolidates plumbing shared across the application:
//! - `http`: stats API request headers
//! - `rate_limit`: pacing between outbound requests

pub mod http;
pub mod rate_limit;

// Re-export commonly used items for convenience
pub use http::stats_header_map;
pub use rate_limit::{RateLimiter, DEFAULT_MAX_DELAY, DEFAULT_MIN_DELAY};
