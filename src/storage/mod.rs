//! Storage layer for the NBA shot-location CLI
//!
//! Flat delimited cache tables, one file per record kind, organized into
//! logical components:
//! - `models`: record types and their row codecs
//! - `csv`: minimal delimited read/write
//! - `store`: load / merge / status over the cache directory

pub mod csv;
pub mod models;
pub mod store;


// Re-export the main types for easy access
pub use models::*;
pub use store::{CacheStatus, CacheStore, MergeStats};
