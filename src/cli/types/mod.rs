//! Type-safe wrappers and enums for NBA shot-location data.

pub mod ids;
pub mod time;
pub mod zone;

pub use ids::PlayerId;
pub use time::Season;
pub use zone::Zone;
