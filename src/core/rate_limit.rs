//! Delay pacing for outbound stats API calls.
//!
//! The stats endpoints throttle aggressive clients, so every request goes
//! through a [`RateLimiter`] that sleeps for a jittered interval first.
//! Calls are strictly sequential; there is no retry or backoff here.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::time::Duration;

/// Default delay bounds between consecutive requests.
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_millis(600);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(1000);

/// Enforces a jittered minimum delay before each outbound request.
pub struct RateLimiter {
    min: Duration,
    max: Duration,
    rng: SmallRng,
}

impl RateLimiter {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self {
            min,
            max,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic limiter for tests.
    pub fn with_seed(min: Duration, max: Duration, seed: u64) -> Self {
        Self {
            min,
            max,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Draw the next delay uniformly from the configured bounds.
    pub fn next_delay(&mut self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        self.rng.random_range(self.min..=self.max)
    }

    /// Block the calling sequence for the next drawn delay.
    pub async fn wait(&mut self) {
        let delay = self.next_delay();
        tokio::time::sleep(delay).await;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_DELAY, DEFAULT_MAX_DELAY)
    }
}
