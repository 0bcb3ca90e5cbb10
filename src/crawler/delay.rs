//! Pause between consecutive requests
//!
//! By default the delay is drawn once, when the scraper is built, and reused for
//! every pause. With `per-request = true` each pause draws a fresh value.

use crate::config::DelayConfig;
use rand::Rng;
use std::time::Duration;

/// Randomized inter-request delay
#[derive(Debug, Clone)]
pub struct RequestDelay {
    min_ms: u64,
    max_ms: u64,
    per_request: bool,

    /// Value drawn at construction
    fixed: Duration,
}

impl RequestDelay {
    /// Creates a delay policy, drawing the per-scan value immediately
    pub fn new(config: &DelayConfig) -> Self {
        Self {
            min_ms: config.min_ms,
            max_ms: config.max_ms,
            per_request: config.per_request,
            fixed: draw(config.min_ms, config.max_ms),
        }
    }

    /// Duration of the next pause
    pub fn next_delay(&self) -> Duration {
        if self.per_request {
            draw(self.min_ms, self.max_ms)
        } else {
            self.fixed
        }
    }

    /// Sleeps for the next pause
    pub async fn wait(&self) {
        let delay = self.next_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// Uniform draw from `[min_ms, max_ms]`
fn draw(min_ms: u64, max_ms: u64) -> Duration {
    if min_ms >= max_ms {
        return Duration::from_millis(min_ms);
    }

    Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
}
