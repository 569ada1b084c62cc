//! Pinger configuration types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a single ping session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingerConfig {
    /// Target URL, used opaquely (the core performs no validation).
    pub target: String,

    /// Interval between probe cycles.
    #[serde(with = "humantime_serde")]
    pub interval: Duration,
}

impl Default for PingerConfig {
    fn default() -> Self {
        Self {
            target: "https://www.google.com".to_string(),
            interval: Duration::from_secs(5),
        }
    }
}
