//! Single-target HTTP uptime monitoring.
//!
//! This crate provides the polling/retry loop for probing one HTTP(S)
//! endpoint on a fixed interval:
//! - A [`Probe`] seam wrapping the outbound GET
//! - An [`EventSink`] seam for operator-facing log events
//! - The [`Pinger`] loop that classifies each outcome, threads the attempt
//!   counter, and stays cancellable between cycles
//!
//! Exactly status 200 counts as "up"; every other status and every transport
//! failure re-enters the cycle. The loop only ends through its cancellation
//! token.
//!
//! # Example
//!
//! ```no_run
//! use pingwatch::{HttpProbe, Pinger, PingerConfig, TracingSink};
//! use std::sync::Arc;
//! use std::time::Duration;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> common::Result<()> {
//! let config = PingerConfig {
//!     target: "https://www.google.com".to_string(),
//!     interval: Duration::from_secs(5),
//! };
//!
//! let probe = Arc::new(HttpProbe::new(config.target.clone())?);
//! let pinger = Pinger::new(probe, Arc::new(TracingSink), config);
//!
//! let cancel = CancellationToken::new();
//! pinger.run(cancel).await;
//! # Ok(())
//! # }
//! ```

pub mod pinger;
pub mod probe;
pub mod sink;
pub mod types;

pub use pinger::Pinger;
pub use probe::{HttpProbe, Probe};
pub use sink::{EventSink, Severity, TracingSink};
pub use types::PingerConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(Severity::Error.to_string(), "ERROR");
    }

    #[test]
    fn test_config_default() {
        let config = PingerConfig::default();
        assert_eq!(config.target, "https://www.google.com");
        assert_eq!(config.interval, Duration::from_secs(5));
    }
}
