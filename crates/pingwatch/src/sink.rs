//! Event sink abstraction for operator-facing output.

use std::fmt;
use tracing::{error, info, warn};

/// Severity of an emitted event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine liveness information
    Info,
    /// A single failed probe
    Warn,
    /// A sustained-failure milestone
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Sink for the discrete events produced by the pinger.
///
/// The pinger never touches process-wide console state directly; everything
/// operator-facing goes through this seam.
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    fn emit(&self, severity: Severity, message: &str);
}

/// Sink that forwards events to the active `tracing` subscriber.
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{}", message),
            Severity::Warn => warn!("{}", message),
            Severity::Error => error!("{}", message),
        }
    }
}
