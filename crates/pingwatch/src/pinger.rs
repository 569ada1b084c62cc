//! The probe/wait cycle state machine.

use crate::probe::Probe;
use crate::sink::{EventSink, Severity};
use crate::types::PingerConfig;
use std::sync::Arc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Failed attempts between "application is down" milestones. A success with
/// an attempt count above this is reported as a recovery.
const DOWN_MILESTONE: u64 = 10;

/// Drives the probe/wait cycle against a single target.
///
/// One probe is in flight at a time. Every outcome (success, bad status,
/// transport error) leads back into the cycle; the only exit is the
/// cancellation token, observed at the top of each cycle and during the
/// inter-cycle wait.
pub struct Pinger {
    probe: Arc<dyn Probe>,
    sink: Arc<dyn EventSink>,
    config: PingerConfig,
}

impl Pinger {
    /// Create a new pinger.
    pub fn new(probe: Arc<dyn Probe>, sink: Arc<dyn EventSink>, config: PingerConfig) -> Self {
        Self {
            probe,
            sink,
            config,
        }
    }

    /// Run the probe loop until the token is cancelled.
    ///
    /// The attempt counter starts at 1, increments by exactly 1 after every
    /// failed cycle, and restarts at 1 after every successful cycle. An
    /// in-flight probe is not aborted by cancellation; the loop finishes the
    /// call and stops before the next cycle.
    pub async fn run(&self, cancel: CancellationToken) {
        let target = &self.config.target;
        let mut attempt: u64 = 1;

        loop {
            if cancel.is_cancelled() {
                debug!(target = %target, "pinger cancelled");
                return;
            }

            match self.probe.check().await {
                Ok(200) => {
                    if attempt > DOWN_MILESTONE {
                        self.sink.emit(Severity::Info, "App was down but now is up!");
                    }

                    self.sink.emit(
                        Severity::Info,
                        &format!(
                            "Ping successful on [{}] attempt, the URL [{}] is alive!",
                            attempt, target
                        ),
                    );

                    self.wait(&cancel).await;
                    // Success restarts the attempt counter.
                    attempt = 1;
                }
                Ok(_status) => {
                    self.sink.emit(
                        Severity::Warn,
                        &format!("Ping to URL [{}] failed. Attempt [{}]", target, attempt),
                    );

                    attempt = self.continue_after_failure(attempt, &cancel).await;
                }
                Err(e) => {
                    debug!(target = %target, error = %e, "probe transport failure");

                    self.sink.emit(
                        Severity::Warn,
                        &format!("Failed to acquire the URL [{}]. Attempt [{}]", target, attempt),
                    );

                    attempt = self.continue_after_failure(attempt, &cancel).await;
                }
            }
        }
    }

    /// Continuation shared by both failure classes: milestone check, wait,
    /// increment.
    async fn continue_after_failure(&self, attempt: u64, cancel: &CancellationToken) -> u64 {
        if attempt % DOWN_MILESTONE == 0 {
            self.sink.emit(
                Severity::Error,
                &format!(
                    "Looks like the application is down: 10 attempts and no successful ping from URL [{}]",
                    self.config.target
                ),
            );
        }

        self.wait(cancel).await;
        attempt + 1
    }

    /// Sleep one interval, returning early if the token is cancelled.
    async fn wait(&self, cancel: &CancellationToken) {
        tokio::select! {
            _ = cancel.cancelled() => {}
            _ = sleep(self.config.interval) => {}
        }
    }
}
