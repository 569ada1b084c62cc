//! Pingwatch binary: parse arguments, wire up the probe and sink, run the
//! loop until Ctrl-C.

use clap::Parser;
use common::logging;
use pingwatch::{HttpProbe, Pinger, PingerConfig, TracingSink};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(
    name = "pingwatch",
    about = "Ping a single URL on a fixed interval and report liveness"
)]
struct Cli {
    /// URL to ping.
    #[arg(long, default_value = "https://www.google.com")]
    url: String,

    /// Ping retry interval in seconds.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Emit logs as JSON.
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn to_config(&self) -> PingerConfig {
        PingerConfig {
            target: self.url.clone(),
            interval: Duration::from_secs(self.interval),
        }
    }
}

#[tokio::main]
async fn main() -> common::Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    info!(
        "About to start pinging URL [{}] with the retry interval [{}].",
        cli.url, cli.interval
    );

    let config = cli.to_config();
    let probe = Arc::new(HttpProbe::new(config.target.clone())?);
    let pinger = Pinger::new(probe, Arc::new(TracingSink), config);

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                signal_cancel.cancel();
            }
            Err(e) => warn!(error = %e, "Failed to install Ctrl-C handler"),
        }
    });

    pinger.run(cancel).await;

    info!("Pingwatch stopped");
    Ok(())
}
