//! Probe implementations.

use async_trait::async_trait;
use common::{Error, Result};
use tracing::debug;

/// A single-shot liveness probe against a fixed target.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Perform one probe and return the raw HTTP status code.
    ///
    /// Transport-level failures (DNS, refused connection, TLS) surface as
    /// errors. No retries and no classification happen here; the pinger
    /// decides what a status code means.
    async fn check(&self) -> Result<u16>;
}

/// HTTP(S) probe backed by a shared reqwest client.
pub struct HttpProbe {
    url: String,
    client: reqwest::Client,
}

impl HttpProbe {
    /// Create a new HTTP probe for the given URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::config)?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn check(&self) -> Result<u16> {
        match self.client.get(&self.url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                debug!(url = %self.url, status = status, "HTTP probe completed");
                Ok(status)
            }
            Err(e) => {
                debug!(url = %self.url, error = %e, "HTTP probe failed in transport");
                Err(Error::probe(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_probe_connection_refused() {
        // Nothing listens on port 1; the probe must surface a transport error.
        let probe = HttpProbe::new("http://127.0.0.1:1/").unwrap();

        let result = probe.check().await;
        assert!(matches!(result, Err(Error::Probe(_))));
    }
}
