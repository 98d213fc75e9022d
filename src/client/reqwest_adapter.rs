//! GET adapter backed by reqwest.
//!
//! The supplied timeout is applied as a read timeout (time to first
//! response data after the connection is up), distinct from the fixed
//! connect bound.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::client::adapter::{AttemptError, ClientAdapter, ClientKind};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Adapter driving `reqwest::Client` with a read timeout.
#[derive(Debug, Default)]
pub struct ReqwestAdapter;

impl ReqwestAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Classify a reqwest error into the outcome contract.
    ///
    /// Connect-phase failures (refused, unreachable, connect timeout)
    /// are transport errors; only a timeout past the connect phase
    /// counts as the read timeout firing.
    fn classify(error: &reqwest::Error) -> AttemptError {
        if error.is_connect() {
            return AttemptError::Transport(error.to_string());
        }
        if error.is_timeout() {
            return AttemptError::TimedOut;
        }
        AttemptError::Transport(error.to_string())
    }
}

#[async_trait]
impl ClientAdapter for ReqwestAdapter {
    fn kind(&self) -> ClientKind {
        ClientKind::Reqwest
    }

    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, AttemptError> {
        // A fresh client per attempt so no pooled connection outlives it.
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(timeout)
            .pool_max_idle_per_host(0)
            .no_proxy()
            .build()
            .map_err(|e| AttemptError::Transport(e.to_string()))?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Self::classify(&e))?;

        Ok(response.status().as_u16())
    }
}
