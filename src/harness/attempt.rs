//! Single-attempt driver and outcome classification.

use std::time::{Duration, Instant};

use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::client::{adapter_for, AttemptError, ClientAdapter};
use crate::config::schema::ClientTimeoutConfig;
use crate::config::validation::validate_client_config;

/// Terminal classification of one GET attempt.
///
/// Produced once per attempt and immutable; the per-attempt state
/// machine is `Idle -> Sent -> {TimedOut | Succeeded | Failed}` with no
/// retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AttemptOutcome {
    /// The adapter's own timeout mechanism fired.
    TimedOut,
    /// A response arrived; carries the status code.
    Succeeded(u16),
    /// Any other transport failure, with the adapter's reason.
    Failed(String),
}

impl AttemptOutcome {
    /// Whether the attempt was classified as a client-side timeout.
    pub fn is_timed_out(&self) -> bool {
        matches!(self, AttemptOutcome::TimedOut)
    }

    /// Status code if the attempt produced a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AttemptOutcome::Succeeded(code) => Some(*code),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptOutcome::TimedOut => write!(f, "timed-out"),
            AttemptOutcome::Succeeded(code) => write!(f, "succeeded({})", code),
            AttemptOutcome::Failed(reason) => write!(f, "failed({})", reason),
        }
    }
}

/// Issue one GET to `base_url` through `adapter`, bounded by `timeout`.
///
/// The outcome is returned as a value; nothing is raised. The first
/// classification is terminal: a timed-out or failed attempt is
/// reported as-is, never retried.
pub async fn attempt(base_url: &Url, adapter: &dyn ClientAdapter, timeout: Duration) -> AttemptOutcome {
    let attempt_id = Uuid::new_v4();
    let start = Instant::now();

    tracing::debug!(
        attempt_id = %attempt_id,
        client = %adapter.kind(),
        url = %base_url,
        timeout_ms = timeout.as_millis() as u64,
        "issuing GET"
    );

    let outcome = match adapter.get(base_url, timeout).await {
        Ok(status) => AttemptOutcome::Succeeded(status),
        Err(AttemptError::TimedOut) => AttemptOutcome::TimedOut,
        Err(AttemptError::Transport(reason)) => AttemptOutcome::Failed(reason),
    };

    tracing::debug!(
        attempt_id = %attempt_id,
        client = %adapter.kind(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        outcome = %outcome,
        "attempt classified"
    );

    outcome
}

/// Run one attempt with the adapter named by `config.client_kind`.
///
/// An invalid timeout config is classified as `Failed` without issuing
/// a request.
pub async fn attempt_with(base_url: &Url, config: &ClientTimeoutConfig) -> AttemptOutcome {
    if let Err(errors) = validate_client_config(config) {
        return AttemptOutcome::Failed(format!("invalid client config: {errors:?}"));
    }
    let adapter = adapter_for(config.client_kind);
    attempt(base_url, adapter.as_ref(), config.timeout()).await
}
