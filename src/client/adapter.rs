//! The minimal capability the harness needs from an HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::client::hyper_adapter::HyperAdapter;
use crate::client::raw::RawSocketAdapter;
use crate::client::reqwest_adapter::ReqwestAdapter;

/// Which underlying HTTP client implementation an adapter drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientKind {
    /// reqwest with a connection-level read timeout.
    Reqwest,
    /// hyper legacy client under an overall request deadline.
    Hyper,
    /// Hand-written HTTP/1.1 over a TCP stream, read timeout on the
    /// status line.
    RawSocket,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientKind::Reqwest => write!(f, "reqwest"),
            ClientKind::Hyper => write!(f, "hyper"),
            ClientKind::RawSocket => write!(f, "raw-socket"),
        }
    }
}

/// Failure modes of a single bounded GET.
#[derive(Debug, Clone, Error)]
pub enum AttemptError {
    /// The client-side timeout elapsed before a response arrived.
    #[error("client timeout elapsed")]
    TimedOut,

    /// Any other transport-level failure (refused, reset, protocol).
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A bounded-time GET capability over some HTTP client implementation.
///
/// The harness is polymorphic over this trait and assumes nothing about
/// the underlying transport stack beyond the outcome contract.
#[async_trait]
pub trait ClientAdapter: Send + Sync {
    /// Identifies the underlying implementation.
    fn kind(&self) -> ClientKind;

    /// Issue one GET with the given wait bound.
    ///
    /// Returns the response status code, [`AttemptError::TimedOut`] if
    /// the adapter's own timeout mechanism fired, or
    /// [`AttemptError::Transport`] for anything else.
    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, AttemptError>;
}

/// Construct the adapter for a given kind.
pub fn adapter_for(kind: ClientKind) -> Box<dyn ClientAdapter> {
    match kind {
        ClientKind::Reqwest => Box::new(ReqwestAdapter::new()),
        ClientKind::Hyper => Box::new(HyperAdapter::new()),
        ClientKind::RawSocket => Box::new(RawSocketAdapter::new()),
    }
}

/// The full closed set of adapters under test.
pub fn all_adapters() -> Vec<Box<dyn ClientAdapter>> {
    [ClientKind::Reqwest, ClientKind::Hyper, ClientKind::RawSocket]
        .into_iter()
        .map(adapter_for)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_set_covers_every_kind() {
        let kinds: Vec<_> = all_adapters().iter().map(|a| a.kind()).collect();
        assert_eq!(
            kinds,
            vec![ClientKind::Reqwest, ClientKind::Hyper, ClientKind::RawSocket]
        );
    }

    #[test]
    fn adapter_for_round_trips_the_kind() {
        for kind in [ClientKind::Reqwest, ClientKind::Hyper, ClientKind::RawSocket] {
            assert_eq!(adapter_for(kind).kind(), kind);
        }
    }
}
