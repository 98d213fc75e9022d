//! GET adapter backed by the hyper legacy client.
//!
//! The supplied timeout is an overall deadline on the whole request
//! future, applied with `tokio::time::timeout`.

use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::time;
use url::Url;

use crate::client::adapter::{AttemptError, ClientAdapter, ClientKind};

/// Adapter driving a `hyper_util` legacy client under a deadline.
#[derive(Debug, Default)]
pub struct HyperAdapter;

impl HyperAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClientAdapter for HyperAdapter {
    fn kind(&self) -> ClientKind {
        ClientKind::Hyper
    }

    async fn get(&self, url: &Url, timeout: Duration) -> Result<u16, AttemptError> {
        let client: Client<HttpConnector, Body> =
            Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let request = Request::builder()
            .method("GET")
            .uri(url.as_str())
            .header("user-agent", "timeout-harness")
            .body(Body::empty())
            .map_err(|e| AttemptError::Transport(e.to_string()))?;

        match time::timeout(timeout, client.request(request)).await {
            Ok(Ok(response)) => Ok(response.status().as_u16()),
            Ok(Err(e)) => Err(AttemptError::Transport(e.to_string())),
            Err(_) => Err(AttemptError::TimedOut),
        }
    }
}
