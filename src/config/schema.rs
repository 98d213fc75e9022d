//! Configuration schema definitions.
//!
//! All types derive Serde traits so scenarios can be captured in logs
//! and reports verbatim.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientKind;

/// Configuration for one delayed-response server instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Response delay in milliseconds. Zero means respond immediately.
    pub delay_ms: u64,

    /// Content-Type header written on every response.
    pub content_type: String,

    /// Status code written on every response.
    pub status_code: u16,

    /// Host to bind the listener on.
    pub bind_host: String,

    /// Port to bind. Zero lets the OS assign an ephemeral port.
    pub bind_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            content_type: "text/html".to_string(),
            status_code: 200,
            bind_host: "localhost".to_string(),
            bind_port: 0,
        }
    }
}

impl ServerConfig {
    /// Config for a server that withholds its response for `delay_ms`.
    pub fn delayed(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Self::default()
        }
    }

    /// Config for a server that responds as soon as the request arrives.
    pub fn immediate() -> Self {
        Self::default()
    }

    /// Response delay as a `Duration`.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Address string handed to the listener bind call.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

/// Timeout bound applied to a single client attempt.
///
/// Supplied per attempt, never persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientTimeoutConfig {
    /// Client-side timeout in milliseconds.
    pub timeout_ms: u64,

    /// Which adapter issues the request.
    pub client_kind: ClientKind,
}

impl ClientTimeoutConfig {
    /// Client timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_server_config_responds_immediately() {
        let config = ServerConfig::default();
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.status_code, 200);
        assert_eq!(config.content_type, "text/html");
        assert_eq!(config.bind_port, 0);
    }

    #[test]
    fn delayed_constructor_sets_only_the_delay() {
        let config = ServerConfig::delayed(5_000);
        assert_eq!(config.delay(), Duration::from_secs(5));
        assert_eq!(config.status_code, 200);
    }

    #[test]
    fn bind_address_combines_host_and_port() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "localhost:0");
    }
}
