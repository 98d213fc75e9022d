//! Shared utilities for integration tests.

use timeout_harness::{DelayedResponseServer, ServerConfig, ServerHandle, Url};

/// Install the tracing subscriber once for the test binary.
pub fn init_tracing() {
    timeout_harness::observability::init();
}

/// Start a server, panicking on bind failure.
pub async fn start_server(config: ServerConfig) -> ServerHandle {
    DelayedResponseServer::start(config)
        .await
        .expect("server failed to start")
}

/// Base URL of a running server.
#[allow(dead_code)]
pub fn base_url(handle: &ServerHandle) -> Url {
    handle.base_url().expect("server not running").clone()
}
