//! Server lifecycle handle.
//!
//! # Responsibilities
//! - Publish the bound address and base URL
//! - Track lifecycle state (Stopped/Starting/Running/Stopping)
//! - Idempotent stop that never hangs on a mid-sleep handler

use std::net::SocketAddr;

use tokio::task::JoinHandle;
use url::Url;

use crate::lifecycle::Shutdown;

/// Lifecycle state of a server instance.
///
/// `Starting` covers the window inside `DelayedResponseServer::start`;
/// a handle is only observable from `Running` onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// No listening socket; the port has been released.
    Stopped,
    /// Bind in progress; no address published yet.
    Starting,
    /// Accepting connections; the bound address is published.
    Running,
    /// Shutdown signalled; in-flight handlers being abandoned.
    Stopping,
}

/// Handle to a running delayed-response server.
///
/// Owns the serve task and the shutdown channel. The bound address and
/// base URL are observable while the state is `Running` or `Stopping`.
pub struct ServerHandle {
    addr: SocketAddr,
    base_url: Url,
    state: ServerState,
    shutdown: Shutdown,
    task: Option<JoinHandle<()>>,
}

impl ServerHandle {
    pub(crate) fn new(
        addr: SocketAddr,
        base_url: Url,
        shutdown: Shutdown,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            addr,
            base_url,
            state: ServerState::Running,
            shutdown,
            task: Some(task),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ServerState {
        self.state
    }

    /// Bound socket address, defined while Running or Stopping.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.port_is_published().then_some(self.addr)
    }

    /// Bound port, defined while Running or Stopping.
    pub fn port(&self) -> Option<u16> {
        self.local_addr().map(|addr| addr.port())
    }

    /// Base URL clients issue requests against, defined while Running
    /// or Stopping.
    pub fn base_url(&self) -> Option<&Url> {
        self.port_is_published().then_some(&self.base_url)
    }

    fn port_is_published(&self) -> bool {
        matches!(self.state, ServerState::Running | ServerState::Stopping)
    }

    /// Stop the server and wait for the serve task to finish.
    ///
    /// Safe to call while a delayed handler is mid-sleep: in-flight
    /// connections are abandoned rather than awaited, so this never
    /// hangs for the configured delay. Calling stop on an
    /// already-stopped handle is a no-op.
    pub async fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        self.state = ServerState::Stopping;
        tracing::info!(address = %self.addr, "stopping server");

        self.shutdown.trigger();
        if let Err(e) = task.await {
            if e.is_panic() {
                tracing::error!(error = %e, "serve task panicked");
            }
        }

        self.state = ServerState::Stopped;
        tracing::info!(address = %self.addr, "server stopped, port released");
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        // Fire the signal so the serve task exits even if the caller
        // never awaited stop(); the detached task drains on its own.
        if self.task.is_some() {
            self.shutdown.trigger();
        }
    }
}
