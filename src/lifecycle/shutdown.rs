//! Shutdown coordination for a server instance.

use tokio::sync::broadcast;

/// Broadcast-based shutdown signal shared by the accept loop and every
/// in-flight connection task.
///
/// Cloning shares the same underlying channel, so the accept loop and
/// the handle both speak to the same set of subscribers.
#[derive(Clone)]
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// Subscriptions must be taken before `trigger`; a receiver created
    /// after the signal fired never observes it.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
