//! Delayed-response server subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig
//!     → server.rs (bind ephemeral port, accept loop, delay handler)
//!     → handle.rs (bound address, state machine, stop)
//!
//! Handle States:
//!     Stopped → Starting → Running → Stopping → Stopped
//! ```
//!
//! # Design Decisions
//! - start() returns only after the listening socket is bound, so an
//!   immediate client connect lands in the accept backlog
//! - The injected delay is a per-connection sleep; other connections
//!   are unaffected
//! - stop() cancels a mid-sleep handler by dropping its connection task

pub mod handle;
pub mod server;

pub use handle::{ServerHandle, ServerState};
pub use server::{DelayedResponseServer, ServerError};
