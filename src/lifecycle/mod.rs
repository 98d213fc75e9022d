//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     stop() called → broadcast signal → accept loop exits →
//!     in-flight delayed handlers cancelled at their sleep
//! ```
//!
//! # Design Decisions
//! - One broadcast channel per server instance
//! - Subscribers observe the signal at their next await point
//! - Subscriptions are taken at accept time, before any trigger

pub mod shutdown;

pub use shutdown::Shutdown;
