//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! server / harness / adapters emit tracing events
//!     → logging.rs (subscriber setup, env-filter)
//!     → stdout for demos, captured output under the test runner
//! ```
//!
//! # Design Decisions
//! - Structured fields (address, attempt_id, elapsed_ms) over prose
//! - Init is idempotent so every test can call it

pub mod logging;

pub use logging::init;
