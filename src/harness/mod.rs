//! Timeout verification subsystem.
//!
//! # Data Flow
//! ```text
//! Scenario (server config + client timeout + expectation)
//!     → scenario.rs (start server, drive adapters sequentially, stop)
//!     → attempt.rs (one bounded GET per adapter, classify outcome)
//!     → VerificationReport (per-adapter rows, pass/fail)
//! ```
//!
//! # Design Decisions
//! - Outcomes are values, never exceptions; assertions read the enum
//! - One attempt per adapter, no retries: first classification is final
//! - The server has no knowledge of client timeouts; correctness is the
//!   race between server delay and client bound

pub mod attempt;
pub mod scenario;

pub use attempt::{attempt, attempt_with, AttemptOutcome};
pub use scenario::{AdapterResult, Expectation, Scenario, VerificationReport};
