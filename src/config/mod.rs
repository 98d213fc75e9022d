//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! in-process ServerConfig / ClientTimeoutConfig values
//!     → validation.rs (semantic checks)
//!     → server / harness consume validated, immutable configs
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a server has started
//! - All fields have defaults so tests override only what they probe
//! - Validation separates syntactic (serde) from semantic checks

pub mod schema;
pub mod validation;

pub use schema::ClientTimeoutConfig;
pub use schema::ServerConfig;
