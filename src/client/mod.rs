//! Client adapter subsystem.
//!
//! # Data Flow
//! ```text
//! harness attempt
//!     → adapter.rs (capability trait, outcome contract)
//!     → reqwest_adapter.rs | hyper_adapter.rs | raw.rs
//!     → Result<status, AttemptError> back to the harness
//! ```
//!
//! # Design Decisions
//! - The adapter set is closed: one variant per underlying client
//! - Adapters own their connections and drop them on every exit path
//! - Timeout classification is the adapter's job; the harness only maps
//! - Connect-phase failures are transport errors, never a timeout

pub mod adapter;
pub mod hyper_adapter;
pub mod raw;
pub mod reqwest_adapter;

pub use adapter::{adapter_for, all_adapters, AttemptError, ClientAdapter, ClientKind};
pub use hyper_adapter::HyperAdapter;
pub use raw::RawSocketAdapter;
pub use reqwest_adapter::ReqwestAdapter;
