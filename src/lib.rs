//! Harness for verifying client-side timeout semantics against an
//! ephemeral, in-process HTTP server with controllable response latency.

pub mod client;
pub mod config;
pub mod harness;
pub mod lifecycle;
pub mod observability;
pub mod server;

pub use client::{adapter_for, all_adapters, AttemptError, ClientAdapter, ClientKind};
pub use config::{ClientTimeoutConfig, ServerConfig};
pub use harness::{
    attempt, attempt_with, AdapterResult, AttemptOutcome, Expectation, Scenario,
    VerificationReport,
};
pub use lifecycle::Shutdown;
pub use server::{DelayedResponseServer, ServerError, ServerHandle, ServerState};
pub use url::Url;
