//! Scenario driver: one server, the adapter set, one expectation.
//!
//! Collapses the delayed-server and immediate-server fixtures into a
//! single abstraction parameterized by `ServerConfig` and an
//! `Expectation`, run against every adapter in the closed set.

use std::time::Duration;

use serde::Serialize;

use crate::client::{all_adapters, ClientAdapter, ClientKind};
use crate::config::schema::ServerConfig;
use crate::harness::attempt::{attempt, AttemptOutcome};
use crate::server::{DelayedResponseServer, ServerError};

/// What every adapter's outcome must be for the scenario to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expectation {
    /// The attempt must be classified `TimedOut`.
    TimesOut,
    /// The attempt must succeed with exactly this status code.
    Succeeds(u16),
}

impl Expectation {
    /// Whether an outcome satisfies this expectation.
    pub fn matches(&self, outcome: &AttemptOutcome) -> bool {
        match (self, outcome) {
            (Expectation::TimesOut, AttemptOutcome::TimedOut) => true,
            (Expectation::Succeeds(want), AttemptOutcome::Succeeded(got)) => want == got,
            _ => false,
        }
    }
}

/// One adapter's result within a scenario.
#[derive(Debug, Clone, Serialize)]
pub struct AdapterResult {
    /// Which adapter produced the outcome.
    pub client: ClientKind,
    /// The classified outcome.
    pub outcome: AttemptOutcome,
    /// Whether the outcome satisfied the expectation.
    pub matched: bool,
}

/// Per-adapter outcomes checked against the scenario's expectation.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// The expectation every row was checked against.
    pub expectation: Expectation,
    /// One row per adapter, in attempt order.
    pub results: Vec<AdapterResult>,
}

impl VerificationReport {
    /// True when every adapter matched the expectation.
    pub fn passed(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|r| r.matched)
    }

    /// Results that did not match, for failure messages.
    pub fn mismatches(&self) -> impl Iterator<Item = &AdapterResult> {
        self.results.iter().filter(|r| !r.matched)
    }
}

/// A complete verification scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Server the attempts run against.
    pub server: ServerConfig,
    /// Client-side bound for every attempt, in milliseconds.
    pub client_timeout_ms: u64,
    /// Demanded outcome per adapter.
    pub expectation: Expectation,
}

impl Scenario {
    /// Server withholds its response longer than the client waits.
    pub fn delayed(delay_ms: u64, client_timeout_ms: u64) -> Self {
        Self {
            server: ServerConfig::delayed(delay_ms),
            client_timeout_ms,
            expectation: Expectation::TimesOut,
        }
    }

    /// Server responds immediately; the client timeout is irrelevant.
    pub fn immediate(client_timeout_ms: u64) -> Self {
        Self {
            server: ServerConfig::immediate(),
            client_timeout_ms,
            expectation: Expectation::Succeeds(200),
        }
    }

    /// Run the scenario against every adapter in the closed set.
    pub async fn run(&self) -> Result<VerificationReport, ServerError> {
        self.run_with(all_adapters()).await
    }

    /// Run against a caller-supplied adapter set.
    ///
    /// Starts a fresh server, issues one attempt per adapter
    /// sequentially, stops the server (releasing its port), and reports
    /// every outcome against the expectation. A `ServerError` aborts
    /// the scenario before any attempt is made.
    pub async fn run_with(
        &self,
        adapters: Vec<Box<dyn ClientAdapter>>,
    ) -> Result<VerificationReport, ServerError> {
        let mut handle = DelayedResponseServer::start(self.server.clone()).await?;
        let timeout = Duration::from_millis(self.client_timeout_ms);

        let mut results = Vec::with_capacity(adapters.len());
        if let Some(base_url) = handle.base_url().cloned() {
            for adapter in &adapters {
                let outcome = attempt(&base_url, adapter.as_ref(), timeout).await;
                let matched = self.expectation.matches(&outcome);
                if !matched {
                    tracing::warn!(
                        client = %adapter.kind(),
                        outcome = %outcome,
                        "outcome did not match expectation"
                    );
                }
                results.push(AdapterResult {
                    client: adapter.kind(),
                    outcome,
                    matched,
                });
            }
        }

        handle.stop().await;

        let report = VerificationReport {
            expectation: self.expectation,
            results,
        };
        tracing::debug!(
            passed = report.passed(),
            report = %serde_json::to_string(&report).unwrap_or_default(),
            "scenario finished"
        );
        Ok(report)
    }
}
