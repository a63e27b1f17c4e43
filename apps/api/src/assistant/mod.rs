#![allow(dead_code)]

//! Writing assistant — pluggable provider of bullet suggestions and summaries.
//!
//! Default: `CannedSuggestionProvider` (fixed text per role, optional artificial latency).
//! A model-backed provider only needs to implement `SuggestionProvider`.
//!
//! `AppState` holds an `Arc<dyn SuggestionProvider>`, chosen at startup.

pub mod canned;
pub mod handlers;
pub mod skills;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;

/// Source of writing suggestions for the editor.
///
/// Implement this to swap backends without touching handlers or the scoring engine.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Achievement bullets tailored to a job title.
    async fn generate_suggestions(&self, role: &str) -> Result<Vec<String>, AppError>;

    /// A rewritten professional summary for a job title.
    async fn improve_summary(&self, role: &str) -> Result<String, AppError>;

    /// Short identifier reported to clients, e.g. "canned".
    fn backend(&self) -> &'static str;
}

/// Returns fixed text per role. Deterministic apart from the configured delays.
pub struct CannedSuggestionProvider {
    suggestion_latency: Duration,
    summary_latency: Duration,
}

impl CannedSuggestionProvider {
    pub fn new(suggestion_latency: Duration, summary_latency: Duration) -> Self {
        Self {
            suggestion_latency,
            summary_latency,
        }
    }

    /// No artificial latency; used by tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        debug!("Simulating assistant latency of {}ms", latency.as_millis());
        tokio::time::sleep(latency).await;
    }
}

#[async_trait]
impl SuggestionProvider for CannedSuggestionProvider {
    async fn generate_suggestions(&self, role: &str) -> Result<Vec<String>, AppError> {
        simulate_latency(self.suggestion_latency).await;
        Ok(canned::suggestions_for(role)
            .iter()
            .map(|s| s.to_string())
            .collect())
    }

    async fn improve_summary(&self, role: &str) -> Result<String, AppError> {
        simulate_latency(self.summary_latency).await;
        Ok(canned::summary_for(role))
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}
