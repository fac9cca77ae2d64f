// src/client/mod.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ENDPOINT_VAR, SUBSCRIPTION_KEY_VAR};
use crate::types::{Document, Operation};

/// Everything that can go wrong in one analysis call. Each variant is
/// terminal for the call; there are no retries and no partial results.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("no subscription key given: pass one explicitly or export {SUBSCRIPTION_KEY_VAR}")]
    MissingCredential,
    #[error("no resource name given: pass one explicitly or export {ENDPOINT_VAR}")]
    MissingEndpoint,
    #[error("failed to serialize document batch: {0}")]
    SerializationFailed(#[source] serde_json::Error),
    #[error("failed to construct request: {0}")]
    RequestConstructionFailed(String),
    #[error("request failed: {0}")]
    TransportFailed(#[source] reqwest::Error),
    #[error("failed to read response body: {0}")]
    ResponseReadFailed(#[source] reqwest::Error),
    #[error("response body is not valid JSON: {0}")]
    ResponseDecodeFailed(#[source] serde_json::Error),
    #[error("failed to re-encode response JSON: {0}")]
    ResponseReencodeFailed(#[source] serde_json::Error),
}

/// Seam between callers and the real HTTP client, so the demo server and
/// its tests can run against a mock.
#[async_trait]
pub trait Analyzer {
    async fn analyze(
        &self,
        operation: Operation,
        batch: &[Document],
    ) -> Result<String, AnalyzeError>;
}

// Module declarations
pub mod azure;
pub mod mocks;

// Re-export for testing
pub use azure::TextAnalyticsClient;
pub use mocks::MockAnalyzer;
