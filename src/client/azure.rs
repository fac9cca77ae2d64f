use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

use super::{AnalyzeError, Analyzer};
use crate::config::ClientConfig;
use crate::types::{Document, Operation};

/// Fixed domain every resource name hangs off.
const SERVICE_DOMAIN: &str = "cognitiveservices.azure.com";

/// API version prefix shared by all four operations.
const API_PATH: &str = "text/analytics/v2.1";

/// Credential header expected by the service.
const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Request body shape: the batch wrapped in a `documents` array, nothing else.
#[derive(Serialize)]
struct DocumentEnvelope<'a> {
    documents: &'a [Document],
}

/// Client for the Text Analytics v2.1 REST API. Holds one connection pool
/// and the resolved endpoint; individual calls are stateless and may run
/// concurrently.
#[derive(Debug)]
pub struct TextAnalyticsClient {
    http: reqwest::Client,
    subscription_key: String,
    base_url: Url,
}

impl TextAnalyticsClient {
    pub fn new(config: ClientConfig) -> Result<Self, AnalyzeError> {
        let base = format!("https://{}.{}", config.resource_name, SERVICE_DOMAIN);
        Self::with_base_url(&base, config)
    }

    /// Point the client at a nonstandard endpoint (sovereign clouds, local
    /// test servers). `base_url` replaces the `https://{resource}.{domain}`
    /// prefix; the API path is still appended per operation.
    pub fn with_base_url(base_url: &str, config: ClientConfig) -> Result<Self, AnalyzeError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AnalyzeError::RequestConstructionFailed(format!("{}: {}", base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AnalyzeError::RequestConstructionFailed(e.to_string()))?;
        Ok(Self {
            http,
            subscription_key: config.subscription_key,
            base_url,
        })
    }

    fn operation_url(&self, operation: Operation) -> Result<Url, AnalyzeError> {
        let path = format!("{}/{}", API_PATH, operation.path_segment());
        self.base_url
            .join(&path)
            .map_err(|e| AnalyzeError::RequestConstructionFailed(format!("{}: {}", path, e)))
    }

    /// Run one analysis operation over a batch of documents and return the
    /// service's JSON response pretty-printed with 2-space indentation.
    ///
    /// The response is treated as opaque: non-success statuses are not an
    /// error, since the service reports its own failures as JSON payloads
    /// and those flow back to the caller formatted the same way.
    pub async fn analyze(
        &self,
        operation: Operation,
        batch: &[Document],
    ) -> Result<String, AnalyzeError> {
        let url = self.operation_url(operation)?;
        let body = serde_json::to_string(&DocumentEnvelope { documents: batch })
            .map_err(AnalyzeError::SerializationFailed)?;

        debug!(url = %url, documents = batch.len(), "dispatching analysis request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .body(body)
            .send()
            .await
            .map_err(AnalyzeError::TransportFailed)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, operation = operation.path_segment(), "service returned non-success status");
        }

        let text = response
            .text()
            .await
            .map_err(AnalyzeError::ResponseReadFailed)?;
        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(AnalyzeError::ResponseDecodeFailed)?;
        serde_json::to_string_pretty(&value).map_err(AnalyzeError::ResponseReencodeFailed)
    }

    /// Named entity recognition.
    pub async fn entities(&self, batch: &[Document]) -> Result<String, AnalyzeError> {
        self.analyze(Operation::Entities, batch).await
    }

    /// Key phrase extraction.
    pub async fn key_phrases(&self, batch: &[Document]) -> Result<String, AnalyzeError> {
        self.analyze(Operation::KeyPhrases, batch).await
    }

    /// Language detection. Documents typically carry `countryHint` here.
    pub async fn languages(&self, batch: &[Document]) -> Result<String, AnalyzeError> {
        self.analyze(Operation::Languages, batch).await
    }

    /// Sentiment scoring.
    pub async fn sentiment(&self, batch: &[Document]) -> Result<String, AnalyzeError> {
        self.analyze(Operation::Sentiment, batch).await
    }
}

#[async_trait]
impl Analyzer for TextAnalyticsClient {
    async fn analyze(
        &self,
        operation: Operation,
        batch: &[Document],
    ) -> Result<String, AnalyzeError> {
        TextAnalyticsClient::analyze(self, operation, batch).await
    }
}
