use async_trait::async_trait;
use std::sync::Mutex;

use super::{AnalyzeError, Analyzer};
use crate::types::{Document, Operation};

/// Canned analyzer for exercising callers without a network.
pub struct MockAnalyzer {
    response: String,
    error: Option<String>,
    calls: Mutex<Vec<Operation>>,
}

impl MockAnalyzer {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            error: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_error(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    /// Operations seen so far, in call order.
    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(
        &self,
        operation: Operation,
        _batch: &[Document],
    ) -> Result<String, AnalyzeError> {
        self.calls.lock().unwrap().push(operation);
        if let Some(message) = &self.error {
            return Err(AnalyzeError::RequestConstructionFailed(message.clone()));
        }
        Ok(self.response.clone())
    }
}
