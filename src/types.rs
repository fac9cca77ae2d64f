// src/types.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One text record submitted for analysis. The service correlates response
/// items back to the `id` field; no schema is enforced client-side, so any
/// field the service understands (`language`, `countryHint`, ...) can be set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    fields: BTreeMap<String, String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Convenience constructor for the common id/language/text shape.
    pub fn text(id: &str, language: &str, text: &str) -> Self {
        Self::new()
            .field("id", id)
            .field("language", language)
            .field("text", text)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// The four analysis kinds exposed by the v2.1 API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Entities,
    KeyPhrases,
    Languages,
    Sentiment,
}

impl Operation {
    /// URL path segment for this operation. `keyPhrases` is the one
    /// camel-cased segment in the v2.1 API.
    pub fn path_segment(self) -> &'static str {
        match self {
            Operation::Entities => "entities",
            Operation::KeyPhrases => "keyPhrases",
            Operation::Languages => "languages",
            Operation::Sentiment => "sentiment",
        }
    }
}
