// src/lib.rs

pub mod client;
pub mod config;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use client::{AnalyzeError, Analyzer, TextAnalyticsClient};
pub use config::ClientConfig;
pub use types::{Document, Operation};
