//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{ClassificationResult, UsageStats};
use std::fmt::Display;
use std::future::Future;

/// Raw answer from one model call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Message content, expected to be a JSON object
    pub content: String,

    /// Token usage, when the service reported it
    pub usage: Option<UsageStats>,
}

impl Completion {
    /// Create a completion without usage information
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            usage: None,
        }
    }

    /// Attach usage information
    pub fn with_usage(mut self, usage: UsageStats) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (rolecheck-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error: Display;

    /// Run one chat completion with a system policy and a user message,
    /// requesting a JSON object at zero temperature
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<Completion, Self::Error>> + Send;
}

/// A plain-text input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Identifier (file name or equivalent label)
    pub id: String,

    /// Full text
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Trait for enumerating input documents
///
/// Documents may be returned in any order; the batch driver sorts them by
/// identifier before processing.
pub trait DocumentSource {
    /// Error type for source operations
    type Error;

    /// Load every eligible document
    fn documents(&self) -> Result<Vec<Document>, Self::Error>;
}

/// Trait for persisting the final report
pub trait ReportSink {
    /// Error type for sink operations
    type Error;

    /// Write the ordered results in one go
    fn write_report(&mut self, results: &[ClassificationResult]) -> Result<(), Self::Error>;
}
