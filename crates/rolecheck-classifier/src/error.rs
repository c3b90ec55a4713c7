//! Error types for the classifier

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying documents
///
/// The first group describes a single failed attempt and never escapes
/// [`crate::Classifier::classify`]; those are folded into an ERROR record.
/// The second group is fatal to a batch run.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Model output is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Model output lacks required keys
    #[error("Invalid schema from model: missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Model output has a field of the wrong shape
    #[error("Invalid schema from model: {0}")]
    InvalidFormat(String),

    /// Input folder does not exist
    #[error("Missing folder: {}", .0.display())]
    MissingInput(PathBuf),

    /// Input source holds no eligible documents
    #[error("No eligible documents found in {0}")]
    NoDocuments(String),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ClassifierError {
    fn from(e: serde_json::Error) -> Self {
        ClassifierError::JsonParse(e.to_string())
    }
}
