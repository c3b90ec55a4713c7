//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No API key in flags, environment or `.env`
    #[error("Missing OPENAI_API_KEY. Put it in a .env file or set it in your environment.")]
    MissingApiKey,

    /// Classifier error (missing input, empty input, report write failure)
    #[error("{0}")]
    Classifier(#[from] rolecheck_classifier::ClassifierError),

    /// LLM client setup error
    #[error("LLM client error: {0}")]
    Llm(#[from] rolecheck_llm::LlmError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
