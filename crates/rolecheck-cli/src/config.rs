//! Configuration management for the CLI.
//!
//! Precedence: command-line flag > environment (including `.env`) > config
//! file > built-in default.

use crate::cli::{RunArgs, DEFAULT_INPUT, DEFAULT_OUTPUT};
use crate::error::{CliError, Result};
use rolecheck_classifier::ClassifierConfig;
use rolecheck_llm::openai::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of the optional TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Retry and timeout settings
    pub classifier: ClassifierConfig,

    /// Model service settings
    pub llm: LlmSettings,

    /// Input and output locations
    pub paths: PathSettings,
}

/// Model service settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// OpenAI-compatible base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

/// Input and output locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Folder of documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Report file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rolecheck").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicitly given path must exist. Without one, the default path is
    /// used when present, and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.classifier.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// API key
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL
    pub api_base: String,

    /// Folder of documents
    pub input: PathBuf,

    /// Report file
    pub output: PathBuf,

    /// Retry and timeout settings
    pub classifier: ClassifierConfig,
}

impl Settings {
    /// Merge flags (which already carry environment fallbacks) over the file config.
    pub fn resolve(args: &RunArgs, config: Config) -> Result<Self> {
        let api_key = args
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(CliError::MissingApiKey)?;

        let mut classifier = config.classifier;
        if let Some(delay) = args.retry_delay_ms {
            classifier.retry_delay_ms = delay;
        }
        classifier.validate().map_err(CliError::Config)?;

        Ok(Self {
            api_key,
            model: args
                .model
                .clone()
                .or(config.llm.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: args
                .api_base
                .clone()
                .or(config.llm.api_base)
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            input: args
                .input
                .clone()
                .or(config.paths.input)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: args
                .output
                .clone()
                .or(config.paths.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            classifier,
        })
    }
}
