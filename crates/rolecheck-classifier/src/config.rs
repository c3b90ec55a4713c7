//! Configuration for the Classifier

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upper bound on attempts per document, first call included
pub const MAX_ATTEMPTS: u32 = 2;

/// Configuration for the Classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Total attempts per document, first call included
    pub max_attempts: u32,

    /// Fixed pause between a failed attempt and the next one (milliseconds)
    pub retry_delay_ms: u64,

    /// HTTP timeout handed to the model client (seconds)
    pub request_timeout_secs: u64,
}

impl ClassifierConfig {
    /// Get the retry delay as a Duration
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Set the retry delay
    pub fn with_retry_delay_ms(mut self, retry_delay_ms: u64) -> Self {
        self.retry_delay_ms = retry_delay_ms;
        self
    }

    /// Set the attempt budget
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 || self.max_attempts > MAX_ATTEMPTS {
            return Err(format!(
                "max_attempts must be between 1 and {} (got {})",
                MAX_ATTEMPTS, self.max_attempts
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClassifierConfig {
    /// Two attempts with a one second pause
    fn default() -> Self {
        Self {
            max_attempts: 2,
            retry_delay_ms: 1_000,
            request_timeout_secs: 60,
        }
    }
}
