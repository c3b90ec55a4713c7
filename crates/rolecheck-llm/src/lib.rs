//! Rolecheck LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `rolecheck-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic scripted fake for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions over HTTP
//!
//! Providers make exactly one request per call. Retrying is the caller's job.
//!
//! # Examples
//!
//! ```
//! use rolecheck_llm::MockProvider;
//! use rolecheck_domain::LlmProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new(r#"{"name": ""}"#);
//! let completion = provider.complete("policy", "document").await.unwrap();
//! assert_eq!(completion.content, r#"{"name": ""}"#);
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use rolecheck_domain::{Completion, LlmProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials rejected by the service
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One scripted step for [`MockProvider`]
#[derive(Debug, Clone)]
enum Scripted {
    Reply(Completion),
    Fail(String),
}

/// A recorded call made against [`MockProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// System prompt sent
    pub system_prompt: String,
    /// User prompt sent
    pub user_prompt: String,
}

/// Mock LLM provider for deterministic testing
///
/// Scripted replies and failures are consumed in order, one per call. Once the
/// script is exhausted every call returns the default response. Clones share
/// the script, call count and call log.
///
/// # Examples
///
/// ```
/// use rolecheck_llm::MockProvider;
///
/// let provider = MockProvider::new("fallback")
///     .then_fail("connection reset")
///     .then_reply("first real answer");
/// assert_eq!(provider.remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Completion,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all calls
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_completion(Completion::new(response))
    }

    /// Create a new MockProvider whose default response carries usage stats
    pub fn with_completion(completion: Completion) -> Self {
        Self {
            default_response: completion,
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful reply
    pub fn then_reply(self, content: impl Into<String>) -> Self {
        self.then_complete(Completion::new(content))
    }

    /// Queue a successful reply with usage stats
    pub fn then_complete(self, completion: Completion) -> Self {
        lock(&self.script).push_back(Scripted::Reply(completion));
        self
    }

    /// Queue a transport-level failure
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        lock(&self.script).push_back(Scripted::Fail(message.into()));
        self
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Get every call made so far, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Number of scripted steps not yet consumed
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<Completion, LlmError> {
        lock(&self.calls).push(RecordedCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });

        let next = lock(&self.script).pop_front();
        match next {
            Some(Scripted::Reply(completion)) => Ok(completion),
            Some(Scripted::Fail(message)) => Err(LlmError::Communication(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}

// A poisoned lock only means another test thread panicked; the data is still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
