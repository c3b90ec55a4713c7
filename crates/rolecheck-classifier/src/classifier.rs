//! Resilient extraction call: bounded retry around one model invocation

use crate::config::{ClassifierConfig, MAX_ATTEMPTS};
use crate::error::ClassifierError;
use crate::parser::parse_classification;
use crate::prompt::user_prompt;
use crate::types::ClassificationOutcome;
use rolecheck_domain::{ClassificationRequest, ClassificationResult, LlmProvider, UsageStats};
use tracing::{debug, info, warn};

/// Classifies one document at a time against the baker policy
///
/// `classify` is total: every failure mode ends as a synthesized ERROR
/// record, never as a returned error or a panic.
pub struct Classifier<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ClassifierConfig,
}

impl<L> Classifier<L>
where
    L: LlmProvider,
{
    /// Create a new Classifier
    pub fn new(llm_provider: L, config: ClassifierConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// The underlying provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one document
    ///
    /// Makes up to `max_attempts` calls (never more than [`MAX_ATTEMPTS`]),
    /// pausing `retry_delay` between a failed attempt and the next. Returns the first validated record, or
    /// an ERROR record describing the last failure.
    pub async fn classify(&self, request: &ClassificationRequest) -> ClassificationOutcome {
        let max_attempts = self.config.max_attempts.clamp(1, MAX_ATTEMPTS);
        let document_id = request.document_id();
        let mut last_error: Option<ClassifierError> = None;

        for attempt in 1..=max_attempts {
            match self.attempt(request).await {
                Ok((result, usage)) => {
                    debug!("'{}' classified on attempt {}", document_id, attempt);
                    return ClassificationOutcome::Success {
                        result: result.with_source(document_id),
                        usage,
                        attempts: attempt,
                    };
                }
                Err(e) => {
                    warn!(
                        "Attempt {}/{} failed for '{}': {}",
                        attempt, max_attempts, document_id, e
                    );
                    last_error = Some(e);
                    if attempt < max_attempts {
                        tokio::time::sleep(self.config.retry_delay()).await;
                    }
                }
            }
        }

        let description = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no attempt was made".to_string());

        ClassificationOutcome::Failure {
            result: ClassificationResult::error(format!("Processing failure: {}", description))
                .with_source(document_id),
            attempts: max_attempts,
        }
    }

    /// One call plus validation
    async fn attempt(
        &self,
        request: &ClassificationRequest,
    ) -> Result<(ClassificationResult, Option<UsageStats>), ClassifierError> {
        let prompt = user_prompt(request.document_text());
        debug!("User prompt length: {} chars", prompt.len());

        let completion = self
            .llm_provider
            .complete(request.policy_text(), &prompt)
            .await
            .map_err(|e| ClassifierError::Llm(e.to_string()))?;

        if let Some(usage) = completion.usage {
            info!(
                "[tokens:{}] prompt={} completion={} total={}",
                request.document_id(),
                usage.prompt_tokens,
                usage.completion_tokens,
                usage.total_tokens
            );
        }

        debug!("LLM response length: {} chars", completion.content.len());

        let result = parse_classification(&completion.content)?;
        Ok((result, completion.usage))
    }
}
