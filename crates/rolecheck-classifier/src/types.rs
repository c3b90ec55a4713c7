//! Outcome and report types

use rolecheck_domain::{BakerStatus, ClassificationResult, UsageStats};

/// Result of the resilient call for one document
///
/// Both variants carry a schema-complete record; only `Success` carries usage.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// An attempt produced a validated record
    Success {
        /// Record returned by the model, with provenance attached
        result: ClassificationResult,
        /// Usage reported for the successful call
        usage: Option<UsageStats>,
        /// Attempts made, 1-indexed
        attempts: u32,
    },

    /// Every attempt failed; the record was synthesized
    Failure {
        /// Synthesized ERROR record
        result: ClassificationResult,
        /// Attempts made
        attempts: u32,
    },
}

impl ClassificationOutcome {
    /// The record, whichever way it was obtained
    pub fn result(&self) -> &ClassificationResult {
        match self {
            ClassificationOutcome::Success { result, .. } => result,
            ClassificationOutcome::Failure { result, .. } => result,
        }
    }

    /// Usage of the successful call, if any
    pub fn usage(&self) -> Option<UsageStats> {
        match self {
            ClassificationOutcome::Success { usage, .. } => *usage,
            ClassificationOutcome::Failure { .. } => None,
        }
    }

    /// Number of attempts made
    pub fn attempts(&self) -> u32 {
        match self {
            ClassificationOutcome::Success { attempts, .. } => *attempts,
            ClassificationOutcome::Failure { attempts, .. } => *attempts,
        }
    }

    /// Whether an attempt succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ClassificationOutcome::Success { .. })
    }

    /// Split into the record and optional usage
    pub fn into_parts(self) -> (ClassificationResult, Option<UsageStats>) {
        match self {
            ClassificationOutcome::Success { result, usage, .. } => (result, usage),
            ClassificationOutcome::Failure { result, .. } => (result, None),
        }
    }
}

/// Running token totals for a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageTotals {
    /// Prompt tokens
    pub prompt: u64,
    /// Completion tokens
    pub completion: u64,
    /// Total tokens
    pub total: u64,
    /// Calls that reported usage
    pub calls: usize,
}

impl UsageTotals {
    /// Add one call's usage
    pub fn record(&mut self, usage: UsageStats) {
        self.prompt += usage.prompt_tokens;
        self.completion += usage.completion_tokens;
        self.total += usage.total_tokens;
        self.calls += 1;
    }
}

/// Ordered results of a batch run plus aggregate usage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// One record per document, in identifier order
    pub results: Vec<ClassificationResult>,

    /// Aggregate token usage
    pub usage: UsageTotals,
}

impl BatchReport {
    /// Number of documents in the report
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the report is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Count of records per status, in [`BakerStatus::ALL`] order
    pub fn status_counts(&self) -> Vec<(BakerStatus, usize)> {
        BakerStatus::ALL
            .iter()
            .map(|status| {
                let count = self.results.iter().filter(|r| r.status == *status).count();
                (*status, count)
            })
            .collect()
    }
}
