//! Classification request and result types

use crate::BakerStatus;

/// Maximum number of evidence snippets a result may carry
pub const MAX_EVIDENCE: usize = 3;

/// One document to be judged under a fixed policy
///
/// Immutable after construction; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    policy_text: String,
    document_text: String,
    document_id: String,
}

impl ClassificationRequest {
    /// Create a new request
    ///
    /// # Examples
    ///
    /// ```
    /// use rolecheck_domain::ClassificationRequest;
    ///
    /// let request = ClassificationRequest::new("policy", "Alice bakes bread.", "alice.txt");
    /// assert_eq!(request.document_id(), "alice.txt");
    /// ```
    pub fn new(
        policy_text: impl Into<String>,
        document_text: impl Into<String>,
        document_id: impl Into<String>,
    ) -> Self {
        Self {
            policy_text: policy_text.into(),
            document_text: document_text.into(),
            document_id: document_id.into(),
        }
    }

    /// The fixed system instructions
    pub fn policy_text(&self) -> &str {
        &self.policy_text
    }

    /// The verbatim document text
    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    /// Label of the document (usually its file name)
    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}

/// Trusted, schema-complete classification record
///
/// Every value of this type has all five logical fields populated; records
/// that fail validation are replaced wholesale by [`ClassificationResult::error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    /// Person's name as written in the document, or empty
    pub name: String,

    /// Occupation as written in the document, or empty
    pub stated_occupation: String,

    /// Judgement for the document
    pub status: BakerStatus,

    /// Up to [`MAX_EVIDENCE`] verbatim snippets from the document
    pub evidence: Vec<String>,

    /// Short explanation of the status
    pub reason: String,

    /// Which document produced this record
    pub source_id: String,
}

impl ClassificationResult {
    /// Synthesize the terminal ERROR record used when no attempt succeeded
    ///
    /// # Examples
    ///
    /// ```
    /// use rolecheck_domain::{BakerStatus, ClassificationResult};
    ///
    /// let result = ClassificationResult::error("Processing failure: timeout");
    /// assert_eq!(result.status, BakerStatus::Error);
    /// assert!(result.evidence.is_empty());
    /// ```
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            stated_occupation: String::new(),
            status: BakerStatus::Error,
            evidence: Vec::new(),
            reason: reason.into(),
            source_id: String::new(),
        }
    }

    /// Attach provenance
    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Whether this record was synthesized by the pipeline
    pub fn is_error(&self) -> bool {
        self.status == BakerStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_record_is_complete() {
        let result = ClassificationResult::error("Processing failure: boom");
        assert!(result.name.is_empty());
        assert!(result.stated_occupation.is_empty());
        assert!(result.evidence.is_empty());
        assert_eq!(result.reason, "Processing failure: boom");
        assert!(result.is_error());
    }

    #[test]
    fn test_with_source_sets_provenance() {
        let result = ClassificationResult::error("x").with_source("bob.txt");
        assert_eq!(result.source_id, "bob.txt");
    }

    #[test]
    fn test_request_accessors() {
        let request = ClassificationRequest::new("p", "d", "id");
        assert_eq!(request.policy_text(), "p");
        assert_eq!(request.document_text(), "d");
        assert_eq!(request.document_id(), "id");
    }
}
