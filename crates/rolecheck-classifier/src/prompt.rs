//! The classification contract: fixed policy text and required response keys

use rolecheck_domain::ClassificationRequest;

/// Keys every model response must contain
pub const REQUIRED_FIELDS: [&str; 5] = [
    "name",
    "stated_occupation",
    "baker_status",
    "evidence",
    "reason",
];

/// Policy and schema sent as the system message for every document
pub const POLICY_TEXT: &str = r#"You are a strict document-based classifier.
Judge ONLY from the text provided. Do not use outside knowledge and do not infer facts that are not stated.
Your task: decide whether the person described is a BAKER, based on evidence in the text.

Return a single JSON object and nothing else, matching this schema:
{
  "name": string,
  "stated_occupation": string,
  "baker_status": "SUPPORTED" | "NOT_FOUND" | "CONFLICT",
  "evidence": [string, ...],
  "reason": string
}

Rules:
- SUPPORTED: the text shows the person holds a baking-related title and/or performs baking duties.
- CONFLICT: the text gives a baker title (or an equivalent) BUT describes duties that are incompatible with baking.
- NOT_FOUND: there is not enough evidence either way, including food-related work that is not baking.
- ERROR is reserved for processing failures outside the analysis. Never answer ERROR.
- evidence: 1 to 3 short snippets copied verbatim from the document (never paraphrased) that justify the status. It may be empty for NOT_FOUND.
- If the name or the occupation is not explicitly written in the text, use "" for that field. Never guess."#;

/// The contract a single document is judged under
///
/// Pure: the same document text always yields the same policy, schema and
/// user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationContract {
    document_text: String,
}

impl ClassificationContract {
    /// Build the contract for one document
    pub fn for_document(document_text: impl Into<String>) -> Self {
        Self {
            document_text: document_text.into(),
        }
    }

    /// System policy text
    pub fn policy_text(&self) -> &'static str {
        POLICY_TEXT
    }

    /// Keys the response must contain
    pub fn required_fields(&self) -> &'static [&'static str] {
        &REQUIRED_FIELDS
    }

    /// User message carrying the document
    pub fn user_prompt(&self) -> String {
        user_prompt(&self.document_text)
    }

    /// Turn the contract into a request for the given document id
    pub fn into_request(self, document_id: impl Into<String>) -> ClassificationRequest {
        ClassificationRequest::new(POLICY_TEXT, self.document_text, document_id)
    }
}

/// Wrap document text as the user message
pub fn user_prompt(document_text: &str) -> String {
    format!("DOCUMENT:\n{}", document_text)
}
