//! Parse model output into a validated classification
//!
//! Fail closed: anything that does not fully conform is an error for the
//! whole attempt. Nothing is patched up or partially accepted.

use crate::error::ClassifierError;
use crate::prompt::REQUIRED_FIELDS;
use rolecheck_domain::{BakerStatus, ClassificationResult, MAX_EVIDENCE};
use serde_json::{Map, Value};

/// Parse a raw model response into a schema-conforming result
///
/// The returned record has an empty `source_id`; the caller attaches provenance.
pub fn parse_classification(response: &str) -> Result<ClassificationResult, ClassifierError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ClassifierError::InvalidFormat("Expected JSON object".to_string()))?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !obj.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ClassifierError::MissingFields(missing));
    }

    let status_str = string_field(obj, "baker_status")?;
    let status = BakerStatus::from_wire(&status_str).ok_or_else(|| {
        ClassifierError::InvalidFormat(format!("Unknown baker_status '{}'", status_str))
    })?;
    if !status.is_model_selectable() {
        return Err(ClassifierError::InvalidFormat(
            "baker_status ERROR is reserved for pipeline failures".to_string(),
        ));
    }

    Ok(ClassificationResult {
        name: string_field(obj, "name")?,
        stated_occupation: string_field(obj, "stated_occupation")?,
        status,
        evidence: evidence_field(obj)?,
        reason: string_field(obj, "reason")?,
        source_id: String::new(),
    })
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, ClassifierError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(ClassifierError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence line, and the closing fence if present
        let end = if lines[lines.len() - 1].trim() == "```" {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Result<String, ClassifierError> {
    obj.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ClassifierError::InvalidFormat(format!("'{}' must be a string", key)))
}

fn evidence_field(obj: &Map<String, Value>) -> Result<Vec<String>, ClassifierError> {
    let items = obj
        .get("evidence")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ClassifierError::InvalidFormat("'evidence' must be an array".to_string()))?;

    if items.len() > MAX_EVIDENCE {
        return Err(ClassifierError::InvalidFormat(format!(
            "'evidence' has {} items (max: {})",
            items.len(),
            MAX_EVIDENCE
        )));
    }

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ClassifierError::InvalidFormat("'evidence' items must be strings".to_string())
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = r#"{
        "name": "Alice",
        "stated_occupation": "baker",
        "baker_status": "SUPPORTED",
        "evidence": ["Alice is a baker at the downtown bakery", "she bakes bread daily"],
        "reason": "Title and duties both involve baking."
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let result = parse_classification(ALICE).unwrap();
        assert_eq!(result.name, "Alice");
        assert_eq!(result.stated_occupation, "baker");
        assert_eq!(result.status, BakerStatus::Supported);
        assert_eq!(result.evidence.len(), 2);
        assert!(result.source_id.is_empty());
    }

    #[test]
    fn test_parse_with_markdown_wrapper() {
        let response = format!("```json\n{}\n```", ALICE);
        let result = parse_classification(&response).unwrap();
        assert_eq!(result.status, BakerStatus::Supported);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_classification("This is not JSON");
        assert!(matches!(result, Err(ClassifierError::JsonParse(_))));
    }

    #[test]
    fn test_parse_not_an_object() {
        let result = parse_classification(r#"["SUPPORTED"]"#);
        assert!(matches!(result, Err(ClassifierError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_reason_is_reported() {
        let response = r#"{
            "name": "Bob",
            "stated_occupation": "baker",
            "baker_status": "CONFLICT",
            "evidence": []
        }"#;
        match parse_classification(response) {
            Err(ClassifierError::MissingFields(fields)) => assert_eq!(fields, vec!["reason"]),
            other => panic!("Expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_all_missing_fields_are_listed() {
        match parse_classification("{}") {
            Err(ClassifierError::MissingFields(fields)) => assert_eq!(fields.len(), 5),
            other => panic!("Expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_strings_and_evidence_are_valid() {
        let response = r#"{
            "name": "",
            "stated_occupation": "",
            "baker_status": "NOT_FOUND",
            "evidence": [],
            "reason": "No occupation is mentioned."
        }"#;
        let result = parse_classification(response).unwrap();
        assert_eq!(result.status, BakerStatus::NotFound);
        assert!(result.name.is_empty());
        assert!(result.evidence.is_empty());
    }

    #[test]
    fn test_model_may_not_answer_error() {
        let response = r#"{
            "name": "", "stated_occupation": "", "baker_status": "ERROR",
            "evidence": [], "reason": "could not decide"
        }"#;
        assert!(matches!(
            parse_classification(response),
            Err(ClassifierError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let response = r#"{
            "name": "", "stated_occupation": "", "baker_status": "MAYBE",
            "evidence": [], "reason": "?"
        }"#;
        assert!(parse_classification(response).is_err());
    }

    #[test]
    fn test_status_must_be_exact_wire_name() {
        for status in [" supported ", "supported", "Conflict"] {
            let response = ALICE.replace("\"SUPPORTED\"", &format!("\"{}\"", status));
            let err = parse_classification(&response).unwrap_err();
            assert!(err.to_string().contains("Unknown baker_status"), "{}", err);
        }
    }

    #[test]
    fn test_too_much_evidence_rejected() {
        let response = r#"{
            "name": "Cara", "stated_occupation": "baker", "baker_status": "SUPPORTED",
            "evidence": ["a", "b", "c", "d"], "reason": "lots"
        }"#;
        assert!(matches!(
            parse_classification(response),
            Err(ClassifierError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_wrong_field_types_rejected() {
        let null_name = r#"{
            "name": null, "stated_occupation": "", "baker_status": "NOT_FOUND",
            "evidence": [], "reason": "r"
        }"#;
        assert!(parse_classification(null_name).is_err());

        let string_evidence = r#"{
            "name": "", "stated_occupation": "", "baker_status": "NOT_FOUND",
            "evidence": "none", "reason": "r"
        }"#;
        assert!(parse_classification(string_evidence).is_err());

        let numeric_evidence = r#"{
            "name": "", "stated_occupation": "", "baker_status": "NOT_FOUND",
            "evidence": [1], "reason": "r"
        }"#;
        assert!(parse_classification(numeric_evidence).is_err());
    }

    #[test]
    fn test_extra_keys_ignored() {
        let response = r#"{
            "name": "Dan", "stated_occupation": "pastry chef", "baker_status": "SUPPORTED",
            "evidence": ["pastry chef"], "reason": "r", "confidence": 0.9
        }"#;
        assert!(parse_classification(response).is_ok());
    }

    #[test]
    fn test_extract_json_from_plain_json() {
        let json = r#"{"key": "value"}"#;
        assert_eq!(extract_json(json).unwrap(), json);
    }

    #[test]
    fn test_extract_json_from_markdown_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_empty_block() {
        assert!(extract_json("```").is_err());
    }
}
