//! Status module - the outcome of judging one document

use std::fmt;

/// Baker status assigned to a document
///
/// The first three values are chosen by the model; `Error` is reserved for
/// records the pipeline synthesizes when no trustworthy answer was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BakerStatus {
    /// The text shows a baking title and/or baking duties
    Supported,

    /// Not enough evidence either way (including food-adjacent work)
    NotFound,

    /// A baker-equivalent title with duties that contradict it
    Conflict,

    /// Pipeline-level failure (transport, parsing or schema)
    Error,
}

impl BakerStatus {
    /// All statuses in report order
    pub const ALL: [BakerStatus; 4] = [
        BakerStatus::Supported,
        BakerStatus::NotFound,
        BakerStatus::Conflict,
        BakerStatus::Error,
    ];

    /// Get the wire name used in model responses and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            BakerStatus::Supported => "SUPPORTED",
            BakerStatus::NotFound => "NOT_FOUND",
            BakerStatus::Conflict => "CONFLICT",
            BakerStatus::Error => "ERROR",
        }
    }

    /// Parse a status from its wire name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SUPPORTED" => Some(BakerStatus::Supported),
            "NOT_FOUND" => Some(BakerStatus::NotFound),
            "CONFLICT" => Some(BakerStatus::Conflict),
            "ERROR" => Some(BakerStatus::Error),
            _ => None,
        }
    }

    /// Match an exact wire name, with no trimming or case folding
    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Whether the model is allowed to answer with this status
    pub fn is_model_selectable(&self) -> bool {
        !matches!(self, BakerStatus::Error)
    }
}

impl fmt::Display for BakerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BakerStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid baker status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(BakerStatus::Supported.as_str(), "SUPPORTED");
        assert_eq!(BakerStatus::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(BakerStatus::Conflict.as_str(), "CONFLICT");
        assert_eq!(BakerStatus::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(BakerStatus::parse("supported"), Some(BakerStatus::Supported));
        assert_eq!(BakerStatus::parse(" Not_Found "), Some(BakerStatus::NotFound));
        assert_eq!(BakerStatus::parse("BAKER"), None);
        assert!("maybe".parse::<BakerStatus>().is_err());
    }

    #[test]
    fn test_from_wire_is_exact() {
        assert_eq!(BakerStatus::from_wire("NOT_FOUND"), Some(BakerStatus::NotFound));
        assert_eq!(BakerStatus::from_wire("supported"), None);
        assert_eq!(BakerStatus::from_wire(" SUPPORTED "), None);
    }

    #[test]
    fn test_only_error_is_reserved() {
        assert!(BakerStatus::Supported.is_model_selectable());
        assert!(BakerStatus::NotFound.is_model_selectable());
        assert!(BakerStatus::Conflict.is_model_selectable());
        assert!(!BakerStatus::Error.is_model_selectable());
    }

    proptest! {
        #[test]
        fn prop_wire_name_round_trips(idx in 0usize..4) {
            let status = BakerStatus::ALL[idx];
            prop_assert_eq!(BakerStatus::parse(status.as_str()), Some(status));
            prop_assert_eq!(status.to_string(), status.as_str());
        }

        #[test]
        fn prop_parse_never_panics(s in ".*") {
            let _ = BakerStatus::parse(&s);
        }
    }
}
