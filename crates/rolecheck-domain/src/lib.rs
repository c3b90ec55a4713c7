//! Rolecheck Domain Layer
//!
//! This crate contains the value types and trait interfaces shared by every
//! other rolecheck crate. It has ZERO external dependencies and holds no I/O.
//!
//! ## Key Concepts
//!
//! - **ClassificationRequest**: one document plus the policy it is judged under
//! - **ClassificationResult**: the trusted, schema-complete record for a document
//! - **BakerStatus**: SUPPORTED / NOT_FOUND / CONFLICT, plus the pipeline-only ERROR
//! - **UsageStats**: token counts reported by the model service for one call
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Trait definitions for the model service, the document source and the report sink
//! - Infrastructure implementations live in `rolecheck-llm` and `rolecheck-classifier`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classification;
pub mod status;
pub mod traits;
pub mod usage;

// Re-exports for convenience
pub use classification::{ClassificationRequest, ClassificationResult, MAX_EVIDENCE};
pub use status::BakerStatus;
pub use traits::{Completion, Document, DocumentSource, LlmProvider, ReportSink};
pub use usage::UsageStats;
