//! Rolecheck Classifier
//!
//! Judges short biographical documents against the question "is this person
//! a baker?" by delegating to an LLM, and guarantees the shape of every
//! record regardless of what the model returns.
//!
//! # Architecture
//!
//! ```text
//! DocumentSource → BatchDriver → Classifier → LlmProvider
//!                                    ↓
//!                     parse + schema check (fail closed)
//!                                    ↓
//!                  ClassificationResult → ReportSink
//! ```
//!
//! # Key Features
//!
//! - **Classification Contract**: fixed policy text and required response keys
//! - **Resilient Call**: two attempts with a fixed pause, then a synthesized ERROR record
//! - **Batch Driver**: sequential, identifier-ordered processing with usage totals
//! - **JSON Report**: one array written once at the end of the run
//!
//! # Example Usage
//!
//! ```no_run
//! use rolecheck_classifier::{
//!     BatchDriver, Classifier, ClassifierConfig, DirectorySource, JsonReportWriter,
//! };
//! use rolecheck_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = Classifier::new(MockProvider::default(), ClassifierConfig::default());
//! let driver = BatchDriver::new(classifier);
//!
//! let source = DirectorySource::new("sample_people");
//! let mut sink = JsonReportWriter::new("results.json");
//! let report = driver.run(&source, &mut sink, |result| {
//!     println!("{}: {}", result.source_id, result.status);
//! }).await?;
//!
//! println!("Total tokens: {}", report.usage.total);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod batch;
mod classifier;
mod config;
mod error;
mod parser;
mod prompt;
mod report;
mod source;
mod types;

#[cfg(test)]
mod tests;

pub use batch::BatchDriver;
pub use classifier::Classifier;
pub use config::{ClassifierConfig, MAX_ATTEMPTS};
pub use error::ClassifierError;
pub use parser::parse_classification;
pub use prompt::{user_prompt, ClassificationContract, POLICY_TEXT, REQUIRED_FIELDS};
pub use report::{render_record, JsonReportWriter, ReportRecord};
pub use source::{DirectorySource, InMemorySource, DEFAULT_EXTENSION};
pub use types::{BatchReport, ClassificationOutcome, UsageTotals};
