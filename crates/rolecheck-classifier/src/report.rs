//! Report records and the JSON report writer

use crate::error::ClassifierError;
use rolecheck_domain::{ClassificationResult, ReportSink};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Serialized form of one result in the report file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Person's name, or empty
    pub name: String,
    /// Stated occupation, or empty
    pub stated_occupation: String,
    /// Wire name of the status
    pub baker_status: String,
    /// Verbatim evidence snippets
    pub evidence: Vec<String>,
    /// Explanation
    pub reason: String,
    /// Source document
    #[serde(rename = "_file")]
    pub file: String,
}

impl From<&ClassificationResult> for ReportRecord {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            name: result.name.clone(),
            stated_occupation: result.stated_occupation.clone(),
            baker_status: result.status.as_str().to_string(),
            evidence: result.evidence.clone(),
            reason: result.reason.clone(),
            file: result.source_id.clone(),
        }
    }
}

/// Pretty-print one result the way it appears in the report
pub fn render_record(result: &ClassificationResult) -> Result<String, ClassifierError> {
    serde_json::to_string_pretty(&ReportRecord::from(result))
        .map_err(|e| ClassifierError::Serialization(e.to_string()))
}

/// Writes the whole report as one pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    path: PathBuf,
}

impl JsonReportWriter {
    /// Create a writer targeting `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Destination file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a report back from disk
    pub fn read(path: impl AsRef<Path>) -> Result<Vec<ReportRecord>, ClassifierError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl ReportSink for JsonReportWriter {
    type Error = ClassifierError;

    fn write_report(&mut self, results: &[ClassificationResult]) -> Result<(), ClassifierError> {
        let records: Vec<ReportRecord> = results.iter().map(ReportRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| ClassifierError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, json)?;
        Ok(())
    }
}
