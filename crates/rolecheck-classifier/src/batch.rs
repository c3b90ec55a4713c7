//! Batch driver: classify every document in order and persist the report

use crate::classifier::Classifier;
use crate::error::ClassifierError;
use crate::prompt::ClassificationContract;
use crate::types::{BatchReport, UsageTotals};
use rolecheck_domain::{ClassificationResult, DocumentSource, LlmProvider, ReportSink};
use tracing::info;

/// Runs the classifier over a document source, one document at a time
pub struct BatchDriver<L>
where
    L: LlmProvider,
{
    classifier: Classifier<L>,
}

impl<L> BatchDriver<L>
where
    L: LlmProvider,
{
    /// Create a new driver
    pub fn new(classifier: Classifier<L>) -> Self {
        Self { classifier }
    }

    /// The wrapped classifier
    pub fn classifier(&self) -> &Classifier<L> {
        &self.classifier
    }

    /// Classify every document and write the report
    ///
    /// Documents are processed sequentially in identifier order and
    /// `on_result` is called after each one. Only source and sink failures
    /// abort the run; per-document failures become ERROR records.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing or empty, or if the report
    /// cannot be written.
    pub async fn run<S, K, F>(
        &self,
        source: &S,
        sink: &mut K,
        mut on_result: F,
    ) -> Result<BatchReport, ClassifierError>
    where
        S: DocumentSource<Error = ClassifierError>,
        K: ReportSink<Error = ClassifierError>,
        F: FnMut(&ClassificationResult),
    {
        let mut documents = source.documents()?;
        if documents.is_empty() {
            return Err(ClassifierError::NoDocuments("document source".to_string()));
        }
        documents.sort_by(|a, b| a.id.cmp(&b.id));

        let total = documents.len();
        info!("Classifying {} documents", total);

        let mut results: Vec<ClassificationResult> = Vec::with_capacity(total);
        let mut usage = UsageTotals::default();

        for (idx, document) in documents.into_iter().enumerate() {
            info!("Processing {}/{}: {}", idx + 1, total, document.id);

            let request = ClassificationContract::for_document(document.text).into_request(document.id);
            let (result, call_usage) = self.classifier.classify(&request).await.into_parts();

            if let Some(call_usage) = call_usage {
                usage.record(call_usage);
            }

            on_result(&result);
            results.push(result);
        }

        sink.write_report(&results)?;

        let report = BatchReport { results, usage };
        info!(
            "Batch complete: {} documents, {} errors, {} total tokens",
            report.len(),
            report.results.iter().filter(|r| r.is_error()).count(),
            report.usage.total
        );

        Ok(report)
    }
}
