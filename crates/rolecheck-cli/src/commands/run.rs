//! Run command implementation.

use crate::config::Settings;
use crate::error::Result;
use crate::output::Formatter;
use rolecheck_classifier::{
    BatchDriver, BatchReport, Classifier, DirectorySource, JsonReportWriter,
};
use rolecheck_domain::LlmProvider;
use rolecheck_llm::OpenAiProvider;
use tracing::info;

/// Execute the batch run against the OpenAI-compatible service.
pub async fn execute_run(settings: Settings, formatter: &Formatter) -> Result<()> {
    let provider = OpenAiProvider::new(settings.api_key.clone(), settings.model.clone())?
        .with_endpoint(settings.api_base.clone())
        .with_timeout(settings.classifier.request_timeout())?;

    info!("Using model '{}' at {}", settings.model, settings.api_base);

    run_batch(provider, &settings, formatter).await?;
    Ok(())
}

/// Run the batch with any provider and print progress, summary and totals.
pub async fn run_batch<L>(
    provider: L,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<BatchReport>
where
    L: LlmProvider,
{
    let driver = BatchDriver::new(Classifier::new(provider, settings.classifier.clone()));
    let source = DirectorySource::new(&settings.input);
    let mut sink = JsonReportWriter::new(&settings.output);

    let mut render_error = None;
    let report = driver
        .run(&source, &mut sink, |result| match formatter.progress(result) {
            Ok(Some(block)) => println!("{}", block),
            Ok(None) => {}
            Err(e) => render_error = Some(e),
        })
        .await?;
    if let Some(e) = render_error {
        return Err(e);
    }

    let summary = formatter.summary(&report);
    if !summary.is_empty() {
        println!("\n{}", summary);
    }
    println!("\n{}", formatter.saved(sink.path()));
    println!("\n{}", formatter.usage_totals(&report.usage));

    Ok(report)
}
