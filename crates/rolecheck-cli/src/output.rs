//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use rolecheck_classifier::{render_record, BatchReport, UsageTotals};
use rolecheck_domain::{BakerStatus, ClassificationResult};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Progress block for one finished document, if the format prints one.
    pub fn progress(&self, result: &ClassificationResult) -> Result<Option<String>> {
        match self.format {
            CliFormat::Json => {
                let header = self.colorize(&format!("=== {} ===", result.source_id), "cyan");
                Ok(Some(format!("\n{}\n{}", header, render_record(result)?)))
            }
            CliFormat::Table | CliFormat::Quiet => Ok(None),
        }
    }

    /// Closing output: per-document table (table format) and status counts.
    pub fn summary(&self, report: &BatchReport) -> String {
        let mut sections = Vec::new();
        if self.format == CliFormat::Table {
            sections.push(self.results_table(&report.results));
        }
        if self.format != CliFormat::Quiet {
            sections.push(self.status_table(report));
        }
        sections.join("\n\n")
    }

    /// One row per document.
    fn results_table(&self, results: &[ClassificationResult]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["File", "Name", "Occupation", "Status", "Reason"]);

        for result in results {
            builder.push_record([
                result.source_id.clone(),
                result.name.clone(),
                result.stated_occupation.clone(),
                self.status(result.status),
                truncate(&result.reason, 60),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Count per status.
    fn status_table(&self, report: &BatchReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Status", "Documents"]);
        for (status, count) in report.status_counts() {
            builder.push_record([self.status(status), count.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());
        table.to_string()
    }

    /// Format the saved-report line.
    pub fn saved(&self, path: &Path) -> String {
        let shown = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.success(&format!("Saved: {}", shown.display()))
    }

    /// Format aggregate token usage.
    pub fn usage_totals(&self, usage: &UsageTotals) -> String {
        format!(
            "TOTAL TOKENS: prompt={} completion={} total={}",
            usage.prompt, usage.completion, usage.total
        )
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("Error: {}", message), "red")
    }

    /// Status name, colored by outcome.
    fn status(&self, status: BakerStatus) -> String {
        let color = match status {
            BakerStatus::Supported => "green",
            BakerStatus::Conflict => "yellow",
            BakerStatus::NotFound => "blue",
            BakerStatus::Error => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", head)
}
