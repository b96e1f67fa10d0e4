// src/utils.rs
use anyhow::{Context as _, Result};

use crate::cli::OutputFormat;
use crate::models::UsageReport;

/// Writes a search result to stdout.
///
/// # Errors
///
/// Fails only if the report cannot be serialized to JSON.
pub fn print_report(report: &UsageReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{}", report.query);
            println!("{}", report.summary_line());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .context("Failed to serialize usage report")?;
            println!("{json}");
        }
    }
    Ok(())
}
