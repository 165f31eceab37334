//! JSON error-report writer.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use payfeed_core::{BatchOutcome, SkippedRecord};
use payfeed_model::{ParseError, ValidationError, ValidationWarning};

const REPORT_SCHEMA: &str = "payfeed.error-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ErrorReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    batch_file: String,
    rows: usize,
    error_count: usize,
    warning_count: usize,
    errors: &'a [ValidationError],
    warnings: &'a [ValidationWarning],
    parse_errors: &'a [ParseError],
    skipped: &'a [SkippedRecord],
}

/// Write `error_report.json` into `output_dir`, creating it if needed.
pub fn write_error_report_json(
    output_dir: &Path,
    batch_file: &Path,
    outcome: &BatchOutcome,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("error_report.json");
    let payload = ErrorReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        batch_file: batch_file.display().to_string(),
        rows: outcome.details.len(),
        error_count: outcome.errors.len(),
        warning_count: outcome.warnings.len(),
        errors: &outcome.errors,
        warnings: &outcome.warnings,
        parse_errors: &outcome.parse_errors,
        skipped: &outcome.skipped,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
