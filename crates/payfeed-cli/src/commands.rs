//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, trace};

use payfeed_core::{BatchOutcome, run_batch};
use payfeed_model::{EmployeeRecord, FeedError, ProviderMapping};
use payfeed_transform::{apply_mapping, default_mappings, mapping_for};

use payfeed_cli::logging::redact_value;
use payfeed_cli::report::write_error_report_json;

use crate::cli::{CheckArgs, RunArgs};
use crate::progress::ProgressBarSink;
use crate::store::DirStore;
use crate::types::{ProviderFile, RunResult};

/// Full pipeline: parse, validate, gate, transform, write outputs.
pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let text = fs::read_to_string(&args.batch_file)
        .with_context(|| format!("read batch file: {}", args.batch_file.display()))?;
    let mappings = resolve_mappings(args)?;

    let mut sink = ProgressBarSink::new();
    let outcome = run_batch(&text, &mappings, &mut sink)
        .with_context(|| format!("process batch: {}", args.batch_file.display()))?;
    sink.finish();
    trace_row_issues(&outcome);

    let mut provider_files = Vec::new();
    let mut report_path = None;
    let mut output_dir = None;

    if args.dry_run {
        for output in &outcome.outputs {
            provider_files.push(ProviderFile {
                provider: output.provider.clone(),
                records: output.records.len(),
                path: None,
            });
        }
    } else {
        let dir = resolve_output_dir(args);
        fs::create_dir_all(&dir)
            .with_context(|| format!("create output dir: {}", dir.display()))?;
        for (output, mapping) in outcome.outputs.iter().zip(&mappings) {
            let path = dir.join(format!("{}_output.csv", output.provider));
            write_provider_csv(&path, mapping, output)?;
            info!(provider = %output.provider, records = output.records.len(),
                path = %path.display(), "provider output written");
            provider_files.push(ProviderFile {
                provider: output.provider.clone(),
                records: output.records.len(),
                path: Some(path),
            });
        }
        report_path = Some(write_error_report_json(&dir, &args.batch_file, &outcome)?);
        let mut store = DirStore::new(&dir);
        outcome.ledger.save(&mut store, "ledger")?;
        output_dir = Some(dir);
    }

    Ok(run_result(
        &args.batch_file,
        output_dir,
        &outcome,
        provider_files,
        report_path,
    ))
}

/// Parse and validate only; no transformation, no files.
pub fn run_check(args: &CheckArgs) -> Result<RunResult> {
    let text = fs::read_to_string(&args.batch_file)
        .with_context(|| format!("read batch file: {}", args.batch_file.display()))?;
    let mut sink = ProgressBarSink::new();
    let outcome = run_batch(&text, &[], &mut sink)
        .with_context(|| format!("process batch: {}", args.batch_file.display()))?;
    sink.finish();
    trace_row_issues(&outcome);
    Ok(run_result(&args.batch_file, None, &outcome, Vec::new(), None))
}

/// List the built-in provider mappings.
pub fn run_providers() {
    for mapping in default_mappings() {
        println!(
            "{}: {} mapped fields, {} transformations",
            mapping.provider,
            mapping.field_maps.len(),
            mapping.transforms.len()
        );
    }
}

/// Trace-level dump of per-row findings. Offending values and normalizer
/// originals carry SSNs and account numbers, so they pass through the
/// redaction gate and only appear verbatim under `--log-data`.
fn trace_row_issues(outcome: &BatchOutcome) {
    for error in &outcome.errors {
        trace!(
            row_number = error.row_number,
            row_id = %error.row_id,
            field = %error.field,
            value = redact_value(&error.value),
            message = %error.message,
            "validation error"
        );
    }
    for warning in &outcome.warnings {
        trace!(
            row_number = warning.row_number,
            row_id = %warning.row_id,
            field = %warning.field,
            original_value = redact_value(&warning.original_value),
            "normalizer rewrite"
        );
    }
}

fn run_result(
    batch_file: &Path,
    output_dir: Option<PathBuf>,
    outcome: &BatchOutcome,
    provider_files: Vec<ProviderFile>,
    report_path: Option<PathBuf>,
) -> RunResult {
    RunResult {
        batch_file: batch_file.to_path_buf(),
        output_dir,
        rows: outcome.details.len(),
        transformed: outcome.details.len() - outcome.skipped.len(),
        warning_count: outcome.warnings.len(),
        errors: outcome.errors.clone(),
        parse_errors: outcome.parse_errors.clone(),
        skipped: outcome.skipped.clone(),
        provider_files,
        report_path,
        has_errors: outcome.has_errors(),
    }
}

/// An admin-supplied mapping replaces the built-ins wholesale; otherwise
/// `--provider` selects one built-in, and the default is all of them.
fn resolve_mappings(args: &RunArgs) -> Result<Vec<ProviderMapping>> {
    if let Some(path) = &args.mapping {
        let json = fs::read_to_string(path)
            .with_context(|| format!("read mapping file: {}", path.display()))?;
        let mapping: ProviderMapping = serde_json::from_str(&json)
            .with_context(|| format!("parse mapping file: {}", path.display()))?;
        return Ok(vec![mapping]);
    }
    if let Some(provider) = &args.provider {
        let Some(mapping) = mapping_for(provider) else {
            return Err(FeedError::UnknownProvider(provider.clone()))
                .context("try `payfeed providers` for the built-in list");
        };
        return Ok(vec![mapping]);
    }
    Ok(default_mappings())
}

fn resolve_output_dir(args: &RunArgs) -> PathBuf {
    if let Some(dir) = &args.output_dir {
        return dir.clone();
    }
    args.batch_file
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

/// Write one provider's transformed rows as CSV. The header row comes from
/// the mapping itself so an empty batch still produces a well-formed file.
fn write_provider_csv(
    path: &Path,
    mapping: &ProviderMapping,
    output: &payfeed_core::ProviderOutput,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output file: {}", path.display()))?;
    let template = apply_mapping(&EmployeeRecord::new(), mapping);
    writer.write_record(template.keys())?;
    for record in &output.records {
        writer.write_record(record.iter().map(|(_, value)| value))?;
    }
    writer.flush()?;
    Ok(())
}
