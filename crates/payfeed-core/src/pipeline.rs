//! The batch pipeline with explicit stages.
//!
//! Stages run in order per record: parse → normalize (inside the parser) →
//! validate → compliance gate → transform. The ledger receives validator
//! output as a side effect; transformation runs only for gate-passing
//! records but independently of validation outcome, so a record can carry
//! validation errors and still be transformed, or validate cleanly and be
//! skipped at the gate.

use serde::Serialize;
use tracing::{debug, info, info_span};

use payfeed_ingest::{ParsedDetail, parse_batch};
use payfeed_ledger::Ledger;
use payfeed_model::fields;
use payfeed_model::{
    ParseError, ProviderMapping, Result, ValidationError, ValidationWarning, resolve_row_id,
};
use payfeed_transform::{OutputRecord, apply_mapping};
use payfeed_validate::{is_compliant, skip_reason, validate_detail};

use crate::progress::{ProgressEvent, ProgressSink};

/// A record skipped at the compliance gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub row_number: usize,
    pub row_id: String,
    pub reason: String,
}

/// All transformed rows for one provider, in row order.
#[derive(Debug, Clone)]
pub struct ProviderOutput {
    pub provider: String,
    pub records: Vec<OutputRecord>,
}

/// Everything one batch run produced.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Detail rows with their original row numbers, for the correction
    /// workflow and re-validation.
    pub details: Vec<ParsedDetail>,
    pub header_fields: Vec<String>,
    /// Normalizer rewrite notices, in row order.
    pub warnings: Vec<ValidationWarning>,
    /// Row-level structural failures from the parser.
    pub parse_errors: Vec<ParseError>,
    /// Validation errors across the batch, in row order then rule order.
    pub errors: Vec<ValidationError>,
    /// Per-provider transformed rows (compliant records only).
    pub outputs: Vec<ProviderOutput>,
    /// Records the compliance gate rejected.
    pub skipped: Vec<SkippedRecord>,
    /// Audit log for this run.
    pub ledger: Ledger,
}

impl BatchOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty() || !self.parse_errors.is_empty()
    }
}

/// Run a full batch against a set of provider mappings.
///
/// Every row is processed to completion even when all of them fail; the
/// only fatal error is an input stream unreadable before any row is
/// produced.
pub fn run_batch(
    text: &str,
    mappings: &[ProviderMapping],
    sink: &mut dyn ProgressSink,
) -> Result<BatchOutcome> {
    let parsed = {
        let _span = info_span!("parse").entered();
        parse_batch(text)?
    };
    info!(
        details = parsed.details.len(),
        parse_errors = parsed.parse_errors.len(),
        warnings = parsed.warnings.len(),
        "batch parsed"
    );

    let mut outcome = BatchOutcome {
        header_fields: parsed.header_fields,
        warnings: parsed.warnings,
        parse_errors: parsed.parse_errors,
        outputs: mappings
            .iter()
            .map(|mapping| ProviderOutput {
                provider: mapping.provider.clone(),
                records: Vec::new(),
            })
            .collect(),
        ..BatchOutcome::default()
    };
    outcome.ledger.record_warnings(outcome.warnings.iter().cloned());

    sink.on_event(ProgressEvent::BatchStarted {
        total_rows: parsed.details.len(),
    });

    let _span = info_span!("process", rows = parsed.details.len()).entered();
    let mut transformed = 0usize;
    for detail in parsed.details {
        let row_number = detail.row_number;
        let row_id = resolve_row_id(
            detail.record.employee.get(fields::EMPLOYEE_ID),
            &detail.record.record_sequence,
            row_number,
        );

        let errors = validate_detail(&detail.record, row_number, Some(&outcome.header_fields));
        let error_count = errors.len();
        outcome.ledger.record_errors(errors.iter().cloned());
        outcome.errors.extend(errors);

        let compliant = is_compliant(&detail.record.employee);
        if compliant {
            for (idx, mapping) in mappings.iter().enumerate() {
                let output = apply_mapping(&detail.record.employee, mapping);
                outcome.outputs[idx].records.push(output);
            }
            transformed += 1;
        } else {
            let reason = skip_reason(&detail.record.employee);
            debug!(row_number, %row_id, reason = %reason, "record skipped at compliance gate");
            outcome.skipped.push(SkippedRecord {
                row_number,
                row_id: row_id.clone(),
                reason,
            });
        }

        sink.on_event(ProgressEvent::RowProcessed {
            row_number,
            row_id,
            error_count,
            compliant,
        });
        outcome.details.push(detail);
    }

    sink.on_event(ProgressEvent::BatchFinished {
        processed: outcome.details.len(),
        transformed,
        skipped: outcome.skipped.len(),
        error_count: outcome.errors.len(),
    });
    info!(
        processed = outcome.details.len(),
        transformed,
        skipped = outcome.skipped.len(),
        errors = outcome.errors.len(),
        "batch complete"
    );

    Ok(outcome)
}
