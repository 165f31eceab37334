//! Batch parsing and record-type discrimination.

use std::collections::BTreeMap;
use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use payfeed_model::fields;
use payfeed_model::{DetailRecord, FeedError, ParseError, Result, ValidationWarning};

use crate::header::{normalize_cell, normalize_header};
use crate::normalize::normalize_row;

/// A detail row paired with its position in the batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDetail {
    /// 1-based data-row number (the header row is not counted).
    pub row_number: usize,
    pub record: DetailRecord,
}

/// Everything produced by one parse of a batch file.
#[derive(Debug, Clone, Default)]
pub struct ParsedBatch {
    /// Detail rows in input order, already normalized. Header and footer
    /// rows are classified and skipped, never surfaced here.
    pub details: Vec<ParsedDetail>,
    /// Normalizer rewrite notices, in row order.
    pub warnings: Vec<ValidationWarning>,
    /// Per-row structural failures. The batch always runs to completion;
    /// a bad row costs only that row.
    pub parse_errors: Vec<ParseError>,
    /// Normalized header names in their original column order, used later
    /// to resolve column indexes on validation errors.
    pub header_fields: Vec<String>,
}

/// Parse a whole batch held in memory.
pub fn parse_batch(text: &str) -> Result<ParsedBatch> {
    parse_batch_from_reader(text.as_bytes())
}

/// Parse a batch incrementally from a reader.
///
/// Rows are consumed one at a time; memory is bounded by a single row plus
/// the accumulated detail records. Row numbers are 1-based and count data
/// rows (the header row is row 0 of the file but is never numbered).
///
/// # Errors
///
/// Returns [`FeedError::UnreadableInput`] only when the header row itself
/// cannot be read. Every later failure is recorded as a [`ParseError`] and
/// parsing continues.
pub fn parse_batch_from_reader<R: Read>(input: R) -> Result<ParsedBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(error)) => return Err(FeedError::UnreadableInput(error.to_string())),
        None => return Ok(ParsedBatch::default()),
    };
    let header_fields: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut batch = ParsedBatch {
        header_fields,
        ..ParsedBatch::default()
    };

    let mut row_number = 0usize;
    for record in records {
        row_number += 1;
        let record = match record {
            Ok(record) => record,
            Err(error) => {
                batch.parse_errors.push(ParseError {
                    row_number,
                    message: error.to_string(),
                });
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row: BTreeMap<String, String> = BTreeMap::new();
        for (idx, name) in batch.header_fields.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let value = record.get(idx).unwrap_or("");
            row.insert(name.clone(), normalize_cell(value));
        }
        let record_type = row
            .get(fields::RECORD_TYPE)
            .map(String::as_str)
            .unwrap_or("");
        if record_type != fields::RECORD_TYPE_DETAIL {
            // Header/footer/unknown rows are parsed but not employee data.
            debug!(row_number, record_type, "skipping non-detail row");
            continue;
        }
        normalize_row(&mut row, row_number, &mut batch.warnings);
        batch.details.push(ParsedDetail {
            row_number,
            record: DetailRecord::from_row(row),
        });
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_rows_by_discriminator() {
        let text = "\
Record Type,Employee ID,First Name,Last Name
H,,,
D,E1,Ada,Lovelace
F,,,
D,E2,Grace,Hopper
";
        let batch = parse_batch(text).expect("parse");
        assert_eq!(batch.details.len(), 2);
        assert_eq!(batch.details[0].row_number, 2);
        assert_eq!(batch.details[0].record.employee.get("employee_id"), "E1");
        assert_eq!(batch.details[1].row_number, 4);
        assert_eq!(batch.details[1].record.employee.get("last_name"), "Hopper");
        assert!(batch.parse_errors.is_empty());
    }

    #[test]
    fn header_order_is_captured() {
        let text = "Record Type,Employee ID,DOB\nD,E1,1990-01-01\n";
        let batch = parse_batch(text).expect("parse");
        assert_eq!(
            batch.header_fields,
            vec!["record_type", "employee_id", "dob"]
        );
    }

    #[test]
    fn short_rows_default_missing_fields_to_empty() {
        let text = "Record Type,Employee ID,Company ID\nD,E1\n";
        let batch = parse_batch(text).expect("parse");
        assert_eq!(batch.details.len(), 1);
        assert_eq!(batch.details[0].record.company_id, "");
    }

    #[test]
    fn bad_row_is_skipped_without_aborting() {
        // Invalid UTF-8 fails that record only; the next row still parses.
        let mut bytes = b"Record Type,Employee ID\nD,".to_vec();
        bytes.extend_from_slice(&[0xFF, 0xFE]);
        bytes.extend_from_slice(b"\nD,E2\n");
        let batch = parse_batch_from_reader(bytes.as_slice()).expect("parse");
        assert_eq!(batch.parse_errors.len(), 1);
        assert_eq!(batch.parse_errors[0].row_number, 1);
        assert_eq!(batch.details.len(), 1);
        assert_eq!(batch.details[0].record.employee.get("employee_id"), "E2");
    }

    #[test]
    fn missing_discriminator_is_a_silent_skip() {
        let text = "Employee ID,First Name\nE1,Ada\n";
        let batch = parse_batch(text).expect("parse");
        assert!(batch.details.is_empty());
        assert!(batch.parse_errors.is_empty());
    }

    #[test]
    fn empty_input_yields_empty_batch() {
        let batch = parse_batch("").expect("parse");
        assert!(batch.details.is_empty());
        assert!(batch.header_fields.is_empty());
    }
}
