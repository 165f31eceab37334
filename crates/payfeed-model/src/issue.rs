use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

static NEXT_ISSUE_ID: AtomicU64 = AtomicU64::new(1);

fn next_id(prefix: &str) -> String {
    let n = NEXT_ISSUE_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{n:06}")
}

/// Error taxonomy for the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Row-level structural failure in the parser. Non-fatal; the batch
    /// continues with the next row.
    ParseError,
    RequiredFieldMissing,
    InvalidFormat,
    /// Cross-field business rule violation.
    BusinessLogicError,
}

/// A single validation finding for one field of one row.
///
/// Errors are pure query outputs: producing one never mutates the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub id: String,
    /// Employee id when present, else the tracking sequence, else a
    /// synthetic `row_<n>` fallback.
    pub row_id: String,
    /// 1-based row number within the batch.
    pub row_number: usize,
    pub field: String,
    /// 0-based index of the field in the original header order, when the
    /// header order was captured and contains the field.
    pub column_index: Option<usize>,
    /// The offending value, verbatim.
    pub value: String,
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: Option<String>,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
}

impl ValidationError {
    pub fn new(
        row_id: impl Into<String>,
        row_number: usize,
        field: impl Into<String>,
        value: impl Into<String>,
        kind: ErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: next_id("err"),
            row_id: row_id.into(),
            row_number,
            field: field.into(),
            column_index: None,
            value: value.into(),
            kind,
            message: message.into(),
            suggestion: None,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_column_index(mut self, column_index: Option<usize>) -> Self {
        self.column_index = column_index;
        self
    }
}

/// A non-fatal rewrite notice from the messy-data normalizer.
///
/// Only the normalizer produces warnings; the validator never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub id: String,
    pub row_id: String,
    pub row_number: usize,
    pub field: String,
    /// Value before the normalizer rewrote it.
    pub original_value: String,
    pub message: String,
    pub timestamp: String,
}

impl ValidationWarning {
    pub fn new(
        row_id: impl Into<String>,
        row_number: usize,
        field: impl Into<String>,
        original_value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: next_id("wrn"),
            row_id: row_id.into(),
            row_number,
            field: field.into(),
            original_value: original_value.into(),
            message: message.into(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// A structural failure for one row during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based row number within the batch.
    pub row_number: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = ValidationError::new("E1", 1, "dob", "x", ErrorKind::InvalidFormat, "bad");
        let b = ValidationError::new("E1", 1, "dob", "x", ErrorKind::InvalidFormat, "bad");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("err-"));
        let w = ValidationWarning::new("E1", 1, "full_name", "Jane Doe", "split");
        assert!(w.id.starts_with("wrn-"));
    }

    #[test]
    fn error_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorKind::RequiredFieldMissing).expect("serialize");
        assert_eq!(json, "\"REQUIRED_FIELD_MISSING\"");
    }
}
