use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One applied correction, keyed to the validation error it addresses.
///
/// Corrections are append-only: multiple corrections may target the same
/// error id, and the latest one by insertion order is authoritative for
/// reporting. Writing the corrected value back onto the live record is the
/// caller's job, never the ledger's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// Foreign key into the error log.
    pub error_id: String,
    pub original_value: String,
    pub corrected_value: String,
    pub author: Option<String>,
    /// RFC 3339 creation timestamp.
    pub timestamp: String,
    pub note: Option<String>,
}

impl Correction {
    pub fn new(
        error_id: impl Into<String>,
        original_value: impl Into<String>,
        corrected_value: impl Into<String>,
    ) -> Self {
        Self {
            error_id: error_id.into(),
            original_value: original_value.into(),
            corrected_value: corrected_value.into(),
            author: None,
            timestamp: Utc::now().to_rfc3339(),
            note: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
