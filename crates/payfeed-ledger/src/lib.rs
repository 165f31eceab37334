//! Append-only audit log for validation errors and applied corrections.
//!
//! The ledger records what validation found and what corrections were
//! applied, addressable by error id. It never touches employee records:
//! writing a corrected value back onto the live record, and re-running the
//! validator to confirm the error no longer reproduces, are both the
//! caller's responsibility.

pub mod store;

use serde::{Deserialize, Serialize};
use tracing::debug;

use payfeed_model::{Correction, ValidationError, ValidationWarning};

pub use store::{KeyValueStore, MemoryStore};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationWarning>,
    corrections: Vec<Correction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch of validation errors. Order is preserved.
    pub fn record_errors(&mut self, batch: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(batch);
    }

    /// Append a batch of normalizer warnings. Order is preserved.
    pub fn record_warnings(&mut self, batch: impl IntoIterator<Item = ValidationWarning>) {
        self.warnings.extend(batch);
    }

    /// Append a correction for an error. Prior corrections for the same
    /// error id are retained untouched; history is never rewritten.
    pub fn apply_correction(
        &mut self,
        error_id: &str,
        original_value: &str,
        corrected_value: &str,
        author: Option<&str>,
        note: Option<&str>,
    ) -> Correction {
        let mut correction = Correction::new(error_id, original_value, corrected_value);
        if let Some(author) = author {
            correction = correction.with_author(author);
        }
        if let Some(note) = note {
            correction = correction.with_note(note);
        }
        debug!(error_id, "correction appended");
        self.corrections.push(correction.clone());
        correction
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn error_by_id(&self, error_id: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.id == error_id)
    }

    /// Full correction history for one error, oldest first.
    pub fn corrections_for(&self, error_id: &str) -> Vec<&Correction> {
        self.corrections
            .iter()
            .filter(|c| c.error_id == error_id)
            .collect()
    }

    /// The authoritative correction for reporting: the latest by insertion
    /// order.
    pub fn latest_correction(&self, error_id: &str) -> Option<&Correction> {
        self.corrections
            .iter()
            .rev()
            .find(|c| c.error_id == error_id)
    }

    /// Explicit reset: the only way errors and warnings are ever cleared.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.warnings.clear();
        self.corrections.clear();
    }

    /// Persist a JSON snapshot under `key`.
    pub fn save<S: KeyValueStore>(&self, store: &mut S, key: &str) -> payfeed_model::Result<()> {
        let json = serde_json::to_string(self)
            .map_err(|e| payfeed_model::FeedError::Message(e.to_string()))?;
        store.set(key, &json);
        Ok(())
    }

    /// Load a previously saved snapshot, or an empty ledger when the key
    /// is absent.
    pub fn load<S: KeyValueStore>(store: &S, key: &str) -> payfeed_model::Result<Self> {
        match store.get(key) {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| payfeed_model::FeedError::Message(e.to_string())),
            None => Ok(Self::new()),
        }
    }
}
