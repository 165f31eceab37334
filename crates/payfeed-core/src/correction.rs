//! The correction workflow.
//!
//! A correction is applied in two parts: the ledger appends the audit
//! entry, and the caller receives a *new* record with the field
//! overwritten. The original record is never mutated, so the audit trail
//! cannot alias the working copy. Re-running the validator on the returned
//! record is the only way to confirm the error no longer reproduces.

use payfeed_ledger::Ledger;
use payfeed_model::{Correction, EmployeeRecord, ValidationError};

/// Apply a correction for `error` to `record`.
///
/// Returns the corrected record and the appended audit entry. The ledger
/// retains every prior correction for the same error id.
pub fn apply_correction(
    ledger: &mut Ledger,
    record: &EmployeeRecord,
    error: &ValidationError,
    corrected_value: &str,
    author: Option<&str>,
    note: Option<&str>,
) -> (EmployeeRecord, Correction) {
    let correction =
        ledger.apply_correction(&error.id, &error.value, corrected_value, author, note);
    let corrected = record.with_field(&error.field, corrected_value);
    (corrected, correction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use payfeed_model::ErrorKind;
    use payfeed_validate::validate_record;

    #[test]
    fn correction_yields_new_record_and_audit_entry() {
        let mut record = EmployeeRecord::new();
        record.set("employee_id", "E1");
        record.set("home_zip", "294");
        let error = ValidationError::new(
            "E1",
            1,
            "home_zip",
            "294",
            ErrorKind::InvalidFormat,
            "home_zip must be a 5-digit ZIP or ZIP+4",
        );

        let mut ledger = Ledger::new();
        let (corrected, entry) =
            apply_correction(&mut ledger, &record, &error, "29410", Some("admin"), None);

        assert_eq!(record.get("home_zip"), "294", "original untouched");
        assert_eq!(corrected.get("home_zip"), "29410");
        assert_eq!(entry.error_id, error.id);
        assert_eq!(ledger.corrections_for(&error.id).len(), 1);

        // Re-validation is the only confirmation the error is gone.
        let errors = validate_record(&corrected, 1, None);
        assert!(errors.iter().all(|e| e.field != "home_zip" || e.kind != ErrorKind::InvalidFormat));
    }
}
