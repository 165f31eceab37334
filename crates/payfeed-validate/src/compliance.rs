//! The I-9 / E-Verify compliance gate.
//!
//! A pure predicate over two status fields, run after validation but
//! independent of its outcome: a record can carry validation errors and
//! still pass the gate, or validate cleanly and be skipped here.

use payfeed_model::EmployeeRecord;
use payfeed_model::fields;

/// `i9_status` value required for transformation eligibility.
pub const I9_COMPLETED: &str = "Completed";

/// `e_verify_status` value required for transformation eligibility.
pub const E_VERIFY_AUTHORIZED: &str = "Authorized";

/// True only when I-9 is completed and E-Verify is authorized. Unset or
/// unknown values fail the gate.
pub fn is_compliant(record: &EmployeeRecord) -> bool {
    record.get(fields::I9_STATUS) == I9_COMPLETED
        && record.get(fields::E_VERIFY_STATUS) == E_VERIFY_AUTHORIZED
}

/// Human-readable reason a record was skipped, naming both raw status
/// values so the consumer need not re-derive the rule.
pub fn skip_reason(record: &EmployeeRecord) -> String {
    format!(
        "not compliant: i9_status=\"{}\", e_verify_status=\"{}\" (requires i9_status=\"{I9_COMPLETED}\" and e_verify_status=\"{E_VERIFY_AUTHORIZED}\")",
        record.get(fields::I9_STATUS),
        record.get(fields::E_VERIFY_STATUS),
    )
}
