pub mod correction;
pub mod error;
pub mod fields;
pub mod issue;
pub mod mapping;
pub mod record;

pub use correction::Correction;
pub use error::{FeedError, Result};
pub use issue::{ErrorKind, ParseError, ValidationError, ValidationWarning};
pub use mapping::{FieldMap, ProviderMapping, TransformKind};
pub use record::{DetailRecord, EmployeeRecord};

/// Resolve the row identifier used on errors and warnings: employee id,
/// else the tracking sequence, else a synthetic `row_<n>` fallback.
pub fn resolve_row_id(employee_id: &str, record_sequence: &str, row_number: usize) -> String {
    let employee_id = employee_id.trim();
    if !employee_id.is_empty() {
        return employee_id.to_string();
    }
    let sequence = record_sequence.trim();
    if !sequence.is_empty() {
        return sequence.to_string();
    }
    format!("row_{row_number}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_prefers_employee_id() {
        assert_eq!(resolve_row_id("E7", "3", 5), "E7");
        assert_eq!(resolve_row_id("  ", "3", 5), "3");
        assert_eq!(resolve_row_id("", "", 5), "row_5");
    }
}
