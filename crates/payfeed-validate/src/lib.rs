pub mod compliance;
pub mod formats;
pub mod rules;

pub use compliance::{E_VERIFY_AUTHORIZED, I9_COMPLETED, is_compliant, skip_reason};
pub use rules::{
    FLSA_STATUSES, PAY_FREQUENCIES, SPLIT_TOTAL_TOLERANCE, validate_detail, validate_record,
};
