//! Canonical field names for the employee schema.
//!
//! Field names are the normalized (snake_case) header names produced by the
//! parser. The record treats every field as an opaque string; required-ness,
//! formats, and enumerations are enforced by `payfeed-validate` only.

// Identity
pub const EMPLOYEE_ID: &str = "employee_id";
pub const FIRST_NAME: &str = "first_name";
pub const MIDDLE_NAME: &str = "middle_name";
pub const LAST_NAME: &str = "last_name";
pub const SSN: &str = "ssn";
pub const DOB: &str = "dob";
pub const GENDER: &str = "gender";
pub const MARITAL_STATUS: &str = "marital_status";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

// Home address
pub const HOME_STREET: &str = "home_street";
pub const HOME_STREET2: &str = "home_street2";
pub const HOME_CITY: &str = "home_city";
pub const HOME_STATE: &str = "home_state";
pub const HOME_ZIP: &str = "home_zip";

// Work address / location
pub const WORK_STREET: &str = "work_street";
pub const WORK_CITY: &str = "work_city";
pub const WORK_STATE: &str = "work_state";
pub const WORK_ZIP: &str = "work_zip";
pub const WORK_LOCATION: &str = "work_location";

// Employment
pub const HIRE_DATE: &str = "hire_date";
pub const START_DATE: &str = "start_date";
pub const TERMINATION_DATE: &str = "termination_date";
pub const EMPLOYMENT_TYPE: &str = "employment_type";
pub const EMPLOYEE_STATUS: &str = "employee_status";
pub const JOB_TITLE: &str = "job_title";
pub const DEPARTMENT: &str = "department";
pub const MANAGER_ID: &str = "manager_id";

// Compensation
pub const ANNUAL_SALARY: &str = "annual_salary";
pub const HOURLY_RATE: &str = "hourly_rate";
pub const PAY_FREQUENCY: &str = "pay_frequency";
pub const PAY_TYPE: &str = "pay_type";
pub const FLSA_STATUS: &str = "flsa_status";

// Federal withholding
pub const FEDERAL_FILING_STATUS: &str = "federal_filing_status";
pub const FEDERAL_ALLOWANCES: &str = "federal_allowances";
pub const FEDERAL_EXTRA_WITHHOLDING: &str = "federal_extra_withholding";

// State/local withholding
pub const STATE_FILING_STATUS: &str = "state_filing_status";
pub const STATE_ALLOWANCES: &str = "state_allowances";
pub const STATE_EXTRA_WITHHOLDING: &str = "state_extra_withholding";
pub const SUI_STATE: &str = "sui_state";
pub const LOCAL_TAX_CODE: &str = "local_tax_code";
pub const LOCAL_TAX_RATE: &str = "local_tax_rate";

// Compliance
pub const I9_STATUS: &str = "i9_status";
pub const E_VERIFY_STATUS: &str = "e_verify_status";

// Direct deposit, primary
pub const DD1_ROUTING_NUMBER: &str = "dd1_routing_number";
pub const DD1_ACCOUNT_NUMBER: &str = "dd1_account_number";
pub const DD1_ACCOUNT_TYPE: &str = "dd1_account_type";
pub const DD1_SPLIT_TYPE: &str = "dd1_split_type";
pub const DD1_SPLIT_VALUE: &str = "dd1_split_value";

// Direct deposit, secondary (optional as a group)
pub const DD2_ROUTING_NUMBER: &str = "dd2_routing_number";
pub const DD2_ACCOUNT_NUMBER: &str = "dd2_account_number";
pub const DD2_ACCOUNT_TYPE: &str = "dd2_account_type";
pub const DD2_SPLIT_TYPE: &str = "dd2_split_type";
pub const DD2_SPLIT_VALUE: &str = "dd2_split_value";

// Union / benefits / retirement / garnishment
pub const UNION_CODE: &str = "union_code";
pub const UNION_DUES: &str = "union_dues";
pub const BENEFITS_CLASS: &str = "benefits_class";
pub const BENEFITS_START_DATE: &str = "benefits_start_date";
pub const RETIREMENT_PLAN: &str = "retirement_plan";
pub const RETIREMENT_PCT: &str = "retirement_pct";
pub const GARNISHMENT_FLAG: &str = "garnishment_flag";
pub const GARNISHMENT_DETAILS: &str = "garnishment_details";

// EEO
pub const EEO_CATEGORY: &str = "eeo_category";
pub const ETHNICITY: &str = "ethnicity";
pub const DISABILITY_STATUS: &str = "disability_status";
pub const VETERAN_STATUS: &str = "veteran_status";

// Batch tracking (DetailRecord only, stripped from the canonical record)
pub const RECORD_TYPE: &str = "record_type";
pub const RECORD_SEQUENCE: &str = "record_sequence";
pub const COMPANY_ID: &str = "company_id";

// Combined "messy" input fields the normalizer splits and removes
pub const FULL_NAME: &str = "full_name";
pub const HOME_ADDRESS: &str = "home_address";
pub const WORK_ADDRESS: &str = "work_address";

/// Record-type discriminator values.
pub const RECORD_TYPE_HEADER: &str = "H";
pub const RECORD_TYPE_DETAIL: &str = "D";
pub const RECORD_TYPE_FOOTER: &str = "F";

/// Fields that must be non-empty after normalization.
pub const REQUIRED_FIELDS: &[&str] = &[
    EMPLOYEE_ID,
    FIRST_NAME,
    LAST_NAME,
    SSN,
    DOB,
    EMAIL,
    PHONE,
    HOME_STREET,
    HOME_CITY,
    HOME_STATE,
    HOME_ZIP,
    HIRE_DATE,
    EMPLOYMENT_TYPE,
    JOB_TITLE,
    DEPARTMENT,
    ANNUAL_SALARY,
    PAY_FREQUENCY,
    FLSA_STATUS,
    FEDERAL_FILING_STATUS,
    I9_STATUS,
    E_VERIFY_STATUS,
    DD1_ROUTING_NUMBER,
    DD1_ACCOUNT_NUMBER,
    DD1_ACCOUNT_TYPE,
    DD1_SPLIT_TYPE,
    DD1_SPLIT_VALUE,
];

/// Tracking fields stripped when a detail row is promoted to a canonical
/// employee record.
pub const TRACKING_FIELDS: &[&str] = &[RECORD_TYPE, RECORD_SEQUENCE, COMPANY_ID];

/// `#####` or `#####-####`. Shared by the normalizer (trailing-ZIP address
/// detection) and the validator's ZIP rule.
pub fn is_zip_code(value: &str) -> bool {
    let bytes = value.as_bytes();
    match bytes.len() {
        5 => bytes.iter().all(u8::is_ascii_digit),
        10 => {
            bytes[..5].iter().all(u8::is_ascii_digit)
                && bytes[5] == b'-'
                && bytes[6..].iter().all(u8::is_ascii_digit)
        }
        _ => false,
    }
}
