//! Built-in provider mappings.
//!
//! Two output schemas ship by default: an ADP-style import layout with
//! display-cased headers and coded enumerations, and a Gusto-style layout
//! with snake_case keys. Either can be replaced wholesale by an
//! admin-supplied [`ProviderMapping`] loaded from JSON.

use std::collections::BTreeMap;

use payfeed_model::fields;
use payfeed_model::{ProviderMapping, TransformKind};

pub const PROVIDER_ADP: &str = "adp";
pub const PROVIDER_GUSTO: &str = "gusto";

/// All built-in mappings, in a stable order.
pub fn default_mappings() -> Vec<ProviderMapping> {
    vec![adp_mapping(), gusto_mapping()]
}

/// Built-in mapping for a provider name, if one exists.
pub fn mapping_for(provider: &str) -> Option<ProviderMapping> {
    match provider {
        PROVIDER_ADP => Some(adp_mapping()),
        PROVIDER_GUSTO => Some(gusto_mapping()),
        _ => None,
    }
}

fn remap(pairs: &[(&str, &str)]) -> TransformKind {
    TransformKind::Remap {
        table: pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// ADP-style import schema: display-cased headers, coded enums, MM/DD/YYYY
/// dates, and a derived per-period pay rate.
pub fn adp_mapping() -> ProviderMapping {
    ProviderMapping::new(PROVIDER_ADP)
        .map(fields::EMPLOYEE_ID, "File Number")
        .map(fields::FIRST_NAME, "Legal First Name")
        .map(fields::MIDDLE_NAME, "Middle Name")
        .map(fields::LAST_NAME, "Legal Last Name")
        .map(fields::SSN, "Tax ID (SSN)")
        .map(fields::DOB, "Birth Date")
        .map(fields::GENDER, "Gender")
        .map(fields::EMAIL, "Personal Email")
        .map(fields::PHONE, "Personal Phone")
        .map(fields::HOME_STREET, "Address Line 1")
        .map(fields::HOME_STREET2, "Address Line 2")
        .map(fields::HOME_CITY, "City")
        .map(fields::HOME_STATE, "State")
        .map(fields::HOME_ZIP, "Zip Code")
        .map(fields::HIRE_DATE, "Hire Date")
        .map(fields::EMPLOYMENT_TYPE, "Worker Category")
        .map(fields::JOB_TITLE, "Job Title Description")
        .map(fields::DEPARTMENT, "Home Department")
        .map(fields::WORK_LOCATION, "Work Location")
        .map(fields::ANNUAL_SALARY, "Annual Salary")
        .map(fields::ANNUAL_SALARY, "Regular Pay Rate")
        .map(fields::PAY_FREQUENCY, "Pay Frequency")
        .map(fields::FLSA_STATUS, "FLSA Code")
        .map(fields::FEDERAL_FILING_STATUS, "Federal Filing Status")
        .map(fields::FEDERAL_ALLOWANCES, "Federal Allowances")
        .map(fields::FEDERAL_EXTRA_WITHHOLDING, "Federal Additional Amount")
        .map(fields::STATE_FILING_STATUS, "State Filing Status")
        .map(fields::SUI_STATE, "SUI/SDI State")
        .map(fields::DD1_ROUTING_NUMBER, "Routing Number 1")
        .map(fields::DD1_ACCOUNT_NUMBER, "Account Number 1")
        .map(fields::DD1_ACCOUNT_TYPE, "Account Type 1")
        .map(fields::DD1_SPLIT_VALUE, "Deposit Value 1")
        .map(fields::DD2_ROUTING_NUMBER, "Routing Number 2")
        .map(fields::DD2_ACCOUNT_NUMBER, "Account Number 2")
        .map(fields::DD2_ACCOUNT_TYPE, "Account Type 2")
        .map(fields::DD2_SPLIT_VALUE, "Deposit Value 2")
        .map(fields::EEO_CATEGORY, "EEO Job Category")
        .map(fields::ETHNICITY, "Race/Ethnicity")
        .transform("Birth Date", TransformKind::DateMdy)
        .transform("Hire Date", TransformKind::DateMdy)
        .transform("Personal Phone", TransformKind::DigitsOnly)
        .transform("State", TransformKind::Uppercase)
        .transform("SUI/SDI State", TransformKind::Uppercase)
        .transform("Annual Salary", TransformKind::MoneyOrZero)
        .transform("Regular Pay Rate", TransformKind::PayPerPeriod)
        .transform("Federal Additional Amount", TransformKind::MoneyOrZero)
        .transform(
            "Worker Category",
            remap(&[
                ("Full-time", "FT"),
                ("Part-time", "PT"),
                ("Temporary", "TMP"),
                ("Contractor", "CON"),
            ]),
        )
        .transform(
            "Pay Frequency",
            remap(&[
                ("Weekly", "W"),
                ("Bi-weekly", "B"),
                ("Semi-monthly", "S"),
                ("Monthly", "M"),
            ]),
        )
        .transform("FLSA Code", remap(&[("Exempt", "E"), ("Non-Exempt", "N")]))
        .transform(
            "Federal Filing Status",
            remap(&[
                ("Single", "S"),
                ("Married", "M"),
                ("Married Filing Jointly", "M"),
                ("Married Filing Separately", "MS"),
                ("Head of Household", "H"),
            ]),
        )
        .transform("Account Type 1", remap(&[("Checking", "C"), ("Savings", "S")]))
        .transform("Account Type 2", remap(&[("Checking", "C"), ("Savings", "S")]))
        // Derived fields with no source column.
        .transform("Payroll Name", TransformKind::FullName)
        .transform(
            "Rate Type",
            TransformKind::Constant {
                value: "Salary".to_string(),
            },
        )
}

/// Gusto-style schema: snake_case keys, ISO dates, lowercased enums, and
/// derived per-period and hourly rates.
pub fn gusto_mapping() -> ProviderMapping {
    ProviderMapping::new(PROVIDER_GUSTO)
        .map(fields::EMPLOYEE_ID, "employee_number")
        .map(fields::FIRST_NAME, "first_name")
        .map(fields::MIDDLE_NAME, "middle_initial")
        .map(fields::LAST_NAME, "last_name")
        .map(fields::SSN, "ssn")
        .map(fields::DOB, "date_of_birth")
        .map(fields::EMAIL, "email")
        .map(fields::PHONE, "phone")
        .map(fields::HOME_STREET, "home_address_street_1")
        .map(fields::HOME_STREET2, "home_address_street_2")
        .map(fields::HOME_CITY, "home_address_city")
        .map(fields::HOME_STATE, "home_address_state")
        .map(fields::HOME_ZIP, "home_address_zip")
        .map(fields::HIRE_DATE, "start_date")
        .map(fields::EMPLOYMENT_TYPE, "employment_type")
        .map(fields::JOB_TITLE, "title")
        .map(fields::DEPARTMENT, "department")
        .map(fields::WORK_STATE, "work_state")
        .map(fields::ANNUAL_SALARY, "annual_salary")
        .map(fields::PAY_FREQUENCY, "pay_frequency")
        .map(fields::FLSA_STATUS, "flsa_status")
        .map(fields::FEDERAL_FILING_STATUS, "federal_filing_status")
        .map(fields::FEDERAL_ALLOWANCES, "federal_withholding_allowance")
        .map(fields::STATE_FILING_STATUS, "state_filing_status")
        .map(fields::DD1_ROUTING_NUMBER, "bank_routing_number")
        .map(fields::DD1_ACCOUNT_NUMBER, "bank_account_number")
        .map(fields::DD1_ACCOUNT_TYPE, "bank_account_type")
        .map(fields::DD1_SPLIT_TYPE, "split_type")
        .map(fields::DD1_SPLIT_VALUE, "split_amount")
        .map(fields::DD2_ROUTING_NUMBER, "bank_2_routing_number")
        .map(fields::DD2_ACCOUNT_NUMBER, "bank_2_account_number")
        .map(fields::DD2_ACCOUNT_TYPE, "bank_2_account_type")
        .map(fields::DD2_SPLIT_VALUE, "bank_2_split_amount")
        .transform("phone", TransformKind::DigitsOnly)
        .transform("home_address_state", TransformKind::Uppercase)
        .transform("work_state", TransformKind::Uppercase)
        .transform("annual_salary", TransformKind::MoneyOrZero)
        .transform("employment_type", remap(&[("Full-time", "full_time"), ("Part-time", "part_time")]))
        .transform(
            "pay_frequency",
            remap(&[
                ("Weekly", "weekly"),
                ("Bi-weekly", "biweekly"),
                ("Semi-monthly", "semimonthly"),
                ("Monthly", "monthly"),
            ]),
        )
        .transform("flsa_status", remap(&[("Exempt", "exempt"), ("Non-Exempt", "nonexempt")]))
        .transform(
            "federal_filing_status",
            remap(&[
                ("Single", "single"),
                ("Married", "married"),
                ("Married Filing Jointly", "married"),
                ("Head of Household", "head_of_household"),
            ]),
        )
        .transform("bank_account_type", remap(&[("Checking", "checking"), ("Savings", "savings")]))
        .transform("bank_2_account_type", remap(&[("Checking", "checking"), ("Savings", "savings")]))
        // Derived fields with no source column.
        .transform("display_name", TransformKind::FullName)
        .transform("pay_per_period", TransformKind::PayPerPeriod)
        .transform("hourly_rate_equivalent", TransformKind::HourlyFromAnnual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_providers_resolve_by_name() {
        assert!(mapping_for("adp").is_some());
        assert!(mapping_for("gusto").is_some());
        assert!(mapping_for("quickbooks").is_none());
        assert_eq!(default_mappings().len(), 2);
    }

    #[test]
    fn adp_targets_are_unique_except_declared_pairs() {
        let mapping = adp_mapping();
        assert!(mapping.field_maps.len() >= 30);
        assert!(mapping.transforms.contains_key("Payroll Name"));
    }
}
