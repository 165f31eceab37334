use std::collections::BTreeMap;

use payfeed_model::fields;
use payfeed_model::{EmployeeRecord, ProviderMapping, TransformKind};
use payfeed_transform::{adp_mapping, apply_mapping, gusto_mapping};

fn sample_record() -> EmployeeRecord {
    let mut record = EmployeeRecord::new();
    for (field, value) in [
        (fields::EMPLOYEE_ID, "E100"),
        (fields::FIRST_NAME, "Ada"),
        (fields::LAST_NAME, "Lovelace"),
        (fields::SSN, "123-45-6789"),
        (fields::DOB, "1990-04-23"),
        (fields::EMAIL, "ada@example.com"),
        (fields::PHONE, "(843) 555-0101"),
        (fields::HOME_STREET, "10 Analytical Way"),
        (fields::HOME_CITY, "Hanahan"),
        (fields::HOME_STATE, "sc"),
        (fields::HOME_ZIP, "29410"),
        (fields::HIRE_DATE, "2026-09-01"),
        (fields::ANNUAL_SALARY, "120000"),
        (fields::PAY_FREQUENCY, "Bi-weekly"),
        (fields::FLSA_STATUS, "Exempt"),
        (fields::FEDERAL_FILING_STATUS, "Single"),
        (fields::DD1_ACCOUNT_TYPE, "Checking"),
    ] {
        record.set(field, value);
    }
    record
}

#[test]
fn declared_pairs_copy_or_transform() {
    let output = apply_mapping(&sample_record(), &adp_mapping());
    assert_eq!(output.get("File Number"), Some("E100"));
    assert_eq!(output.get("Legal First Name"), Some("Ada"));
    assert_eq!(output.get("Birth Date"), Some("04/23/1990"));
    assert_eq!(output.get("Personal Phone"), Some("8435550101"));
    assert_eq!(output.get("State"), Some("SC"));
    assert_eq!(output.get("FLSA Code"), Some("E"));
    assert_eq!(output.get("Federal Filing Status"), Some("S"));
    assert_eq!(output.get("Account Type 1"), Some("C"));
}

#[test]
fn per_paycheck_rate_for_biweekly_salary() {
    // 120000 / 26, rounded to 2 decimals.
    let output = apply_mapping(&sample_record(), &adp_mapping());
    assert_eq!(output.get("Regular Pay Rate"), Some("4615.38"));
    let output = apply_mapping(&sample_record(), &gusto_mapping());
    assert_eq!(output.get("pay_per_period"), Some("4615.38"));
}

#[test]
fn orphan_transforms_synthesize_derived_fields() {
    let output = apply_mapping(&sample_record(), &adp_mapping());
    assert_eq!(output.get("Payroll Name"), Some("Ada Lovelace"));
    assert_eq!(output.get("Rate Type"), Some("Salary"));
}

#[test]
fn missing_source_fields_yield_safe_defaults() {
    let output = apply_mapping(&EmployeeRecord::new(), &adp_mapping());
    assert_eq!(output.get("File Number"), Some(""));
    assert_eq!(output.get("Annual Salary"), Some("0.00"));
    assert_eq!(output.get("Regular Pay Rate"), Some("0.00"));
    assert_eq!(output.get("Payroll Name"), Some(""));
}

#[test]
fn output_keys_are_exactly_the_declared_targets() {
    let mapping = gusto_mapping();
    let output = apply_mapping(&sample_record(), &mapping);
    let expected = mapping.field_maps.len()
        + mapping
            .transforms
            .keys()
            .filter(|target| mapping.field_maps.iter().all(|m| &m.target != *target))
            .count();
    assert_eq!(output.len(), expected);
    // Declared pairs come first, in declaration order.
    assert_eq!(output.keys().next(), Some("employee_number"));
}

#[test]
fn transform_wins_over_raw_copy() {
    let mapping = ProviderMapping::new("test")
        .map(fields::DOB, "birth")
        .transform(
            "birth",
            TransformKind::Constant {
                value: "fixed".to_string(),
            },
        );
    let output = apply_mapping(&sample_record(), &mapping);
    assert_eq!(output.get("birth"), Some("fixed"));
}

#[test]
fn remap_falls_back_to_snake_case() {
    let mapping = ProviderMapping::new("test")
        .map(fields::FEDERAL_FILING_STATUS, "status")
        .transform(
            "status",
            TransformKind::Remap {
                table: BTreeMap::new(),
            },
        );
    let mut record = sample_record();
    record.set(fields::FEDERAL_FILING_STATUS, "Head of Household");
    let output = apply_mapping(&record, &mapping);
    assert_eq!(output.get("status"), Some("head_of_household"));
}

#[test]
fn apply_mapping_is_pure() {
    let record = sample_record();
    let mapping = adp_mapping();
    let first = apply_mapping(&record, &mapping);
    let second = apply_mapping(&record, &mapping);
    assert_eq!(first, second);
}

#[test]
fn admin_mapping_round_trips_through_json() {
    let mapping = gusto_mapping();
    let json = serde_json::to_string_pretty(&mapping).expect("serialize");
    let loaded: ProviderMapping = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(loaded, mapping);
    let record = sample_record();
    assert_eq!(apply_mapping(&record, &loaded), apply_mapping(&record, &mapping));
}
