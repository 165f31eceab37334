//! The record rule engine.
//!
//! One rule set serves both entry points: [`validate_record`] for a plain
//! canonical record and [`validate_detail`] which prepends batch-tracking
//! checks. Rules never short-circuit; every applicable rule runs and the
//! resulting errors keep rule-declaration order.

use tracing::debug;

use payfeed_model::fields;
use payfeed_model::{DetailRecord, EmployeeRecord, ErrorKind, ValidationError, resolve_row_id};

use crate::formats::{
    is_routing_number, is_state_code, is_valid_date, is_valid_email, is_valid_ssn, is_zip_code,
    parse_numeric,
};

/// Valid pay frequencies, in canonical form.
pub const PAY_FREQUENCIES: &[&str] = &["Weekly", "Bi-weekly", "Semi-monthly", "Monthly"];

/// Valid FLSA statuses.
pub const FLSA_STATUSES: &[&str] = &["Exempt", "Non-Exempt"];

/// Absolute slack allowed when two percent splits must total 100.
pub const SPLIT_TOTAL_TOLERANCE: f64 = 0.01;

/// Date fields validated whenever non-empty. The first two are also
/// required, so a blank value surfaces as a missing-field error instead.
const DATE_FIELDS: &[&str] = &[
    fields::DOB,
    fields::HIRE_DATE,
    fields::START_DATE,
    fields::TERMINATION_DATE,
    fields::BENEFITS_START_DATE,
];

/// Numeric fields validated whenever non-empty.
const NUMERIC_FIELDS: &[&str] = &[
    fields::ANNUAL_SALARY,
    fields::HOURLY_RATE,
    fields::FEDERAL_ALLOWANCES,
    fields::FEDERAL_EXTRA_WITHHOLDING,
    fields::STATE_ALLOWANCES,
    fields::STATE_EXTRA_WITHHOLDING,
    fields::LOCAL_TAX_RATE,
    fields::UNION_DUES,
    fields::RETIREMENT_PCT,
    fields::DD1_SPLIT_VALUE,
    fields::DD2_SPLIT_VALUE,
];

/// State-code fields validated whenever non-empty.
const STATE_FIELDS: &[&str] = &[fields::HOME_STATE, fields::WORK_STATE, fields::SUI_STATE];

/// ZIP fields validated whenever non-empty.
const ZIP_FIELDS: &[&str] = &[fields::HOME_ZIP, fields::WORK_ZIP];

/// Shared state for one row's validation pass.
struct RuleContext<'a> {
    row_id: String,
    row_number: usize,
    header_fields: Option<&'a [String]>,
    errors: Vec<ValidationError>,
}

impl<'a> RuleContext<'a> {
    fn new(row_id: String, row_number: usize, header_fields: Option<&'a [String]>) -> Self {
        Self {
            row_id,
            row_number,
            header_fields,
            errors: Vec::new(),
        }
    }

    fn column_index(&self, field: &str) -> Option<usize> {
        self.header_fields
            .and_then(|headers| headers.iter().position(|h| h == field))
    }

    fn push(&mut self, kind: ErrorKind, field: &str, value: &str, message: String) {
        let column_index = self.column_index(field);
        self.errors.push(
            ValidationError::new(&self.row_id, self.row_number, field, value, kind, message)
                .with_column_index(column_index),
        );
    }

    fn push_with_suggestion(
        &mut self,
        kind: ErrorKind,
        field: &str,
        value: &str,
        message: String,
        suggestion: &str,
    ) {
        let column_index = self.column_index(field);
        self.errors.push(
            ValidationError::new(&self.row_id, self.row_number, field, value, kind, message)
                .with_column_index(column_index)
                .with_suggestion(suggestion),
        );
    }
}

/// Validate a canonical employee record.
///
/// `header_fields`, when supplied, is the normalized header order captured
/// by the parser; it resolves each error's 0-based column index. Fields
/// absent from the header order simply get no index.
pub fn validate_record(
    record: &EmployeeRecord,
    row_number: usize,
    header_fields: Option<&[String]>,
) -> Vec<ValidationError> {
    let row_id = resolve_row_id(record.get(fields::EMPLOYEE_ID), "", row_number);
    let mut ctx = RuleContext::new(row_id, row_number, header_fields);
    run_record_rules(&mut ctx, record);
    debug!(
        row_number,
        errors = ctx.errors.len(),
        "validated canonical record"
    );
    ctx.errors
}

/// Validate a detail record: tracking-field checks first, then the full
/// canonical rule set on the wrapped employee record.
pub fn validate_detail(
    detail: &DetailRecord,
    row_number: usize,
    header_fields: Option<&[String]>,
) -> Vec<ValidationError> {
    let row_id = resolve_row_id(
        detail.employee.get(fields::EMPLOYEE_ID),
        &detail.record_sequence,
        row_number,
    );
    let mut ctx = RuleContext::new(row_id, row_number, header_fields);
    run_tracking_rules(&mut ctx, detail);
    run_record_rules(&mut ctx, &detail.employee);
    debug!(
        row_number,
        errors = ctx.errors.len(),
        "validated detail record"
    );
    ctx.errors
}

fn run_tracking_rules(ctx: &mut RuleContext, detail: &DetailRecord) {
    let record_type = detail.record_type.trim();
    if record_type.is_empty() {
        ctx.push(
            ErrorKind::RequiredFieldMissing,
            fields::RECORD_TYPE,
            &detail.record_type,
            "record_type is required".to_string(),
        );
    } else if record_type != fields::RECORD_TYPE_DETAIL {
        ctx.push(
            ErrorKind::InvalidFormat,
            fields::RECORD_TYPE,
            &detail.record_type,
            format!(
                "record_type must be \"{}\" for employee rows, found \"{}\"",
                fields::RECORD_TYPE_DETAIL,
                detail.record_type
            ),
        );
    }

    let sequence = detail.record_sequence.trim();
    if sequence.is_empty() {
        ctx.push(
            ErrorKind::RequiredFieldMissing,
            fields::RECORD_SEQUENCE,
            &detail.record_sequence,
            "record_sequence is required".to_string(),
        );
    } else if parse_numeric(sequence).is_none() {
        ctx.push(
            ErrorKind::InvalidFormat,
            fields::RECORD_SEQUENCE,
            &detail.record_sequence,
            format!("record_sequence must be numeric, found \"{sequence}\""),
        );
    }

    if detail.company_id.trim().is_empty() {
        ctx.push(
            ErrorKind::RequiredFieldMissing,
            fields::COMPANY_ID,
            &detail.company_id,
            "company_id is required".to_string(),
        );
    }
}

fn run_record_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    required_field_rules(ctx, record);
    date_rules(ctx, record);
    ssn_rule(ctx, record);
    email_rule(ctx, record);
    state_rules(ctx, record);
    zip_rules(ctx, record);
    routing_rules(ctx, record);
    numeric_rules(ctx, record);
    enum_rules(ctx, record);
    split_rules(ctx, record);
}

fn required_field_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    for &field in fields::REQUIRED_FIELDS {
        if record.is_blank(field) {
            ctx.push(
                ErrorKind::RequiredFieldMissing,
                field,
                record.get(field),
                format!("{field} is required"),
            );
        }
    }
}

fn date_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    for &field in DATE_FIELDS {
        let value = record.get(field).trim();
        if value.is_empty() {
            continue;
        }
        if !is_valid_date(value) {
            ctx.push_with_suggestion(
                ErrorKind::InvalidFormat,
                field,
                record.get(field),
                format!("{field} must be a valid date in YYYY-MM-DD format, found \"{value}\""),
                "use YYYY-MM-DD, e.g. 1990-04-23",
            );
        }
    }
}

fn ssn_rule(ctx: &mut RuleContext, record: &EmployeeRecord) {
    let value = record.get(fields::SSN).trim();
    if value.is_empty() {
        return;
    }
    if !is_valid_ssn(value) {
        ctx.push_with_suggestion(
            ErrorKind::InvalidFormat,
            fields::SSN,
            record.get(fields::SSN),
            format!("ssn must match ###-##-#### or XXX-XX-####, found \"{value}\""),
            "format as ###-##-####",
        );
    }
}

fn email_rule(ctx: &mut RuleContext, record: &EmployeeRecord) {
    let value = record.get(fields::EMAIL).trim();
    if value.is_empty() {
        return;
    }
    if !is_valid_email(value) {
        ctx.push(
            ErrorKind::InvalidFormat,
            fields::EMAIL,
            record.get(fields::EMAIL),
            format!("email is not a valid address: \"{value}\""),
        );
    }
}

fn state_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    for &field in STATE_FIELDS {
        let value = record.get(field).trim();
        if value.is_empty() {
            continue;
        }
        if !is_state_code(value) {
            // Report the raw input, never an uppercased copy.
            ctx.push(
                ErrorKind::InvalidFormat,
                field,
                record.get(field),
                format!("{field} must be a 2-letter state code, found \"{value}\""),
            );
        }
    }
}

fn zip_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    for &field in ZIP_FIELDS {
        let value = record.get(field).trim();
        if value.is_empty() {
            continue;
        }
        if !is_zip_code(value) {
            ctx.push_with_suggestion(
                ErrorKind::InvalidFormat,
                field,
                record.get(field),
                format!("{field} must be a 5-digit ZIP or ZIP+4, found \"{value}\""),
                "use ##### or #####-####",
            );
        }
    }
}

fn routing_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    let primary = record.get(fields::DD1_ROUTING_NUMBER).trim();
    if !primary.is_empty() && !is_routing_number(primary) {
        ctx.push(
            ErrorKind::InvalidFormat,
            fields::DD1_ROUTING_NUMBER,
            record.get(fields::DD1_ROUTING_NUMBER),
            format!("dd1_routing_number must be exactly 9 digits, found \"{primary}\""),
        );
    }
    // The secondary account is optional as a group; its routing number is
    // only checked when supplied.
    let secondary = record.get(fields::DD2_ROUTING_NUMBER).trim();
    if !secondary.is_empty() && !is_routing_number(secondary) {
        ctx.push(
            ErrorKind::InvalidFormat,
            fields::DD2_ROUTING_NUMBER,
            record.get(fields::DD2_ROUTING_NUMBER),
            format!("dd2_routing_number must be exactly 9 digits, found \"{secondary}\""),
        );
    }
}

fn numeric_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    for &field in NUMERIC_FIELDS {
        let value = record.get(field).trim();
        if value.is_empty() {
            continue;
        }
        if parse_numeric(value).is_none() {
            ctx.push(
                ErrorKind::InvalidFormat,
                field,
                record.get(field),
                format!("{field} must be a number, found \"{value}\""),
            );
        }
    }
}

fn enum_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    enum_rule(ctx, record, fields::PAY_FREQUENCY, PAY_FREQUENCIES);
    enum_rule(ctx, record, fields::FLSA_STATUS, FLSA_STATUSES);
}

fn enum_rule(ctx: &mut RuleContext, record: &EmployeeRecord, field: &str, members: &[&str]) {
    let value = record.get(field).trim();
    if value.is_empty() {
        return;
    }
    if !members.contains(&value) {
        let valid = members.join(", ");
        ctx.push_with_suggestion(
            ErrorKind::InvalidFormat,
            field,
            record.get(field),
            format!("{field} must be one of: {valid}; found \"{value}\""),
            &format!("choose one of: {valid}"),
        );
    }
}

/// Direct-deposit split rules: a percent split must lie in [0, 100], and
/// when both splits are percent-typed their values must total 100 within
/// [`SPLIT_TOTAL_TOLERANCE`].
fn split_rules(ctx: &mut RuleContext, record: &EmployeeRecord) {
    let primary_is_percent = is_percent_split(record.get(fields::DD1_SPLIT_TYPE));
    let secondary_is_percent = is_percent_split(record.get(fields::DD2_SPLIT_TYPE));
    let primary_value = parse_numeric(record.get(fields::DD1_SPLIT_VALUE));
    let secondary_value = parse_numeric(record.get(fields::DD2_SPLIT_VALUE));

    if primary_is_percent
        && let Some(pct) = primary_value
        && !(0.0..=100.0).contains(&pct)
    {
        ctx.push(
            ErrorKind::BusinessLogicError,
            fields::DD1_SPLIT_VALUE,
            record.get(fields::DD1_SPLIT_VALUE),
            format!("dd1_split_value must be between 0 and 100 percent, found {pct}"),
        );
    }

    if primary_is_percent
        && secondary_is_percent
        && let (Some(p1), Some(p2)) = (primary_value, secondary_value)
        && (p1 + p2 - 100.0).abs() > SPLIT_TOTAL_TOLERANCE
    {
        let v1 = record.get(fields::DD1_SPLIT_VALUE);
        let v2 = record.get(fields::DD2_SPLIT_VALUE);
        ctx.push_with_suggestion(
            ErrorKind::BusinessLogicError,
            fields::DD1_SPLIT_VALUE,
            &format!("{v1} + {v2}"),
            format!(
                "direct deposit percent splits must total 100%, found {}% ({v1} + {v2})",
                format_total(p1 + p2)
            ),
            "adjust dd1_split_value and dd2_split_value to total 100",
        );
    }
}

fn is_percent_split(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("percent")
}

fn format_total(total: f64) -> String {
    if (total - total.round()).abs() < f64::EPSILON {
        format!("{}", total.round() as i64)
    } else {
        format!("{total}")
    }
}
