//! Transformation strategy implementations.
//!
//! Each strategy is a pure function of `(source value, record)` and must
//! tolerate missing or empty upstream fields by returning a safe default,
//! typically `""` or `"0.00"`.

use std::collections::BTreeMap;

use payfeed_model::fields;
use payfeed_model::{EmployeeRecord, TransformKind};

/// Pay-period divisors per pay frequency. Unrecognized frequencies fall
/// back to bi-weekly.
const WEEKLY_PERIODS: f64 = 52.0;
const BIWEEKLY_PERIODS: f64 = 26.0;
const SEMIMONTHLY_PERIODS: f64 = 24.0;
const MONTHLY_PERIODS: f64 = 12.0;

/// Standard full-time hours per year for hourly-rate derivation.
const HOURS_PER_YEAR: f64 = 2080.0;

/// Apply one transformation strategy.
pub fn apply_transform(kind: &TransformKind, value: &str, record: &EmployeeRecord) -> String {
    match kind {
        TransformKind::FullName => full_name(record),
        TransformKind::PayPerPeriod => pay_per_period(value, record),
        TransformKind::HourlyFromAnnual => hourly_from_annual(value, record),
        TransformKind::Remap { table } => remap(table, value),
        TransformKind::DateMdy => date_mdy(value),
        TransformKind::DigitsOnly => value.chars().filter(char::is_ascii_digit).collect(),
        TransformKind::Uppercase => value.to_uppercase(),
        TransformKind::Constant { value } => value.clone(),
        TransformKind::MoneyOrZero => money_or_zero(value),
    }
}

fn full_name(record: &EmployeeRecord) -> String {
    let first = record.get(fields::FIRST_NAME).trim();
    let last = record.get(fields::LAST_NAME).trim();
    match (first.is_empty(), last.is_empty()) {
        (true, true) => String::new(),
        (false, true) => first.to_string(),
        (true, false) => last.to_string(),
        (false, false) => format!("{first} {last}"),
    }
}

/// Annual salary converted to a per-paycheck rate, 2 decimals half-up.
/// Prefers the mapped source value; falls back to the record's salary so
/// the transform also works as a wholly derived field.
fn pay_per_period(value: &str, record: &EmployeeRecord) -> String {
    let Some(annual) = numeric_or_field(value, record, fields::ANNUAL_SALARY) else {
        return "0.00".to_string();
    };
    format_money(annual / period_divisor(record.get(fields::PAY_FREQUENCY)))
}

fn hourly_from_annual(value: &str, record: &EmployeeRecord) -> String {
    let Some(annual) = numeric_or_field(value, record, fields::ANNUAL_SALARY) else {
        return "0.00".to_string();
    };
    format_money(annual / HOURS_PER_YEAR)
}

fn numeric_or_field(value: &str, record: &EmployeeRecord, field: &str) -> Option<f64> {
    let candidate = if value.trim().is_empty() {
        record.get(field)
    } else {
        value
    };
    candidate.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

pub(crate) fn period_divisor(frequency: &str) -> f64 {
    match frequency.trim() {
        "Weekly" => WEEKLY_PERIODS,
        "Bi-weekly" => BIWEEKLY_PERIODS,
        "Semi-monthly" => SEMIMONTHLY_PERIODS,
        "Monthly" => MONTHLY_PERIODS,
        _ => BIWEEKLY_PERIODS,
    }
}

/// Round half-up to 2 decimals. `f64::round` ties away from zero, which is
/// the half-up behavior required for pay rates.
fn format_money(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}

fn money_or_zero(value: &str) -> String {
    match value.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => format_money(amount),
        _ => "0.00".to_string(),
    }
}

/// Explicit lookup with a lower-snake-case identity fallback for values
/// the provider table does not recognize.
fn remap(table: &BTreeMap<String, String>, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    table
        .get(trimmed)
        .cloned()
        .unwrap_or_else(|| snake_case(trimmed))
}

fn snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_was_sep = false;
    for ch in value.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            if !out.is_empty() && !last_was_sep {
                out.push('_');
            }
            last_was_sep = true;
        } else {
            out.extend(ch.to_lowercase());
            last_was_sep = false;
        }
    }
    out.trim_end_matches('_').to_string()
}

/// `YYYY-MM-DD` → `MM/DD/YYYY`; anything else passes through unchanged.
fn date_mdy(value: &str) -> String {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let conforms = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[8..].iter().all(u8::is_ascii_digit);
    if !conforms {
        return trimmed.to_string();
    }
    format!("{}/{}/{}", &trimmed[5..7], &trimmed[8..], &trimmed[..4])
}
