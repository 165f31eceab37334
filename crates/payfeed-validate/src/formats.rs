//! Field format predicates.
//!
//! All checks operate on already-trimmed values; blank values are handled
//! by the required-field rule, never here.

use chrono::NaiveDate;

/// `YYYY-MM-DD` with exactly 4-2-2 digits, and a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    if !bytes[..4].iter().all(u8::is_ascii_digit)
        || !bytes[5..7].iter().all(u8::is_ascii_digit)
        || !bytes[8..].iter().all(u8::is_ascii_digit)
    {
        return false;
    }
    let year: i32 = value[..4].parse().unwrap_or(0);
    let month: u32 = value[5..7].parse().unwrap_or(0);
    let day: u32 = value[8..].parse().unwrap_or(0);
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// `###-##-####`, or partially masked `XXX-XX-####`.
pub fn is_valid_ssn(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 11 || bytes[3] != b'-' || bytes[6] != b'-' {
        return false;
    }
    let tail_ok = bytes[7..].iter().all(u8::is_ascii_digit);
    if !tail_ok {
        return false;
    }
    let numeric_prefix =
        bytes[..3].iter().all(u8::is_ascii_digit) && bytes[4..6].iter().all(u8::is_ascii_digit);
    numeric_prefix || value.starts_with("XXX-XX-")
}

/// Single `@`, non-whitespace local and domain parts, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().filter(|&c| c == '@').count() != 1 {
        return false;
    }
    if local.chars().any(char::is_whitespace) || domain.chars().any(char::is_whitespace) {
        return false;
    }
    let (host, tld) = match domain.rsplit_once('.') {
        Some(split) => split,
        None => return false,
    };
    !host.is_empty() && !tld.is_empty()
}

/// Exactly two letters, any case.
pub fn is_state_code(value: &str) -> bool {
    value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic())
}

pub use payfeed_model::fields::is_zip_code;

/// Exactly nine digits.
pub fn is_routing_number(value: &str) -> bool {
    value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Finite floating-point number.
pub fn parse_numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
