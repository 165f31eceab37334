//! Best-effort reconciliation of combined "messy" input fields.
//!
//! Feed files frequently arrive with one combined address or full-name
//! column instead of the canonical sub-fields. The normalizer splits those
//! apart when it safely can, appends a warning for every rewrite, and drops
//! the combined field either way. A row with no combined fields passes
//! through untouched with zero warnings.

use std::collections::BTreeMap;

use tracing::debug;

use payfeed_model::fields::{self, is_zip_code};
use payfeed_model::{ValidationWarning, resolve_row_id};

type Row = BTreeMap<String, String>;

/// Normalize one raw row in place, appending rewrite warnings to the
/// caller-owned list. Rules run independently, in a fixed order: home
/// address, work address, full name.
pub fn normalize_row(row: &mut Row, row_number: usize, warnings: &mut Vec<ValidationWarning>) {
    let row_id = resolve_row_id(
        row.get(fields::EMPLOYEE_ID).map(String::as_str).unwrap_or(""),
        row.get(fields::RECORD_SEQUENCE)
            .map(String::as_str)
            .unwrap_or(""),
        row_number,
    );
    split_combined_address(
        row,
        fields::HOME_ADDRESS,
        [
            fields::HOME_STREET,
            fields::HOME_CITY,
            fields::HOME_STATE,
            fields::HOME_ZIP,
        ],
        &row_id,
        row_number,
        warnings,
    );
    split_combined_address(
        row,
        fields::WORK_ADDRESS,
        [
            fields::WORK_STREET,
            fields::WORK_CITY,
            fields::WORK_STATE,
            fields::WORK_ZIP,
        ],
        &row_id,
        row_number,
        warnings,
    );
    split_combined_name(row, &row_id, row_number, warnings);
}

fn field_is_blank(row: &Row, name: &str) -> bool {
    row.get(name).map(String::as_str).unwrap_or("").trim().is_empty()
}

/// Split `street(, more street)*, city, STATE ZIP` into the four canonical
/// sub-fields. The combined field is removed whether or not the split
/// succeeds; a failed parse drops it silently.
fn split_combined_address(
    row: &mut Row,
    combined_field: &str,
    targets: [&str; 4],
    row_id: &str,
    row_number: usize,
    warnings: &mut Vec<ValidationWarning>,
) {
    if !row.contains_key(combined_field) {
        return;
    }
    let combined = row.remove(combined_field).unwrap_or_default();
    let [street_field, city_field, state_field, zip_field] = targets;
    if !field_is_blank(row, street_field) {
        return;
    }
    let Some(parts) = parse_combined_address(&combined) else {
        debug!(row_number, field = combined_field, "combined address did not parse, dropped");
        return;
    };
    row.insert(street_field.to_string(), parts.street);
    row.insert(city_field.to_string(), parts.city);
    row.insert(state_field.to_string(), parts.state);
    row.insert(zip_field.to_string(), parts.zip);
    warnings.push(ValidationWarning::new(
        row_id,
        row_number,
        combined_field,
        combined,
        format!("combined address split into {street_field}/{city_field}/{state_field}/{zip_field}"),
    ));
}

struct AddressParts {
    street: String,
    city: String,
    state: String,
    zip: String,
}

fn parse_combined_address(combined: &str) -> Option<AddressParts> {
    let trimmed = combined.trim();
    if trimmed.is_empty() {
        return None;
    }
    // The ZIP is the trailing whitespace-separated token; everything before
    // it splits on commas as street(, street)*, city, state.
    let (rest, zip) = trimmed.rsplit_once(char::is_whitespace)?;
    if !is_zip_code(zip) {
        return None;
    }
    let parts: Vec<&str> = rest.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return None;
    }
    let state = parts[parts.len() - 1];
    let city = parts[parts.len() - 2];
    // Exactly two parts means no street portion; the split still succeeds
    // with an empty street so city/state/zip are recovered.
    let street = parts[..parts.len() - 2].join(", ");
    Some(AddressParts {
        street,
        city: city.to_string(),
        state: state.to_string(),
        zip: zip.to_string(),
    })
}

/// Split a combined full name into first/last when both canonical name
/// fields are blank. The first whitespace token becomes the first name and
/// everything after it the last name.
fn split_combined_name(
    row: &mut Row,
    row_id: &str,
    row_number: usize,
    warnings: &mut Vec<ValidationWarning>,
) {
    if !row.contains_key(fields::FULL_NAME) {
        return;
    }
    let combined = row.remove(fields::FULL_NAME).unwrap_or_default();
    if !field_is_blank(row, fields::FIRST_NAME) || !field_is_blank(row, fields::LAST_NAME) {
        return;
    }
    let tokens: Vec<&str> = combined.split_whitespace().collect();
    if tokens.len() < 2 {
        debug!(row_number, "combined full name has fewer than two tokens, dropped");
        return;
    }
    row.insert(fields::FIRST_NAME.to_string(), tokens[0].to_string());
    row.insert(fields::LAST_NAME.to_string(), tokens[1..].join(" "));
    warnings.push(ValidationWarning::new(
        row_id,
        row_number,
        fields::FULL_NAME,
        combined,
        "combined full name split into first_name/last_name",
    ));
}
