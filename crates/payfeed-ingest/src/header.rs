//! Header and cell normalization for batch files.

/// Normalize a raw header name: strip the BOM, trim, lowercase, and collapse
/// runs of whitespace into single underscores.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(&first.to_lowercase());
        for part in parts {
            normalized.push('_');
            normalized.push_str(&part.to_lowercase());
        }
    }
    normalized
}

/// Normalize a raw cell value: strip the BOM and trim surrounding whitespace.
/// Cell contents are otherwise preserved verbatim.
pub fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
