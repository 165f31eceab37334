use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields;

/// The canonical employee record.
///
/// Backed by a name → value map so the parser, normalizer, and mapping
/// engine can address fields by their normalized header names. Absent and
/// empty fields are indistinguishable through [`EmployeeRecord::get`], which
/// matches how the validator and transform engine treat them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeRecord {
    fields: BTreeMap<String, String>,
}

impl EmployeeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    /// Field value, or `""` when the field is absent.
    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// True when the field is absent or blank after trimming.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Copy of this record with `field` overwritten. Used by the correction
    /// workflow so the audit trail never aliases the working record.
    pub fn with_field(&self, field: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value.into());
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for EmployeeRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A detail row as parsed from the batch: the canonical record plus the
/// three batch-tracking fields. Header and footer rows never reach this
/// type; they are classified and skipped by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    /// Discriminator value as read from the row (expected to be `"D"`).
    pub record_type: String,
    /// Sequential position within the batch, as read (validated as numeric).
    pub record_sequence: String,
    /// Owning-company identifier.
    pub company_id: String,
    pub employee: EmployeeRecord,
}

impl DetailRecord {
    /// Promote a raw parsed row into a detail record, splitting off the
    /// tracking fields. Missing tracking fields default to `""`; that is
    /// a validation concern, never a parse failure.
    pub fn from_row(mut row: BTreeMap<String, String>) -> Self {
        let record_type = row.remove(fields::RECORD_TYPE).unwrap_or_default();
        let record_sequence = row.remove(fields::RECORD_SEQUENCE).unwrap_or_default();
        let company_id = row.remove(fields::COMPANY_ID).unwrap_or_default();
        Self {
            record_type,
            record_sequence,
            company_id,
            employee: EmployeeRecord::from_fields(row),
        }
    }

    pub fn is_detail(&self) -> bool {
        self.record_type == fields::RECORD_TYPE_DETAIL
    }
}
