use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One declared source → target field projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap {
    /// Canonical field name on the employee record.
    pub source: String,
    /// Key in the provider output schema.
    pub target: String,
}

impl FieldMap {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Named transformation strategies for provider output fields.
///
/// A closed registry rather than function pointers so admin-supplied
/// mapping files can name transformations declaratively in JSON. Each
/// variant is a pure `(source value, record) -> value` strategy; the
/// engine in `payfeed-transform` dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransformKind {
    /// `first_name` + `last_name`, space-joined; ignores the source value.
    FullName,
    /// Annual salary divided by the pay-frequency divisor, 2 decimals.
    PayPerPeriod,
    /// Annual salary divided by 2080 hours, 2 decimals.
    HourlyFromAnnual,
    /// Explicit value lookup with a lower-snake-case fallback for values
    /// missing from the table.
    Remap { table: BTreeMap<String, String> },
    /// `YYYY-MM-DD` reformatted as `MM/DD/YYYY`; non-conforming input
    /// passes through unchanged.
    DateMdy,
    /// Strip every non-digit character.
    DigitsOnly,
    Uppercase,
    /// Fixed output value regardless of input.
    Constant { value: String },
    /// Numeric value formatted to 2 decimals, `"0.00"` when blank or
    /// unparseable.
    MoneyOrZero,
}

/// A declarative provider output schema: an ordered field-mapping list plus
/// transformations keyed by target field.
///
/// A transformation registered for a target always wins over the raw copied
/// value. Transformation keys with no entry in `field_maps` still run (with
/// an empty source value) so providers can declare wholly derived fields.
/// Admin replacements are total: a supplied mapping overwrites the built-in
/// default wholesale, never field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderMapping {
    pub provider: String,
    pub field_maps: Vec<FieldMap>,
    #[serde(default)]
    pub transforms: BTreeMap<String, TransformKind>,
}

impl ProviderMapping {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            field_maps: Vec::new(),
            transforms: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn map(mut self, source: &str, target: &str) -> Self {
        self.field_maps.push(FieldMap::new(source, target));
        self
    }

    #[must_use]
    pub fn transform(mut self, target: &str, kind: TransformKind) -> Self {
        self.transforms.insert(target.to_string(), kind);
        self
    }
}
