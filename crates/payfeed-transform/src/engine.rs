//! The mapping-apply engine.

use std::collections::BTreeSet;

use tracing::debug;

use payfeed_model::{EmployeeRecord, ProviderMapping};

use crate::transforms::apply_transform;

/// One provider-schema output row: target keys and values in mapping
/// declaration order (declared field maps first, then orphan transform
/// targets in table order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRecord {
    pairs: Vec<(String, String)>,
}

impl OutputRecord {
    pub fn get(&self, target: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == target)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Project one canonical record into a provider schema.
///
/// First pass: every declared (source, target) pair is copied, with a
/// registered transformation always winning over the raw value. Second
/// pass: transformations whose target no declared pair populated run with
/// an empty source value, which is how providers declare wholly derived
/// fields (combined names, computed pay rates). Pure: same inputs, same
/// output, byte for byte.
pub fn apply_mapping(record: &EmployeeRecord, mapping: &ProviderMapping) -> OutputRecord {
    let mut output = OutputRecord::default();
    let mut populated: BTreeSet<&str> = BTreeSet::new();

    for field_map in &mapping.field_maps {
        let source_value = record.get(&field_map.source);
        let value = match mapping.transforms.get(&field_map.target) {
            Some(kind) => apply_transform(kind, source_value, record),
            None => source_value.to_string(),
        };
        populated.insert(field_map.target.as_str());
        output.pairs.push((field_map.target.clone(), value));
    }

    for (target, kind) in &mapping.transforms {
        if populated.contains(target.as_str()) {
            continue;
        }
        let value = apply_transform(kind, "", record);
        output.pairs.push((target.clone(), value));
    }

    debug!(
        provider = %mapping.provider,
        fields = output.len(),
        "applied provider mapping"
    );
    output
}
