//! Feature Vector - the Feature Store
//!
//! Holds the current value of every named input. All 30 features are always
//! present; edits replace values in place and never add or remove names.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::layout::{FeatureId, DEFAULT_FEATURE_VALUE, FEATURE_COUNT, FEATURE_LAYOUT};

/// Fixed-arity feature values, indexed by [`FeatureId`]
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Every feature at [`DEFAULT_FEATURE_VALUE`]
    pub fn new() -> Self {
        Self {
            values: [DEFAULT_FEATURE_VALUE; FEATURE_COUNT],
        }
    }

    /// Store raw form input. Input that does not parse stores `0`.
    pub fn set_value(&mut self, feature: FeatureId, raw: &str) {
        let value = parse_feature_input(raw);
        log::debug!("feature '{}' <- {} (raw {:?})", feature, value, raw);
        self.set(feature, value);
    }

    /// Store an already-numeric value. Non-finite values store `0`, same as
    /// unparseable form input.
    pub fn set(&mut self, feature: FeatureId, value: f64) {
        self.values[feature.index()] = if value.is_finite() { value } else { 0.0 };
    }

    pub fn get(&self, feature: FeatureId) -> f64 {
        self.values[feature.index()]
    }

    /// `(name, value)` pairs in layout order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LAYOUT.iter().copied().zip(self.values.iter().copied())
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized as `{ "<name>": <number>, ... }` with all names present
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Numeric parse of form input; empty, non-numeric and non-finite text all
/// become `0` so the vector stays fully numeric.
pub fn parse_feature_input(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
