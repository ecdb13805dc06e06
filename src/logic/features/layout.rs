//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema sent to the trust service.**
//!
//! The backend looks features up by name, so every name below must match the
//! training profile exactly (spaces and case included). Order only matters
//! for the form: the first [`EDITABLE_COUNT`] entries are the editable fields.

use std::fmt;

use crate::error::FeatureError;

/// Number of features in every assessment request
pub const FEATURE_COUNT: usize = 30;

/// Number of features exposed as editable form fields
pub const EDITABLE_COUNT: usize = 10;

/// Value every feature starts with
pub const DEFAULT_FEATURE_VALUE: f64 = 15.0;

/// Feature names in exact order they appear in the vector
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    // === Mean (0-9) ===
    "mean radius",
    "mean texture",
    "mean perimeter",
    "mean area",
    "mean smoothness",
    "mean compactness",
    "mean concavity",
    "mean concave points",
    "mean symmetry",
    "mean fractal dimension",

    // === Standard error (10-19) ===
    "radius error",
    "texture error",
    "perimeter error",
    "area error",
    "smoothness error",
    "compactness error",
    "concavity error",
    "concave points error",
    "symmetry error",
    "fractal dimension error",

    // === Worst (20-29) ===
    "worst radius",
    "worst texture",
    "worst perimeter",
    "worst area",
    "worst smoothness",
    "worst compactness",
    "worst concavity",
    "worst concave points",
    "worst symmetry",
    "worst fractal dimension",
];

/// A known feature. Only constructible from the layout, so holding one
/// proves the name exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(usize);

impl FeatureId {
    /// Look up a feature by its exact layout name
    pub fn from_name(name: &str) -> Option<Self> {
        feature_index(name).map(Self)
    }

    /// Resolve user input: exact name, case-insensitive name, or the
    /// 1-based position of an editable form field.
    pub fn resolve(input: &str) -> Result<Self, FeatureError> {
        let input = input.trim();

        if let Some(id) = Self::from_name(input) {
            return Ok(id);
        }

        if let Some(index) = FEATURE_LAYOUT
            .iter()
            .position(|name| name.eq_ignore_ascii_case(input))
        {
            return Ok(Self(index));
        }

        match input.parse::<usize>() {
            Ok(pos) if (1..=EDITABLE_COUNT).contains(&pos) => Ok(Self(pos - 1)),
            _ => Err(FeatureError::UnknownFeature(input.to_string())),
        }
    }

    /// All features in layout order
    pub fn all() -> impl Iterator<Item = FeatureId> {
        (0..FEATURE_COUNT).map(Self)
    }

    /// The features shown on the form
    pub fn editable() -> impl Iterator<Item = FeatureId> {
        (0..EDITABLE_COUNT).map(Self)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        FEATURE_LAYOUT[self.0]
    }

    pub fn is_editable(self) -> bool {
        self.0 < EDITABLE_COUNT
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get index of a feature by name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}
