use std::collections::HashMap;

use crate::SchemaError;
use crate::schema::{FEATURE_COUNT, FEATURES};

/// Positional input of the classifier, in `FEATURES` order.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// One submission's worth of form values, keyed by feature name. Built
/// fresh from the current control states on every submission and discarded
/// after rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientInput {
    values: HashMap<String, f64>,
}

impl PatientInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every feature at its schema default.
    pub fn with_defaults() -> Self {
        let mut input = Self::new();
        for feature in &FEATURES {
            input.insert(feature.name, feature.default_value());
        }
        input
    }

    /// Stores the value verbatim. Domain bounds are enforced by the
    /// controls that produced it, not here.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// The ordered vector the model consumes: exactly `FEATURE_COUNT`
    /// elements, positions fixed by the schema regardless of the order the
    /// values were entered.
    pub fn to_vector(&self) -> Result<FeatureVector, SchemaError> {
        let mut vector = [0.0; FEATURE_COUNT];
        for (slot, feature) in vector.iter_mut().zip(FEATURES.iter()) {
            *slot = self
                .get(feature.name)
                .ok_or_else(|| SchemaError::MissingFeature(feature.name.to_string()))?;
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_builds_the_documented_vector() {
        let vector = PatientInput::with_defaults().to_vector().unwrap();
        assert_eq!(
            vector,
            [45.0, 1.0, 0.0, 130.0, 246.0, 1.0, 0.0, 150.0, 1.0, 1.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn vector_order_is_independent_of_entry_order() {
        let mut input = PatientInput::new();
        for feature in FEATURES.iter().rev() {
            input.insert(feature.name, feature.default_value());
        }
        assert_eq!(
            input.to_vector().unwrap(),
            PatientInput::with_defaults().to_vector().unwrap()
        );
    }

    #[test]
    fn missing_feature_is_an_error() {
        let mut input = PatientInput::with_defaults();
        input.values.remove("thalach");
        match input.to_vector() {
            Err(SchemaError::MissingFeature(name)) => assert_eq!(name, "thalach"),
            other => panic!("expected a missing-feature error, got {other:?}"),
        }
    }

    #[test]
    fn insert_overwrites_previous_value() {
        let mut input = PatientInput::with_defaults();
        input.insert("age", 63.0);
        assert_eq!(input.get("age"), Some(63.0));
    }
}
