//! Clinical feature domain shared by the input form, the inference
//! pipeline and the charts: the fixed 13-feature schema, per-submission
//! patient input, and the healthy reference profile.

pub mod patient;
pub mod reference;
pub mod schema;

pub use patient::{FeatureVector, PatientInput};
pub use reference::{HEALTHY_REFERENCE, REFERENCE_AXIS_COUNT, reference_value};
pub use schema::{CodedOption, FEATURE_COUNT, FEATURES, FeatureDef, FeatureDomain, feature};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    MissingFeature(String),
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::MissingFeature(name) => {
                write!(f, "no value provided for feature '{name}'")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
