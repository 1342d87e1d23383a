//! One submission in, one result out. The pipeline keeps no state between
//! calls; identical input against the same model gives an identical
//! result.

use clinical_domain::{PatientInput, SchemaError};
use serde::Serialize;

use crate::artifact::{Classifier, ModelError};

/// Outcome of a single submission. Never cached or stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    /// 1 means "disease likely".
    pub predicted_class: u8,
    /// Estimated likelihood of class 1, when the model provides one.
    pub probability: Option<f64>,
}

/// A submission either fully succeeds or fails as a whole; there is no
/// partial result.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Vector(SchemaError),
    Model(ModelError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Reported to the user verbatim.
        match self {
            PipelineError::Vector(err) => write!(f, "{err}"),
            PipelineError::Model(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<SchemaError> for PipelineError {
    fn from(err: SchemaError) -> Self {
        PipelineError::Vector(err)
    }
}

impl From<ModelError> for PipelineError {
    fn from(err: ModelError) -> Self {
        PipelineError::Model(err)
    }
}

/// Assembles the ordered feature vector, invokes the model once, and reads
/// the optional probability of the positive class.
pub fn run(
    model: &dyn Classifier,
    input: &PatientInput,
) -> Result<PredictionResult, PipelineError> {
    let vector = input.to_vector()?;
    let predicted_class = model.predict(&vector)?;
    let probability = model.predict_proba(&vector)?.map(|proba| proba[1]);
    log::info!("predicted class {predicted_class} (probability {probability:?})");
    Ok(PredictionResult { predicted_class, probability })
}
