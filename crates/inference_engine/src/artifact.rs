//! The trained classifier artifact and its capability surface.
//!
//! Which capabilities are available depends on the stored model kind, not
//! on runtime introspection: a `logistic` artifact estimates probabilities,
//! a `margin` artifact predicts the class alone.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Well-known location of the trained artifact, relative to the working
/// directory the tool is launched from.
pub const MODEL_PATH: &str = "trained_model.json";

#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    Io { path: String, message: String },
    Malformed { path: String, message: String },
    ShapeMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Io { path, message } => {
                write!(f, "cannot read model artifact '{path}': {message}")
            }
            ModelError::Malformed { path, message } => {
                write!(f, "model artifact '{path}' is not usable: {message}")
            }
            ModelError::ShapeMismatch { expected, actual } => {
                write!(f, "feature vector has {actual} elements, model expects {expected}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Logistic regression over the raw feature vector: decision
/// `w . x + intercept`, probability through the standard sigmoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    fn decision(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }

    /// Estimated probability of the positive class.
    pub fn probability(&self, features: &[f64]) -> Result<f64, ModelError> {
        Ok(sigmoid(self.decision(features)?))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Hard-decision linear classifier: class from the sign of the margin,
/// no probability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl MarginModel {
    fn margin(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::ShapeMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.bias)
    }
}

/// The pre-trained artifact behind the tool, in its stored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticModel),
    Margin(MarginModel),
}

impl ModelArtifact {
    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Logistic(_) => "logistic",
            ModelArtifact::Margin(_) => "margin",
        }
    }

    pub fn supports_probability(&self) -> bool {
        matches!(self, ModelArtifact::Logistic(_))
    }
}

/// Capability surface of a loaded model: `predict` is required,
/// probability estimation is optional. `Ok(None)` means the model cannot
/// provide it.
pub trait Classifier {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError>;

    fn predict_proba(&self, features: &[f64]) -> Result<Option<[f64; 2]>, ModelError>;
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        match self {
            ModelArtifact::Logistic(model) => {
                Ok(if model.probability(features)? >= 0.5 { 1 } else { 0 })
            }
            ModelArtifact::Margin(model) => {
                Ok(if model.margin(features)? >= 0.0 { 1 } else { 0 })
            }
        }
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<[f64; 2]>, ModelError> {
        match self {
            ModelArtifact::Logistic(model) => {
                let p = model.probability(features)?;
                Ok(Some([1.0 - p, p]))
            }
            ModelArtifact::Margin(_) => Ok(None),
        }
    }
}

/// Loads the artifact from its well-known location. Called once at process
/// start; a failure here is fatal for the whole session.
pub fn load_artifact(path: impl AsRef<Path>) -> Result<ModelArtifact, ModelError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|err| ModelError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    })?;
    let artifact =
        serde_json::from_str::<ModelArtifact>(&raw).map_err(|err| ModelError::Malformed {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
    log::info!("loaded {} model from {}", artifact.kind(), path.display());
    Ok(artifact)
}
