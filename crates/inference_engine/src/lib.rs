//! The opaque model artifact and the inference pipeline built on top of
//! it. The artifact is loaded once at process start and stays read-only
//! for the session; the pipeline turns one `PatientInput` into one
//! `PredictionResult`.

pub mod artifact;
pub mod pipeline;

pub use artifact::{
    Classifier, LogisticModel, MODEL_PATH, MarginModel, ModelArtifact, ModelError, load_artifact,
};
pub use pipeline::{PipelineError, PredictionResult, run};
