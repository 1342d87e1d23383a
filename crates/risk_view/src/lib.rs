//! Pure mapping from pipeline output to what the results area shows.
//! Nothing in this crate touches a widget; it only computes chart specs
//! and texts for the presentation layer to render.

pub mod gauge;
pub mod radar;
pub mod verdict;

pub use gauge::{BAND_STOPS, GaugeSpec, RiskBand, gauge};
pub use radar::{AXIS_PADDING, RadarSpec, radar};
pub use verdict::Verdict;

use clinical_domain::{PatientInput, SchemaError};
use inference_engine::PredictionResult;
use serde::Serialize;

/// Everything the results area needs for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub result: PredictionResult,
    pub verdict: Verdict,
    /// Absent when the model exposes no probability estimate.
    pub gauge: Option<GaugeSpec>,
    pub radar: RadarSpec,
}

pub fn report(
    result: &PredictionResult,
    input: &PatientInput,
) -> Result<PredictionReport, SchemaError> {
    Ok(PredictionReport {
        result: result.clone(),
        verdict: Verdict::from_class(result.predicted_class),
        gauge: gauge::gauge(result),
        radar: radar::radar(input)?,
    })
}

/// One-decimal percentage readout, e.g. 0.72 -> "72.0%".
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}
