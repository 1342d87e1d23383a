use clinical_domain::{HEALTHY_REFERENCE, PatientInput, REFERENCE_AXIS_COUNT, SchemaError};
use serde::Serialize;

/// Fixed padding added above the largest plotted value.
pub const AXIS_PADDING: f64 = 20.0;

/// Two polygons over the same five axes, in the reference profile's fixed
/// order. The radial range is recomputed per submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSpec {
    pub axes: [&'static str; REFERENCE_AXIS_COUNT],
    pub patient: [f64; REFERENCE_AXIS_COUNT],
    pub reference: [f64; REFERENCE_AXIS_COUNT],
    /// Radial axis runs [0, axis_max].
    pub axis_max: f64,
}

pub fn radar(input: &PatientInput) -> Result<RadarSpec, SchemaError> {
    let mut axes = [""; REFERENCE_AXIS_COUNT];
    let mut patient = [0.0; REFERENCE_AXIS_COUNT];
    let mut reference = [0.0; REFERENCE_AXIS_COUNT];

    for (i, (name, healthy)) in HEALTHY_REFERENCE.iter().enumerate() {
        axes[i] = name;
        patient[i] = input
            .get(name)
            .ok_or_else(|| SchemaError::MissingFeature(name.to_string()))?;
        reference[i] = *healthy;
    }

    let peak = patient
        .iter()
        .chain(reference.iter())
        .fold(f64::NEG_INFINITY, |acc, value| acc.max(*value));

    Ok(RadarSpec { axes, patient, reference, axis_max: peak + AXIS_PADDING })
}
