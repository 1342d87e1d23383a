//! End-to-end checks of the submission flow: form values to feature
//! vector to prediction to chart specs.

use std::cell::RefCell;

use clinical_domain::{FEATURES, FeatureDomain, PatientInput};
use inference_engine::{Classifier, ModelError, PredictionResult, load_artifact, run};
use proptest::prelude::*;
use risk_view::{RiskBand, Verdict, format_probability, report};

/// Fixed-outcome classifier that records the vector it was given.
struct ScriptedClassifier {
    class: u8,
    probability: Option<f64>,
    seen: RefCell<Vec<Vec<f64>>>,
}

impl ScriptedClassifier {
    fn new(class: u8, probability: Option<f64>) -> Self {
        Self { class, probability, seen: RefCell::new(Vec::new()) }
    }
}

impl Classifier for ScriptedClassifier {
    fn predict(&self, features: &[f64]) -> Result<u8, ModelError> {
        self.seen.borrow_mut().push(features.to_vec());
        Ok(self.class)
    }

    fn predict_proba(&self, _features: &[f64]) -> Result<Option<[f64; 2]>, ModelError> {
        Ok(self.probability.map(|p| [1.0 - p, p]))
    }
}

#[test]
fn documented_scenario_end_to_end() {
    // age=45, sex=1, cp=0, trestbps=130, chol=246, fbs=1, restecg=0,
    // thalach=150, exang=1, oldpeak=1.0, slope=0, ca=0, thal=0.
    let input = PatientInput::with_defaults();
    let model = ScriptedClassifier::new(1, Some(0.72));

    let result = run(&model, &input).unwrap();
    assert_eq!(
        model.seen.borrow()[0],
        vec![45.0, 1.0, 0.0, 130.0, 246.0, 1.0, 0.0, 150.0, 1.0, 1.0, 0.0, 0.0, 0.0]
    );

    let report = report(&result, &input).unwrap();
    assert_eq!(report.verdict, Verdict::DiseaseLikely);
    assert_eq!(report.verdict.message(), "Patient likely has Heart Disease");
    assert_eq!(format_probability(result.probability.unwrap()), "72.0%");

    let gauge = report.gauge.unwrap();
    assert_eq!(gauge.value, 72.0);
    assert_eq!(gauge.band, RiskBand::High);

    assert_eq!(report.radar.patient, [45.0, 130.0, 246.0, 150.0, 1.0]);
    assert_eq!(report.radar.reference, [30.0, 120.0, 200.0, 170.0, 0.0]);
    assert_eq!(report.radar.axis_max, 266.0);
}

#[test]
fn probability_less_model_skips_the_gauge_but_not_the_verdict() {
    let input = PatientInput::with_defaults();
    let model = ScriptedClassifier::new(0, None);

    let result = run(&model, &input).unwrap();
    let report = report(&result, &input).unwrap();

    assert!(report.gauge.is_none());
    assert_eq!(report.verdict, Verdict::DiseaseUnlikely);
    assert_eq!(report.radar.axes.len(), 5);
}

#[test]
fn shipped_demo_artifact_drives_the_full_flow() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../trained_model.json");
    let model = load_artifact(path).unwrap();
    assert!(model.supports_probability());

    let input = PatientInput::with_defaults();
    let result = run(&model, &input).unwrap();
    assert!(result.predicted_class == 0 || result.predicted_class == 1);
    assert!((0.0..=1.0).contains(&result.probability.unwrap()));

    let report = report(&result, &input).unwrap();
    assert!(report.gauge.is_some());
}

fn in_domain_input() -> impl Strategy<Value = PatientInput> {
    proptest::collection::vec(0.0..=1.0f64, FEATURES.len()).prop_map(|units| {
        let mut input = PatientInput::new();
        for (unit, feature) in units.iter().zip(FEATURES.iter()) {
            let value = match feature.domain {
                FeatureDomain::Numeric { min, max, .. } => min + unit * (max - min),
                FeatureDomain::Coded { options } => {
                    let index = ((unit * options.len() as f64) as usize).min(options.len() - 1);
                    options[index].code as f64
                }
            };
            input.insert(feature.name, value);
        }
        input
    })
}

proptest! {
    #[test]
    fn all_radar_points_lie_within_the_axis(input in in_domain_input()) {
        let result = PredictionResult { predicted_class: 0, probability: None };
        let report = report(&result, &input).unwrap();

        let spec = &report.radar;
        for value in spec.patient.iter().chain(spec.reference.iter()) {
            prop_assert!(*value >= 0.0);
            prop_assert!(*value <= spec.axis_max);
        }

        let peak = spec
            .patient
            .iter()
            .chain(spec.reference.iter())
            .fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));
        prop_assert_eq!(spec.axis_max, peak + 20.0);
    }
}
