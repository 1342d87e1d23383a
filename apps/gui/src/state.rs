use clinical_domain::{FEATURES, FeatureDomain, PatientInput};
use risk_view::PredictionReport;

/// The two observable states of the page. Transitions happen only on the
/// outcome of an explicit submission; there are no timers and no
/// background work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    AwaitingSubmission,
    Presenting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    SubmissionSucceeded,
    SubmissionFailed,
}

#[derive(Debug, Clone)]
pub struct UiStateMachine {
    state: UiState,
}

impl Default for UiStateMachine {
    fn default() -> Self {
        Self { state: UiState::AwaitingSubmission }
    }
}

impl UiStateMachine {
    pub fn current_state(&self) -> UiState {
        self.state
    }

    pub fn dispatch(&mut self, event: UiEvent) -> UiState {
        self.state = match event {
            UiEvent::SubmissionSucceeded => UiState::Presenting,
            UiEvent::SubmissionFailed => UiState::AwaitingSubmission,
        };
        self.state
    }
}

/// Current value of one control. Numeric slots hold the raw value, coded
/// slots hold the index of the selected option, so whatever the user does
/// the submitted value stays inside its declared domain.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldState {
    Numeric(f64),
    Coded(usize),
}

/// Control values in schema order, one slot per feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub fields: Vec<FieldState>,
}

impl FormState {
    pub fn defaults() -> Self {
        let fields = FEATURES
            .iter()
            .map(|feature| match feature.domain {
                FeatureDomain::Numeric { default, .. } => FieldState::Numeric(default),
                FeatureDomain::Coded { .. } => FieldState::Coded(0),
            })
            .collect();
        Self { fields }
    }

    /// Snapshot of the current controls as a submission input.
    pub fn to_patient_input(&self) -> PatientInput {
        let mut input = PatientInput::new();
        for (field, feature) in self.fields.iter().zip(FEATURES.iter()) {
            let value = match (feature.domain, field) {
                (FeatureDomain::Numeric { .. }, FieldState::Numeric(value)) => *value,
                (FeatureDomain::Coded { options }, FieldState::Coded(selected)) => {
                    options[(*selected).min(options.len() - 1)].code as f64
                }
                // Slots are built from FEATURES, so the kinds line up; the
                // schema default covers a slot that somehow does not.
                _ => feature.default_value(),
            };
            input.insert(feature.name, value);
        }
        input
    }
}

pub struct AppState {
    pub form: FormState,
    pub report: Option<PredictionReport>,
    pub last_error: Option<String>,
    pub machine: UiStateMachine,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: FormState::defaults(),
            report: None,
            last_error: None,
            machine: UiStateMachine::default(),
        }
    }
}
