use inference_engine::{ModelArtifact, run};
use risk_view::report;

use crate::state::{AppState, UiEvent};

/// Owns the model handle for the lifetime of the session. The handle is
/// read-only after load; there is no reload and no hot-swap.
pub struct PredictorSession {
    model: ModelArtifact,
}

impl PredictorSession {
    pub fn new(model: ModelArtifact) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelArtifact {
        &self.model
    }
}

pub struct Controller;

impl Controller {
    /// The submission boundary: one trigger, one inference call, one
    /// render pass. A failure clears the previous result instead of
    /// leaving it stale.
    pub fn submit(session: &PredictorSession, state: &mut AppState) {
        let input = state.form.to_patient_input();
        let outcome = run(session.model(), &input)
            .map_err(|err| err.to_string())
            .and_then(|result| report(&result, &input).map_err(|err| err.to_string()));

        match outcome {
            Ok(prediction) => {
                state.report = Some(prediction);
                state.last_error = None;
                state.machine.dispatch(UiEvent::SubmissionSucceeded);
            }
            Err(message) => {
                log::error!("submission failed: {message}");
                state.report = None;
                state.last_error = Some(message);
                state.machine.dispatch(UiEvent::SubmissionFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use inference_engine::{LogisticModel, ModelArtifact};

    use super::*;
    use crate::state::UiState;

    fn session_with_weights(count: usize) -> PredictorSession {
        PredictorSession::new(ModelArtifact::Logistic(LogisticModel {
            weights: vec![0.01; count],
            intercept: -2.0,
        }))
    }

    #[test]
    fn successful_submission_presents_a_report() {
        let session = session_with_weights(13);
        let mut state = AppState::default();

        Controller::submit(&session, &mut state);

        assert!(state.report.is_some());
        assert_eq!(state.last_error, None);
        assert_eq!(state.machine.current_state(), UiState::Presenting);
    }

    #[test]
    fn failed_submission_clears_the_previous_result() {
        let good = session_with_weights(13);
        // Wrong arity makes every invocation fail with a shape mismatch.
        let bad = session_with_weights(3);
        let mut state = AppState::default();

        Controller::submit(&good, &mut state);
        assert!(state.report.is_some());

        Controller::submit(&bad, &mut state);

        assert!(state.report.is_none());
        let message = state.last_error.as_deref().unwrap();
        assert_eq!(message, "feature vector has 13 elements, model expects 3");
        assert_eq!(state.machine.current_state(), UiState::AwaitingSubmission);
    }
}
