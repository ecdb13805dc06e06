//! Assessment State - reducer-style transitions
//!
//! Every mutation of dashboard state goes through [`reduce`]. It is pure:
//! network calls and user notices are returned as an [`Effect`] for the
//! controller to carry out.

use chrono::{DateTime, Utc};

use crate::error::TransportError;
use crate::logic::features::{FeatureId, FeatureVector};
use crate::logic::trust_api::AssessmentRequest;
use crate::logic::verdict::AssessmentResult;

/// Notice shown when an assessment cannot be completed
pub const FAILURE_NOTICE: &str = "Failed to connect to TRUSTSCOPE backend";

/// Controller-owned request state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentState {
    pub in_flight: bool,
    /// Sequence number of the most recently issued request (0 = none yet)
    pub generation: u64,
    /// Replaced only by a successful response to the latest request
    pub last_result: Option<AssessmentResult>,
    pub last_completed_at: Option<DateTime<Utc>>,
}

impl AssessmentState {
    /// Whether a response tagged `generation` answers the latest request
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// Whole dashboard state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub features: FeatureVector,
    pub assessment: AssessmentState,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Raw text typed into a feature field
    FeatureEdited { feature: FeatureId, raw: String },
    SubmitRequested,
    ResponseArrived {
        generation: u64,
        outcome: Result<AssessmentResult, TransportError>,
        received_at: DateTime<Utc>,
    },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send `request` to the service, tagged with `generation`
    Dispatch { generation: u64, request: AssessmentRequest },
    /// Show a failure notice to the user
    Notify(String),
}

pub fn reduce(mut state: AppState, event: Event) -> (AppState, Option<Effect>) {
    match event {
        Event::FeatureEdited { feature, raw } => {
            state.features.set_value(feature, &raw);
            (state, None)
        }

        Event::SubmitRequested => {
            state.assessment.generation += 1;
            state.assessment.in_flight = true;
            let effect = Effect::Dispatch {
                generation: state.assessment.generation,
                request: AssessmentRequest::snapshot(&state.features),
            };
            (state, Some(effect))
        }

        Event::ResponseArrived { generation, .. } if !state.assessment.is_current(generation) => {
            log::debug!(
                "Discarding response #{} (latest is #{})",
                generation,
                state.assessment.generation
            );
            (state, None)
        }

        Event::ResponseArrived { outcome, received_at, .. } => {
            state.assessment.in_flight = false;
            match outcome {
                Ok(result) => {
                    state.assessment.last_result = Some(result);
                    state.assessment.last_completed_at = Some(received_at);
                    (state, None)
                }
                Err(e) => (state, Some(Effect::Notify(format!("{}: {}", FAILURE_NOTICE, e)))),
            }
        }
    }
}
