//! Assessment Controller
//!
//! Owns the dashboard state and runs the side effects the reducer asks for.
//! Runs on a single-threaded runtime: requests are spawned as tasks and their
//! outcomes come back as [`Event::ResponseArrived`] on an internal channel.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use super::state::{reduce, AppState, Effect, Event};
use crate::logic::features::FeatureId;
use crate::logic::trust_api::{AssessmentRequest, TrustApi};

/// What applying a response did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Latest request succeeded; a new result is available
    Updated,
    /// Latest request failed; carries the user notice
    Failed(String),
    /// Response to a superseded request, ignored
    Stale,
}

pub struct AssessmentController {
    state: AppState,
    api: Arc<dyn TrustApi>,
    events_tx: mpsc::UnboundedSender<Event>,
    events_rx: mpsc::UnboundedReceiver<Event>,
}

impl AssessmentController {
    pub fn new(api: Arc<dyn TrustApi>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            api,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A request is outstanding
    pub fn is_busy(&self) -> bool {
        self.state.assessment.in_flight
    }

    /// Record raw input for one feature
    pub fn set_value(&mut self, feature: FeatureId, raw: &str) {
        self.apply(Event::FeatureEdited {
            feature,
            raw: raw.to_string(),
        });
    }

    /// Fire-and-forget submission of the current feature vector.
    ///
    /// Not guarded: calling this while busy issues another request and the
    /// earlier one's response will be discarded as stale.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) {
        self.apply(Event::SubmitRequested);
    }

    /// Wait for the next response and fold it into the state.
    ///
    /// Pending forever when nothing is in flight.
    pub async fn next_completion(&mut self) -> Completion {
        let event = match self.events_rx.recv().await {
            Some(event) => event,
            // We hold a sender, so the channel never closes
            None => return std::future::pending().await,
        };

        let current = match &event {
            Event::ResponseArrived { generation, .. } => self.state.assessment.is_current(*generation),
            _ => true,
        };

        match self.apply(event) {
            Some(Effect::Notify(notice)) => Completion::Failed(notice),
            _ if current => Completion::Updated,
            _ => Completion::Stale,
        }
    }

    fn apply(&mut self, event: Event) -> Option<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effect) = reduce(state, event);
        self.state = state;

        match effect {
            Some(Effect::Dispatch { generation, request }) => {
                self.dispatch(generation, request);
                None
            }
            Some(Effect::Notify(notice)) => {
                log::error!("{}", notice);
                Some(Effect::Notify(notice))
            }
            None => None,
        }
    }

    fn dispatch(&self, generation: u64, request: AssessmentRequest) {
        log::debug!("Dispatching assessment #{}", generation);

        let api = Arc::clone(&self.api);
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = api.assess(&request).await;
            let event = Event::ResponseArrived {
                generation,
                outcome,
                received_at: Utc::now(),
            };
            if events_tx.send(event).is_err() {
                log::debug!("Controller gone; dropping response #{}", generation);
            }
        });
    }
}
