//! Assessment Module - request/response lifecycle
//!
//! - `state` - pure transitions over the dashboard state
//! - `controller` - runs dispatches and folds responses back in

pub mod controller;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{AssessmentController, Completion};
pub use state::{reduce, AppState, AssessmentState, Effect, Event, FAILURE_NOTICE};
