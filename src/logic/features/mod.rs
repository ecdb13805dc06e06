//! Features Module - Feature Store
//!
//! Named diagnostic measurements entered by the operator and sent with
//! every assessment.

pub mod layout;
pub mod vector;


pub use layout::{FeatureId, FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::FeatureVector;
