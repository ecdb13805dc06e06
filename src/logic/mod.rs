//! Logic Module - Dashboard core
//!
//! - `features/` - Feature Store (the 30 named inputs)
//! - `trust_api/` - HTTP client for the trust-assessment service
//! - `verdict` - response normalization with defaults
//! - `assessment/` - request lifecycle (reducer + controller)
//! - `display/` - verdict to color-coded signals
//! - `dashboard` - interactive terminal session

pub mod assessment;
pub mod dashboard;
pub mod display;
pub mod features;
pub mod trust_api;
pub mod verdict;

#[cfg(test)]
pub mod testing;
