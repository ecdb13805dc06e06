//! Trust API Module - Dashboard to TRUSTSCOPE service communication
//!
//! This module handles:
//! - Trust assessment submission
//! - Service health checks
//! - Audit log retrieval

pub mod client;
pub mod types;

pub use client::{ClientConfig, HttpTrustClient, TrustApi};
pub use types::{AssessmentRequest, AuditEntry, HealthResponse};
