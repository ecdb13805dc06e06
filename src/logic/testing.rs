//! Scripted in-memory [`TrustApi`] for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::logic::features::FeatureId;
use crate::logic::trust_api::{AssessmentRequest, AuditEntry, HealthResponse, TrustApi};
use crate::logic::verdict::{AssessmentResult, ComponentScores, TrustVerdict};

pub type Outcome = Result<AssessmentResult, TransportError>;

/// Responses are keyed by the request's "mean radius" value, so a test
/// controls exactly which submission each outcome answers and when.
#[derive(Default)]
pub struct ScriptedApi {
    gates: Mutex<HashMap<u64, oneshot::Receiver<Outcome>>>,
    requests: Mutex<Vec<AssessmentRequest>>,
    logs: Mutex<Vec<AuditEntry>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register the request whose mean radius is `key`; send on the returned
    /// handle to resolve it
    pub fn expect(&self, key: u64) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key, rx);
        tx
    }

    pub fn set_logs(&self, entries: Vec<AuditEntry>) {
        *self.logs.lock().unwrap() = entries;
    }

    pub fn requests(&self) -> Vec<AssessmentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrustApi for ScriptedApi {
    async fn assess(&self, request: &AssessmentRequest) -> Result<AssessmentResult, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        let key = request.features.get(mean_radius()) as u64;
        let gate = self.gates.lock().unwrap().remove(&key);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("gate dropped".to_string()))),
            None => Err(TransportError::Network(format!("no scripted response for {}", key))),
        }
    }

    async fn health(&self) -> Result<HealthResponse, TransportError> {
        Ok(HealthResponse {
            status: "healthy".to_string(),
            version: "1.0.0".to_string(),
        })
    }

    async fn recent_logs(&self, limit: usize) -> Result<Vec<AuditEntry>, TransportError> {
        let logs = self.logs.lock().unwrap();
        let skip = logs.len().saturating_sub(limit);
        Ok(logs[skip..].to_vec())
    }
}

pub fn mean_radius() -> FeatureId {
    FeatureId::from_name("mean radius").unwrap()
}

/// A complete verdict as the service would send it
pub fn sample_result(score: f64, label: &str) -> AssessmentResult {
    AssessmentResult {
        trust: TrustVerdict {
            trust_score: score,
            trust_label: Some(label.to_string()),
            recommendation: "Automated decision recommended.".to_string(),
            component_scores: ComponentScores {
                agreement: 0.95,
                uncertainty: 0.88,
                distribution_similarity: 0.4,
            },
        },
        explanation: format!("Trust Level: {} ({}/100).", label, score),
        ..Default::default()
    }
}
