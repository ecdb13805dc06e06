//! Request/Response types for the trust-assessment API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logic::features::FeatureVector;
use crate::logic::verdict::TrustVerdict;

/// Body of `POST /api/assess`: a snapshot of the feature vector taken at
/// submission time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentRequest {
    pub features: FeatureVector,
}

impl AssessmentRequest {
    pub fn snapshot(features: &FeatureVector) -> Self {
        Self {
            features: features.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub version: String,
}

/// One decision from the service's audit log (`GET /api/logs`)
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub model_version: String,
    pub input: Value,
    pub predictions: Value,
    pub trust: TrustVerdict,
}

impl AuditEntry {
    /// Same default-fill policy as assessment bodies
    pub fn from_value(entry: &Value) -> Self {
        let text = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            timestamp: text("timestamp"),
            model_version: text("model_version"),
            input: entry.get("input").cloned().unwrap_or(Value::Null),
            predictions: entry.get("predictions").cloned().unwrap_or(Value::Null),
            trust: entry
                .get("trust")
                .map(TrustVerdict::from_value)
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = AssessmentRequest::snapshot(&FeatureVector::new());
        let body = serde_json::to_value(&request).unwrap();

        let features = body["features"].as_object().unwrap();
        assert_eq!(features.len(), 30);
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_audit_entry_from_value() {
        let entry = AuditEntry::from_value(&json!({
            "timestamp": "2026-01-05T10:00:00",
            "model_version": "v1.0.0-pilot",
            "input": {"mean radius": 14.0},
            "trust": {"trust_score": 55.1, "trust_label": "REVIEW"}
        }));

        assert_eq!(entry.timestamp, "2026-01-05T10:00:00");
        assert_eq!(entry.model_version, "v1.0.0-pilot");
        assert_eq!(entry.predictions, Value::Null);
        assert_eq!(entry.trust.trust_label.as_deref(), Some("REVIEW"));
        assert_eq!(entry.trust.trust_score, 55.1);
    }
}
