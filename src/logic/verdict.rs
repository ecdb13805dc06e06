//! Trust Verdict - typed response envelope
//!
//! The service response is not schema-validated before display. Instead every
//! body goes through [`AssessmentResult::from_value`] once, which fills every
//! missing or mistyped field with a conservative default. Nothing downstream
//! handles optional verdict fields.

use serde::Serialize;
use serde_json::Value;

/// Three sub-signals behind the overall score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentScores {
    pub agreement: f64,
    pub uncertainty: f64,
    pub distribution_similarity: f64,
}

/// The service's judgment on whether a prediction can be trusted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrustVerdict {
    /// Nominally 0-100, not bounded by the service
    pub trust_score: f64,
    /// `None` when absent, not a string, or empty
    pub trust_label: Option<String>,
    pub recommendation: String,
    pub component_scores: ComponentScores,
}

/// Full envelope returned by `POST /api/assess`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssessmentResult {
    pub trust: TrustVerdict,
    pub explanation: String,
    /// Per-model predictions, passed through uninterpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Value>,
    /// Raw uncertainty report, passed through uninterpreted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signals: Option<Value>,
}

impl AssessmentResult {
    /// Normalize any JSON body into a fully populated result. Never fails.
    pub fn from_value(body: &Value) -> Self {
        Self {
            trust: body.get("trust").map(TrustVerdict::from_value).unwrap_or_default(),
            explanation: string_or_empty(body.get("explanation")),
            prediction: body.get("prediction").filter(|v| !v.is_null()).cloned(),
            signals: body.get("signals").filter(|v| !v.is_null()).cloned(),
        }
    }
}

impl TrustVerdict {
    pub fn from_value(trust: &Value) -> Self {
        let scores = trust.get("component_scores");

        Self {
            trust_score: number_or_zero(trust.get("trust_score")),
            trust_label: trust
                .get("trust_label")
                .and_then(Value::as_str)
                .filter(|label| !label.is_empty())
                .map(str::to_string),
            recommendation: string_or_empty(trust.get("recommendation")),
            component_scores: ComponentScores {
                agreement: number_or_zero(scores.and_then(|s| s.get("agreement"))),
                uncertainty: number_or_zero(scores.and_then(|s| s.get("uncertainty"))),
                distribution_similarity: number_or_zero(
                    scores.and_then(|s| s.get("distribution_similarity")),
                ),
            },
        }
    }
}

fn number_or_zero(value: Option<&Value>) -> f64 {
    value
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

fn string_or_empty(value: Option<&Value>) -> String {
    value.and_then(Value::as_str).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_envelope() {
        let body = json!({
            "prediction": {"rf": 0.93, "mlp": 0.91},
            "trust": {
                "trust_score": 87.25,
                "trust_label": "SAFE",
                "recommendation": "Automated decision recommended.",
                "component_scores": {
                    "agreement": 0.9876,
                    "uncertainty": 0.81,
                    "distribution_similarity": 0.42
                }
            },
            "explanation": "Trust Level: SAFE (87.25/100).",
            "signals": {"total_uncertainty_score": 0.19}
        });

        let result = AssessmentResult::from_value(&body);
        assert_eq!(result.trust.trust_score, 87.25);
        assert_eq!(result.trust.trust_label.as_deref(), Some("SAFE"));
        assert_eq!(result.trust.recommendation, "Automated decision recommended.");
        assert_eq!(result.trust.component_scores.agreement, 0.9876);
        assert_eq!(result.trust.component_scores.uncertainty, 0.81);
        assert_eq!(result.trust.component_scores.distribution_similarity, 0.42);
        assert_eq!(result.explanation, "Trust Level: SAFE (87.25/100).");
        assert_eq!(result.prediction, Some(json!({"rf": 0.93, "mlp": 0.91})));
        assert!(result.signals.is_some());
    }

    #[test]
    fn test_error_body_degrades_to_defaults() {
        // FastAPI error shape: no trust block at all
        let result = AssessmentResult::from_value(&json!({"detail": "System not initialized."}));
        assert_eq!(result, AssessmentResult::default());
        assert_eq!(result.trust.trust_label, None);
        assert_eq!(result.trust.trust_score, 0.0);
    }

    #[test]
    fn test_mistyped_fields_default() {
        let body = json!({
            "trust": {
                "trust_score": "92",
                "trust_label": 7,
                "recommendation": null,
                "component_scores": [0.9, 0.9, 0.9]
            },
            "explanation": {"text": "nested"}
        });

        let result = AssessmentResult::from_value(&body);
        assert_eq!(result.trust, TrustVerdict::default());
        assert_eq!(result.explanation, "");
    }

    #[test]
    fn test_empty_label_is_absent() {
        let result = AssessmentResult::from_value(&json!({"trust": {"trust_label": ""}}));
        assert_eq!(result.trust.trust_label, None);
    }

    #[test]
    fn test_non_object_bodies() {
        for body in [json!(null), json!([1, 2]), json!("SAFE"), json!(42)] {
            assert_eq!(AssessmentResult::from_value(&body), AssessmentResult::default());
        }
    }

    #[test]
    fn test_out_of_range_scores_kept() {
        let body = json!({"trust": {"trust_score": 140.0, "component_scores": {"agreement": -0.2}}});
        let result = AssessmentResult::from_value(&body);
        assert_eq!(result.trust.trust_score, 140.0);
        assert_eq!(result.trust.component_scores.agreement, -0.2);
    }
}
