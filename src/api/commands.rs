//! Dashboard Commands
//!
//! Operations behind the command-line surface. Each returns plain
//! serializable data; formatting is left to the caller.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{FeatureError, TransportError};
use crate::logic::assessment::{AssessmentController, Completion};
use crate::logic::display::{render, score_color, Color, DisplayModel};
use crate::logic::features::{FeatureId, FeatureVector};
use crate::logic::trust_api::{HealthResponse, TrustApi};
use crate::logic::verdict::AssessmentResult;

/// `<feature>=<value>` from the command line. The value stays raw so it goes
/// through the same parsing as form input.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureAssignment {
    pub feature: FeatureId,
    pub raw: String,
}

impl FromStr for FeatureAssignment {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = s
            .split_once('=')
            .ok_or_else(|| FeatureError::BadAssignment(s.to_string()))?;

        Ok(Self {
            feature: FeatureId::resolve(name)?,
            raw: raw.trim().to_string(),
        })
    }
}

/// Outcome of a one-shot assessment
#[derive(Debug, Clone, Serialize)]
pub struct AssessReport {
    pub display: DisplayModel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AssessmentResult>,
    /// Failure notice, if the request did not complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Apply `assignments` over the defaults, submit once, wait for the answer
pub async fn run_assessment(api: Arc<dyn TrustApi>, assignments: &[FeatureAssignment]) -> AssessReport {
    let mut controller = AssessmentController::new(api);
    for assignment in assignments {
        controller.set_value(assignment.feature, &assignment.raw);
    }

    controller.submit();
    let notice = loop {
        match controller.next_completion().await {
            Completion::Updated => break None,
            Completion::Failed(notice) => break Some(notice),
            Completion::Stale => continue,
        }
    };

    let result = controller.state().assessment.last_result.clone();
    AssessReport {
        display: render(result.as_ref()),
        result,
        notice,
    }
}

pub async fn check_health(api: &dyn TrustApi) -> Result<HealthResponse, TransportError> {
    let health = api.health().await?;
    log::info!("Trust service {} (version {})", health.status, health.version);
    Ok(health)
}

/// One past decision, reduced to what the log table shows
#[derive(Debug, Clone, Serialize)]
pub struct LogRow {
    pub timestamp: String,
    pub model_version: String,
    pub label: String,
    pub score: f64,
    pub color: Color,
}

impl fmt::Display for LogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:<7} {:>6.2}  {}",
            self.timestamp, self.label, self.score, self.model_version
        )
    }
}

pub async fn recent_decisions(api: &dyn TrustApi, limit: usize) -> Result<Vec<LogRow>, TransportError> {
    let entries = api.recent_logs(limit).await?;
    log::debug!("Fetched {} audit entries", entries.len());

    Ok(entries
        .into_iter()
        .map(|entry| LogRow {
            color: score_color(entry.trust.trust_label.as_deref()),
            label: entry.trust.trust_label.unwrap_or_else(|| "ERROR".to_string()),
            score: entry.trust.trust_score,
            timestamp: entry.timestamp,
            model_version: entry.model_version,
        })
        .collect())
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureRow {
    /// 1-based form position, for editable fields only
    pub position: Option<usize>,
    pub name: &'static str,
    pub value: f64,
}

pub fn feature_table(features: &FeatureVector) -> Vec<FeatureRow> {
    FeatureId::all()
        .map(|id| FeatureRow {
            position: id.is_editable().then(|| id.index() + 1),
            name: id.name(),
            value: features.get(id),
        })
        .collect()
}
