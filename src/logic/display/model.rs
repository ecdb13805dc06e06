//! Display Model - verdict to visual attributes
//!
//! [`render`] is a pure function of its input. Every field of the verdict has
//! already been defaulted at the response boundary, so nothing here can fail.

use std::fmt::{self, Write as _};

use serde::Serialize;

use super::colors::{confidence_color, score_color, similarity_color, Color};
use crate::logic::verdict::AssessmentResult;

pub const PLACEHOLDER_PROMPT: &str = "Configure features and run assessment to view trust analytics.";
pub const NO_EXPLANATION: &str = "No explanation available.";
pub const NO_RECOMMENDATION: &str = "Consult system logs.";
pub const MISSING_LABEL: &str = "ERROR";
const FALLBACK_BADGE_CLASS: &str = "unsafe";

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DisplayModel {
    /// No assessment has completed yet
    Placeholder { prompt: String },
    Verdict(VerdictDisplay),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictDisplay {
    pub gauge: Gauge,
    pub badge: Badge,
    pub explanation: String,
    pub recommendation: String,
    pub signals: [Signal; 3],
}

/// Score ring. Only the ring fill is clamped: an out-of-range score such as
/// 130 is still printed as 130 so the operator sees what the service sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gauge {
    /// Rounded trust score as displayed, not clamped
    pub value: i64,
    /// Ring fill, clamped to 0..=100
    pub fill: u8,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Agreement,
    Certainty,
    Similarity,
}

impl SignalKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Agreement => "Agreement",
            Self::Certainty => "Certainty",
            Self::Similarity => "Similarity",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            Self::Agreement => "Cross-model consistency",
            Self::Certainty => "Ensemble confidence level",
            Self::Similarity => "Dist. match (p-value)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub percent: i64,
    pub text: String,
    pub color: Color,
}

impl Signal {
    fn new(kind: SignalKind, score: f64, color: Color) -> Self {
        let percent = round_half_up(score * 100.0);
        Self {
            kind,
            percent,
            text: format!("{}%", percent),
            color,
        }
    }
}

/// Map the latest result (if any) to what the dashboard shows
pub fn render(result: Option<&AssessmentResult>) -> DisplayModel {
    let Some(result) = result else {
        return DisplayModel::Placeholder {
            prompt: PLACEHOLDER_PROMPT.to_string(),
        };
    };

    let trust = &result.trust;
    let label = trust.trust_label.as_deref();
    let scores = &trust.component_scores;
    let value = round_half_up(trust.trust_score);

    DisplayModel::Verdict(VerdictDisplay {
        gauge: Gauge {
            value,
            fill: value.clamp(0, 100) as u8,
            color: score_color(label),
        },
        badge: Badge {
            text: label.unwrap_or(MISSING_LABEL).to_string(),
            class: format!("badge-{}", label.unwrap_or(FALLBACK_BADGE_CLASS).to_lowercase()),
        },
        explanation: non_empty_or(&result.explanation, NO_EXPLANATION),
        recommendation: non_empty_or(&trust.recommendation, NO_RECOMMENDATION),
        signals: [
            Signal::new(SignalKind::Agreement, scores.agreement, confidence_color(scores.agreement)),
            Signal::new(SignalKind::Certainty, scores.uncertainty, confidence_color(scores.uncertainty)),
            Signal::new(
                SignalKind::Similarity,
                scores.distribution_similarity,
                similarity_color(scores.distribution_similarity),
            ),
        ],
    })
}

/// Round half toward positive infinity: 2.5 -> 3, -2.5 -> -2
pub fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

fn non_empty_or(text: &str, fallback: &str) -> String {
    let chosen = if text.is_empty() { fallback } else { text };
    chosen.to_string()
}

impl DisplayModel {
    /// Terminal rendering; `ansi` paints colored elements
    pub fn to_terminal(&self, ansi: bool) -> String {
        let paint = |color: Color, text: &str| {
            if ansi {
                format!("{}{}{}", color.ansi(), text, ANSI_RESET)
            } else {
                format!("{} [{}]", text, color.hex())
            }
        };

        let mut out = String::new();
        match self {
            Self::Placeholder { prompt } => {
                let _ = writeln!(out, "  {}", prompt);
            }
            Self::Verdict(v) => {
                let _ = writeln!(
                    out,
                    "  Trust score: {}   {}",
                    paint(v.gauge.color, &v.gauge.value.to_string()),
                    paint(v.gauge.color, &v.badge.text),
                );
                let _ = writeln!(out, "  {}", v.explanation);
                let _ = writeln!(out, "  Recommendation: {}", v.recommendation);
                let _ = writeln!(out);
                for signal in &v.signals {
                    let _ = writeln!(
                        out,
                        "  {:<11} {}  {}",
                        signal.kind.title(),
                        paint(signal.color, &format!("{:>4}", signal.text)),
                        signal.kind.caption(),
                    );
                }
            }
        }
        out
    }
}

impl fmt::Display for DisplayModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_terminal(false))
    }
}
