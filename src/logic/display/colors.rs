//! Signal colors and the thresholds that pick them

use std::fmt;

use serde::Serialize;

/// Agreement / certainty above this are green
pub const CONFIDENCE_THRESHOLD: f64 = 0.7;

/// p-value style cutoff for distribution similarity
pub const SIMILARITY_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Amber,
    Red,
}

impl Color {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Green => "#10b981",
            Self::Amber => "#f59e0b",
            Self::Red => "#ef4444",
        }
    }

    /// 24-bit ANSI foreground escape for terminal output
    pub fn ansi(self) -> &'static str {
        match self {
            Self::Green => "\x1b[38;2;16;185;129m",
            Self::Amber => "\x1b[38;2;245;158;11m",
            Self::Red => "\x1b[38;2;239;68;68m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Gauge color for a trust label.
///
/// Total over all inputs: only SAFE and REVIEW (any case) escape red.
pub fn score_color(label: Option<&str>) -> Color {
    match label.map(str::to_uppercase).as_deref() {
        Some("SAFE") => Color::Green,
        Some("REVIEW") => Color::Amber,
        _ => Color::Red,
    }
}

/// Agreement and certainty signals
pub fn confidence_color(score: f64) -> Color {
    if score > CONFIDENCE_THRESHOLD {
        Color::Green
    } else {
        Color::Amber
    }
}

pub fn similarity_color(p_value: f64) -> Color {
    if p_value > SIMILARITY_THRESHOLD {
        Color::Green
    } else {
        Color::Red
    }
}
