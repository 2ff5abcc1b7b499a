//! Pace classification against a target pace.

use serde::{Deserialize, Serialize};

use crate::laps::convert::parse_pace;
use crate::laps::types::{Interval, LapPlan};

/// Margin either side of the target pace, in minutes per km.
pub const PACE_MARGIN: f64 = 0.15;

/// RGB color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// ANSI 24-bit foreground escape for terminal output.
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// How a pace compares with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceClass {
    /// Faster than the target by more than the margin
    Good,
    /// Within the margin of the target
    Ok,
    /// Slower than the target by more than the margin
    Bad,
}

impl PaceClass {
    /// Classify a pace against a target, both in minutes per km.
    ///
    /// Returns `None` when either value is undefined.
    pub fn classify(pace: Option<f64>, target: Option<f64>) -> Option<Self> {
        let pace = pace.filter(|p| p.is_finite())?;
        let target = target.filter(|t| t.is_finite())?;

        if pace <= target - PACE_MARGIN {
            Some(PaceClass::Good)
        } else if pace <= target + PACE_MARGIN {
            Some(PaceClass::Ok)
        } else {
            Some(PaceClass::Bad)
        }
    }

    /// Classify against a target given as `M:SS` text.
    pub fn classify_text(pace: Option<f64>, target: &str) -> Option<Self> {
        Self::classify(pace, parse_pace(target))
    }

    /// Display color for this class.
    pub fn color(&self) -> Color {
        match self {
            PaceClass::Good => PACE_CLASS_COLORS[0],
            PaceClass::Ok => PACE_CLASS_COLORS[1],
            PaceClass::Bad => PACE_CLASS_COLORS[2],
        }
    }

    /// Style name used by front ends.
    pub fn css_class(&self) -> &'static str {
        match self {
            PaceClass::Good => "pace-good",
            PaceClass::Ok => "pace-ok",
            PaceClass::Bad => "pace-bad",
        }
    }
}

impl std::fmt::Display for PaceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaceClass::Good => write!(f, "good"),
            PaceClass::Ok => write!(f, "ok"),
            PaceClass::Bad => write!(f, "bad"),
        }
    }
}

/// Good / ok / bad colors
pub const PACE_CLASS_COLORS: [Color; 3] = [
    Color::new(0, 200, 100), // Green
    Color::new(255, 200, 0), // Yellow
    Color::new(255, 50, 50), // Red
];

/// Classification of each interval's pace, in order.
pub fn classify_lap(intervals: &[Interval], target: &str) -> Vec<Option<PaceClass>> {
    let target = parse_pace(target);
    intervals
        .iter()
        .map(|interval| PaceClass::classify(interval.pace(), target))
        .collect()
}

/// Classification of every base interval's pace, in order.
pub fn classify_base_lap(plan: &LapPlan, target: &str) -> Vec<Option<PaceClass>> {
    classify_lap(&plan.base, target)
}
