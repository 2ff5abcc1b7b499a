//! Auto-increment speed ladder.
//!
//! After the first base interval's speed is edited, every later base interval
//! is re-derived as `first + step * index`. This is a one-shot recompute: later
//! manual edits to those intervals stick until the first speed changes again.

use serde::{Deserialize, Serialize};

use crate::laps::types::LapPlan;

/// Step used when none (or an unusable one) is configured.
pub const DEFAULT_INCREMENT_STEP: f64 = 0.5;

/// Auto-increment settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoIncrement {
    /// Derive the ladder when the first base speed is edited
    pub enabled: bool,
    /// Speed added per interval index, km/h
    pub step: f64,
    /// Also overwrite speeds in existing lap overrides
    pub propagate_to_overrides: bool,
}

impl Default for AutoIncrement {
    fn default() -> Self {
        Self {
            enabled: false,
            step: DEFAULT_INCREMENT_STEP,
            propagate_to_overrides: false,
        }
    }
}

impl AutoIncrement {
    /// The configured step, falling back to the default for zero or invalid values.
    pub fn effective_step(&self) -> f64 {
        if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            DEFAULT_INCREMENT_STEP
        }
    }

    /// Run the ladder after a speed edit.
    ///
    /// `anchor_edited` is the value returned by [`LapPlan::set_speed`]. Returns
    /// whether the plan was re-derived.
    pub fn after_speed_edit(&self, plan: &mut LapPlan, anchor_edited: bool) -> bool {
        if !self.enabled || !anchor_edited {
            return false;
        }
        derive_speeds(plan, self.effective_step(), self.propagate_to_overrides);
        true
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Re-derive base speeds from the first interval's speed.
///
/// With `propagate` set, every override lap takes the new base speeds
/// position by position while keeping its own durations.
pub fn derive_speeds(plan: &mut LapPlan, step: f64, propagate: bool) {
    let Some(first) = plan.base.first().map(|it| it.speed) else {
        return;
    };

    for (i, interval) in plan.base.iter_mut().enumerate().skip(1) {
        interval.speed = round2(first + step * i as f64);
    }

    if propagate {
        for lap in &mut plan.overrides {
            for (interval, base) in lap.iter_mut().zip(plan.base.iter()) {
                interval.speed = base.speed;
            }
        }
    }

    tracing::debug!(
        "Derived speed ladder from {} km/h with step {} (propagate: {})",
        first,
        step,
        propagate
    );
}
