//! Lap model types.
//!
//! An [`Interval`] is one constant-speed segment. A [`LapPlan`] holds the base
//! lap, the per-lap overrides and the lap settings that drive aggregation.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::laps::convert::{distance_for, speed_to_pace};

/// Default base lap durations in minutes.
pub const DEFAULT_DURATIONS: [f64; 8] = [2.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0];

/// Default base lap speeds in km/h.
pub const DEFAULT_SPEEDS: [f64; 8] = [9.5, 9.8, 10.0, 10.5, 11.0, 11.5, 12.0, 12.5];

/// Coerce a raw numeric input to a non-negative finite value.
///
/// NaN, infinities and negative numbers all become `0.0`.
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Read a lap count from any numeric value, clamped to at least 1.
///
/// Negative, zero and non-finite counts become 1; fractional counts are
/// truncated.
pub fn deserialize_lap_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCount {
        Int(i64),
        Float(f64),
    }

    let count = match RawCount::deserialize(deserializer)? {
        RawCount::Int(n) => usize::try_from(n.max(1)).unwrap_or(usize::MAX),
        RawCount::Float(x) if x.is_finite() && x >= 1.0 => x.trunc() as usize,
        RawCount::Float(_) => 1,
    };
    Ok(count)
}

/// A single timed segment run at constant speed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    /// Duration in minutes
    pub duration: f64,
    /// Treadmill speed in km/h
    pub speed: f64,
}

impl Interval {
    /// Create an interval from a duration (minutes) and speed (km/h).
    pub fn new(duration: f64, speed: f64) -> Self {
        Self { duration, speed }
    }

    /// Copy of this interval with both fields coerced to non-negative values.
    pub fn sanitized(&self) -> Self {
        Self {
            duration: sanitize(self.duration),
            speed: sanitize(self.speed),
        }
    }

    /// Distance covered in km.
    pub fn distance_km(&self) -> f64 {
        distance_for(self)
    }

    /// Pace in minutes per km, `None` when standing still.
    pub fn pace(&self) -> Option<f64> {
        speed_to_pace(self.speed)
    }
}

/// The eight-interval ladder a fresh plan starts from.
pub fn default_base_lap() -> Vec<Interval> {
    DEFAULT_DURATIONS
        .iter()
        .zip(DEFAULT_SPEEDS.iter())
        .map(|(&duration, &speed)| Interval::new(duration, speed))
        .collect()
}

/// Which field of an interval an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalField {
    Duration,
    Speed,
}

impl std::fmt::Display for IntervalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntervalField::Duration => write!(f, "duration"),
            IntervalField::Speed => write!(f, "speed"),
        }
    }
}

/// Which lap sequence an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LapTarget {
    /// The template lap
    Base,
    /// A lap override, by 0-based lap index
    Override(usize),
}

/// Optional distance goal for an aggregation walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    /// Whether the walk should stop at the target distance
    pub enabled: bool,
    /// Target distance in km
    pub target_distance_km: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            enabled: false,
            target_distance_km: 5.0,
        }
    }
}

impl Goal {
    /// An enabled goal at the given distance.
    pub fn distance(target_distance_km: f64) -> Self {
        Self {
            enabled: true,
            target_distance_km,
        }
    }

    /// A goal only limits the walk when enabled with a positive distance.
    pub fn is_active(&self) -> bool {
        self.enabled && self.target_distance_km > 0.0
    }
}

/// Base lap, per-lap overrides and lap settings.
///
/// Overrides are only consulted when `replicate` is off. While it is on they
/// are kept untouched so switching back restores earlier customization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapPlan {
    /// Number of laps to walk (coerced to at least 1)
    #[serde(deserialize_with = "deserialize_lap_count")]
    pub lap_count: usize,
    /// Repeat the base lap for every lap
    pub replicate: bool,
    /// Template lap
    pub base: Vec<Interval>,
    /// Per-lap interval sequences, indexed by 0-based lap
    #[serde(default)]
    pub overrides: Vec<Vec<Interval>>,
}

impl Default for LapPlan {
    fn default() -> Self {
        Self::new(default_base_lap())
    }
}

impl LapPlan {
    /// Single replicated lap built from the given base lap.
    pub fn new(base: Vec<Interval>) -> Self {
        Self {
            lap_count: 1,
            replicate: true,
            base,
            overrides: Vec::new(),
        }
    }

    /// Lap count as used by the engine, never below 1.
    pub fn effective_lap_count(&self) -> usize {
        self.lap_count.max(1)
    }

    /// Interval sequence walked for the given 0-based lap.
    pub fn lap_intervals(&self, lap: usize) -> &[Interval] {
        if self.replicate {
            return &self.base;
        }
        self.overrides
            .get(lap)
            .map(Vec::as_slice)
            .unwrap_or(&self.base)
    }

    /// Change the lap count, resizing overrides when laps are customized.
    pub fn set_lap_count(&mut self, count: usize) {
        self.lap_count = count.max(1);
        if !self.replicate {
            self.resize_overrides(self.lap_count);
        }
    }

    /// Toggle base lap replication.
    ///
    /// Turning replication off makes sure every lap has an override.
    pub fn set_replicate(&mut self, replicate: bool) {
        self.replicate = replicate;
        if !replicate {
            self.resize_overrides(self.effective_lap_count());
        }
    }

    /// Make the override indices exactly `[0, count)`.
    ///
    /// New slots clone the current base lap. Trailing slots beyond `count` are
    /// dropped and their intervals are gone for good.
    pub fn resize_overrides(&mut self, count: usize) {
        let before = self.overrides.len();
        while self.overrides.len() < count {
            self.overrides.push(self.base.clone());
        }
        self.overrides.truncate(count);
        if before != count {
            tracing::debug!("Resized lap overrides from {} to {}", before, count);
        }
    }

    /// Append a customized lap cloned from the base lap.
    ///
    /// Returns the new lap count.
    pub fn add_lap(&mut self) -> Result<usize, LapError> {
        if self.replicate {
            return Err(LapError::ReplicateEnabled);
        }
        self.overrides.push(self.base.clone());
        self.lap_count = self.overrides.len();
        tracing::info!("Added lap {}", self.lap_count);
        Ok(self.lap_count)
    }

    /// Restore the default base lap and a single replicated lap.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("Lap plan reset to defaults");
    }

    /// Coerce every interval and the lap count into range.
    pub fn sanitize(&mut self) {
        for interval in self
            .base
            .iter_mut()
            .chain(self.overrides.iter_mut().flatten())
        {
            *interval = interval.sanitized();
        }
        self.lap_count = self.effective_lap_count();
        if !self.replicate {
            self.resize_overrides(self.lap_count);
        }
    }

    /// Set an interval's duration in minutes.
    pub fn set_duration(
        &mut self,
        target: LapTarget,
        index: usize,
        minutes: f64,
    ) -> Result<(), LapError> {
        self.interval_mut(target, index)?.duration = sanitize(minutes);
        Ok(())
    }

    /// Set an interval's speed in km/h.
    ///
    /// Returns `true` when the edit hit the first base interval, the anchor of
    /// the auto-increment ladder.
    pub fn set_speed(
        &mut self,
        target: LapTarget,
        index: usize,
        speed_kmh: f64,
    ) -> Result<bool, LapError> {
        self.interval_mut(target, index)?.speed = sanitize(speed_kmh);
        Ok(target == LapTarget::Base && index == 0)
    }

    /// Set either field of an interval.
    pub fn set_field(
        &mut self,
        target: LapTarget,
        index: usize,
        field: IntervalField,
        value: f64,
    ) -> Result<bool, LapError> {
        match field {
            IntervalField::Duration => self.set_duration(target, index, value).map(|()| false),
            IntervalField::Speed => self.set_speed(target, index, value),
        }
    }

    fn interval_mut(&mut self, target: LapTarget, index: usize) -> Result<&mut Interval, LapError> {
        let intervals = match target {
            LapTarget::Base => &mut self.base,
            LapTarget::Override(lap) => self
                .overrides
                .get_mut(lap)
                .ok_or(LapError::LapNotFound(lap))?,
        };
        let len = intervals.len();
        intervals
            .get_mut(index)
            .ok_or(LapError::IntervalNotFound { index, len })
    }
}

/// Errors from editing a lap plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LapError {
    /// No override exists for the lap
    #[error("Lap {0} has no customized intervals")]
    LapNotFound(usize),

    /// Interval index past the end of the lap
    #[error("Interval {index} out of range (lap has {len} intervals)")]
    IntervalNotFound { index: usize, len: usize },

    /// Lap-specific edits need replication turned off
    #[error("Replicate base lap is enabled; disable it to add lap-specific intervals")]
    ReplicateEnabled,
}
