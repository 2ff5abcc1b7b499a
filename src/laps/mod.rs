//! Lap model and calculation engine for treadmill interval workouts.

pub mod convert;
pub mod engine;
pub mod increment;
pub mod types;

pub use convert::{average_pace, distance_for, parse_pace, speed_to_pace};
pub use engine::{
    calculate, overview, summarize, GoalOutcome, GoalReached, IntervalRow, LapBreakdown,
    LapReport, LapSummary,
};
pub use increment::{derive_speeds, AutoIncrement, DEFAULT_INCREMENT_STEP};
pub use types::{
    default_base_lap, sanitize, Goal, Interval, IntervalField, LapError, LapPlan, LapTarget,
};
