//! HiitLap - Treadmill Interval Pace Calculator
//!
//! Derives per-interval distance and pace for treadmill HIIT laps, aggregates
//! them across repeated or customized laps, and reports totals with optional
//! goal-distance truncation.

pub mod display;
pub mod export;
pub mod laps;
pub mod storage;

// Re-export commonly used types
pub use laps::engine::{calculate, LapReport};
pub use laps::types::{Goal, Interval, LapPlan};
pub use storage::config::AppConfig;
pub use storage::session::Session;
