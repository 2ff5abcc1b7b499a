//! Display formatting and pace classification.

pub mod format;
pub mod pace_class;

pub use format::{
    format_goal_distance, format_goal_outcome, format_interval_row, format_km, format_lap_header,
    format_pace, format_time, PLACEHOLDER,
};
pub use pace_class::{classify_base_lap, classify_lap, Color, PaceClass};
