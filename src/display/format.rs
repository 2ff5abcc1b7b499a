//! Text formatting for distances, paces, times and report lines.

use crate::laps::engine::{GoalOutcome, IntervalRow, LapBreakdown};
use crate::laps::types::Goal;

/// Placeholder shown for an undefined pace or an inactive goal.
pub const PLACEHOLDER: &str = "—";

/// Format a distance as `X.XXX km`.
pub fn format_km(km: f64) -> String {
    format!("{:.3} km", km)
}

/// Format a pace as `M:SS /km`, or the placeholder when undefined.
pub fn format_pace(min_per_km: Option<f64>) -> String {
    match min_per_km {
        Some(pace) if pace.is_finite() => {
            let total_seconds = (pace * 60.0).round() as i64;
            format!("{}:{:02} /km", total_seconds / 60, total_seconds % 60)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format minutes as `H:MM:SS`, dropping the hour segment under one hour.
pub fn format_time(total_minutes: f64) -> String {
    let total_seconds = (total_minutes * 60.0).round() as i64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Goal distance line: `X.XX km` when active, placeholder otherwise.
pub fn format_goal_distance(goal: Option<&Goal>) -> String {
    match goal {
        Some(goal) if goal.enabled => format!("{:.2} km", goal.target_distance_km),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Where the goal was reached, `Not reached`, or the placeholder.
pub fn format_goal_outcome(outcome: &GoalOutcome) -> String {
    match outcome {
        GoalOutcome::Inactive => PLACEHOLDER.to_string(),
        GoalOutcome::NotReached => "Not reached".to_string(),
        GoalOutcome::Reached(point) => format!(
            "Lap {}, interval {} — {} (reached {:.3} km)",
            point.lap_number(),
            point.interval_number(),
            format_time(point.minutes),
            point.distance_km
        ),
    }
}

/// Lap header line used in the breakdown.
pub fn format_lap_header(lap: &LapBreakdown) -> String {
    format!(
        "Lap {} — {} — {:.2} min — avg pace: {}",
        lap.index + 1,
        format_km(lap.summary.distance_km),
        lap.summary.minutes,
        format_pace(lap.summary.avg_pace)
    )
}

/// Interval line used in the breakdown.
pub fn format_interval_row(row: &IntervalRow) -> String {
    if row.partial {
        format!(
            "Interval {}: {:.3} min of {} min @ {} km/h → {} (partial)",
            row.index + 1,
            row.minutes,
            row.duration,
            row.speed,
            format_km(row.distance_km)
        )
    } else {
        format!(
            "Interval {}: {} min @ {} km/h → {}",
            row.index + 1,
            row.duration,
            row.speed,
            format_km(row.distance_km)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::laps::engine::{GoalReached, LapSummary};

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(2.0), "2.000 km");
        assert_eq!(format_km(1.0 / 3.0), "0.333 km");
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(Some(5.0)), "5:00 /km");
        assert_eq!(format_pace(Some(5.5)), "5:30 /km");
        assert_eq!(format_pace(Some(60.0 / 9.5)), "6:19 /km");
        assert_eq!(format_pace(None), PLACEHOLDER);
        assert_eq!(format_pace(Some(f64::INFINITY)), PLACEHOLDER);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(125.5), "2:05:30");
        assert_eq!(format_time(45.0), "45:00");
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(60.0), "1:00:00");
        assert_eq!(format_time(5.0 / 60.0), "00:05");
    }

    #[test]
    fn test_format_goal_distance() {
        assert_eq!(format_goal_distance(Some(&Goal::distance(5.0))), "5.00 km");
        assert_eq!(format_goal_distance(Some(&Goal::default())), PLACEHOLDER);
        assert_eq!(format_goal_distance(None), PLACEHOLDER);
    }

    #[test]
    fn test_format_goal_outcome() {
        let reached = GoalOutcome::Reached(GoalReached {
            lap: 0,
            interval: 0,
            minutes: 5.0,
            distance_km: 1.0,
        });
        assert_eq!(
            format_goal_outcome(&reached),
            "Lap 1, interval 1 — 05:00 (reached 1.000 km)"
        );
        assert_eq!(format_goal_outcome(&GoalOutcome::NotReached), "Not reached");
        assert_eq!(format_goal_outcome(&GoalOutcome::Inactive), PLACEHOLDER);
    }

    #[test]
    fn test_format_rows() {
        let full = IntervalRow {
            index: 0,
            duration: 2.0,
            speed: 9.5,
            distance_km: 9.5 * 2.0 / 60.0,
            minutes: 2.0,
            partial: false,
        };
        assert_eq!(
            format_interval_row(&full),
            "Interval 1: 2 min @ 9.5 km/h → 0.317 km"
        );

        let partial = IntervalRow {
            index: 2,
            duration: 10.0,
            speed: 12.0,
            distance_km: 1.0,
            minutes: 5.0,
            partial: true,
        };
        assert_eq!(
            format_interval_row(&partial),
            "Interval 3: 5.000 min of 10 min @ 12 km/h → 1.000 km (partial)"
        );

        let lap = LapBreakdown {
            index: 1,
            summary: LapSummary {
                distance_km: 1.0,
                minutes: 5.0,
                avg_pace: Some(5.0),
            },
            rows: vec![partial],
        };
        assert_eq!(
            format_lap_header(&lap),
            "Lap 2 — 1.000 km — 5.00 min — avg pace: 5:00 /km"
        );
    }
}
