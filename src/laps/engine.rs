//! Lap aggregation engine.
//!
//! Walks laps and their intervals in order, accumulating distance and time
//! across the whole workout. With an active distance goal the walk stops
//! inside the interval where the goal is crossed, consuming only the fraction
//! of that interval needed to reach it.

use serde::{Deserialize, Serialize};

use crate::laps::convert::{average_pace, distance_for};
use crate::laps::types::{Goal, Interval, LapPlan};

/// Totals for a sequence of intervals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LapSummary {
    /// Distance in km
    pub distance_km: f64,
    /// Time in minutes
    pub minutes: f64,
    /// Average pace in min/km (`None` with no distance)
    pub avg_pace: Option<f64>,
}

impl LapSummary {
    fn from_totals(distance_km: f64, minutes: f64) -> Self {
        Self {
            distance_km,
            minutes,
            avg_pace: average_pace(minutes, distance_km),
        }
    }
}

/// One walked interval in the lap breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalRow {
    /// 0-based interval index within the lap
    pub index: usize,
    /// Planned duration in minutes
    pub duration: f64,
    /// Speed in km/h
    pub speed: f64,
    /// Distance covered in km (partial distance when truncated)
    pub distance_km: f64,
    /// Minutes actually run (partial duration when truncated)
    pub minutes: f64,
    /// The goal was reached inside this interval
    pub partial: bool,
}

/// Per-lap results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapBreakdown {
    /// 0-based lap index
    pub index: usize,
    /// Lap distance, time and average pace
    pub summary: LapSummary,
    /// Walked intervals in order
    pub rows: Vec<IntervalRow>,
}

/// Where the distance goal was first met.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalReached {
    /// 0-based lap index
    pub lap: usize,
    /// 0-based interval index
    pub interval: usize,
    /// Cumulative minutes at the goal point
    pub minutes: f64,
    /// Cumulative distance at the goal point (equals the goal)
    pub distance_km: f64,
}

impl GoalReached {
    /// 1-based lap number for display.
    pub fn lap_number(&self) -> usize {
        self.lap + 1
    }

    /// 1-based interval number for display.
    pub fn interval_number(&self) -> usize {
        self.interval + 1
    }
}

/// Result of checking the walk against the distance goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum GoalOutcome {
    /// No goal was set
    Inactive,
    /// Goal met at the given point
    Reached(GoalReached),
    /// The lap set cannot cover the goal distance
    NotReached,
}

/// Full output of one aggregation walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LapReport {
    /// Totals over the walk (truncated at the goal if reached)
    pub total: LapSummary,
    /// Walked laps in order
    pub laps: Vec<LapBreakdown>,
    /// Goal check result
    pub goal: GoalOutcome,
    /// Totals for the base lap alone
    pub base: LapSummary,
}

/// Totals for a single sequence of intervals.
pub fn summarize(intervals: &[Interval]) -> LapSummary {
    let distance_km = intervals.iter().map(distance_for).sum();
    let minutes = intervals.iter().map(|it| it.duration).sum();
    LapSummary::from_totals(distance_km, minutes)
}

/// Totals for the full lap set, ignoring any goal.
pub fn overview(plan: &LapPlan) -> LapSummary {
    let mut distance_km = 0.0;
    let mut minutes = 0.0;
    for lap in 0..plan.effective_lap_count() {
        for interval in plan.lap_intervals(lap) {
            distance_km += distance_for(interval);
            minutes += interval.duration;
        }
    }
    LapSummary::from_totals(distance_km, minutes)
}

/// Aggregate a lap plan, truncating at the goal distance when one is active.
///
/// Pure over its inputs: calling it twice with the same plan and goal yields
/// identical reports.
pub fn calculate(plan: &LapPlan, goal: Option<Goal>) -> LapReport {
    let goal_km = goal
        .filter(Goal::is_active)
        .map(|g| g.target_distance_km);

    let mut total_km = 0.0;
    let mut total_minutes = 0.0;
    let mut laps = Vec::new();
    let mut reached = None;

    for lap in 0..plan.effective_lap_count() {
        let mut lap_km = 0.0;
        let mut lap_minutes = 0.0;
        let mut rows = Vec::new();

        for (index, interval) in plan.lap_intervals(lap).iter().enumerate() {
            let km = distance_for(interval);

            if let Some(target) = goal_km {
                // Zero-distance intervals can never be the crossing point
                if km > 0.0 && total_km + km >= target {
                    let remaining_km = target - total_km;
                    let fraction = remaining_km / km;
                    let partial_minutes = interval.duration * fraction;

                    lap_km += remaining_km;
                    lap_minutes += partial_minutes;
                    total_km += remaining_km;
                    total_minutes += partial_minutes;
                    rows.push(IntervalRow {
                        index,
                        duration: interval.duration,
                        speed: interval.speed,
                        distance_km: remaining_km,
                        minutes: partial_minutes,
                        partial: true,
                    });
                    reached = Some(GoalReached {
                        lap,
                        interval: index,
                        minutes: total_minutes,
                        distance_km: total_km,
                    });
                    tracing::debug!(
                        "Goal of {:.3} km reached in lap {} interval {} ({:.1}% of interval)",
                        target,
                        lap + 1,
                        index + 1,
                        fraction * 100.0
                    );
                    break;
                }
            }

            lap_km += km;
            lap_minutes += interval.duration;
            total_km += km;
            total_minutes += interval.duration;
            rows.push(IntervalRow {
                index,
                duration: interval.duration,
                speed: interval.speed,
                distance_km: km,
                minutes: interval.duration,
                partial: false,
            });
        }

        laps.push(LapBreakdown {
            index: lap,
            summary: LapSummary::from_totals(lap_km, lap_minutes),
            rows,
        });

        if reached.is_some() {
            break;
        }
    }

    let goal = match (goal_km, reached) {
        (None, _) => GoalOutcome::Inactive,
        (Some(_), Some(point)) => GoalOutcome::Reached(point),
        (Some(_), None) => GoalOutcome::NotReached,
    };

    tracing::debug!(
        "Calculated {} laps: {:.3} km in {:.2} min",
        laps.len(),
        total_km,
        total_minutes
    );

    LapReport {
        total: LapSummary::from_totals(total_km, total_minutes),
        laps,
        goal,
        base: summarize(&plan.base),
    }
}
