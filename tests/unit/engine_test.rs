//! Unit tests for lap aggregation and goal truncation.

use hiitlap::laps::{
    calculate, distance_for, overview, speed_to_pace, Goal, GoalOutcome, Interval, LapPlan,
    LapTarget,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn one_interval_plan() -> LapPlan {
    LapPlan::new(vec![Interval::new(10.0, 12.0)])
}

#[test]
fn test_distance_matches_formula() {
    for &(duration, speed) in &[(10.0, 12.0), (0.0, 9.5), (2.5, 0.0), (1.0, 13.7)] {
        let interval = Interval::new(duration, speed);
        assert!(approx(distance_for(&interval), speed * duration / 60.0));
    }
}

#[test]
fn test_pace_for_positive_speeds_only() {
    for speed in [6.0, 9.5, 12.0, 20.0] {
        assert_eq!(speed_to_pace(speed), Some(60.0 / speed));
    }
    assert_eq!(speed_to_pace(0.0), None);
}

#[test]
fn test_goal_reached_at_half_interval() {
    let report = calculate(&one_interval_plan(), Some(Goal::distance(1.0)));

    match report.goal {
        GoalOutcome::Reached(point) => {
            assert_eq!(point.lap_number(), 1);
            assert_eq!(point.interval_number(), 1);
            assert!(approx(point.minutes, 5.0));
            assert!(approx(point.distance_km, 1.0));
        }
        other => panic!("Expected goal reached, got {:?}", other),
    }
}

#[test]
fn test_goal_unreachable_keeps_totals() {
    let report = calculate(&one_interval_plan(), Some(Goal::distance(5.0)));

    assert_eq!(report.goal, GoalOutcome::NotReached);
    assert!(approx(report.total.distance_km, 2.0));
    assert!(approx(report.total.minutes, 10.0));
}

#[test]
fn test_calculate_is_idempotent() {
    let mut plan = LapPlan::default();
    plan.set_replicate(false);
    plan.set_lap_count(3);
    plan.set_speed(LapTarget::Override(1), 2, 13.0).unwrap();
    let goal = Some(Goal::distance(4.2));

    assert_eq!(calculate(&plan, goal), calculate(&plan, goal));
}

#[test]
fn test_replicated_lap_totals() {
    let mut plan = LapPlan::new(vec![Interval::new(2.0, 10.0)]);
    plan.set_lap_count(3);
    let report = calculate(&plan, None);

    assert!(approx(report.total.distance_km, 3.0 * (10.0 * 2.0 / 60.0)));
    assert!(approx(report.total.minutes, 6.0));
    assert_eq!(report.goal, GoalOutcome::Inactive);
}

#[test]
fn test_overrides_used_only_without_replication() {
    let mut plan = LapPlan::new(vec![Interval::new(6.0, 10.0)]);
    plan.set_replicate(false);
    plan.set_lap_count(2);
    plan.set_speed(LapTarget::Override(1), 0, 20.0).unwrap();

    let custom = calculate(&plan, None);
    assert!(approx(custom.laps[0].summary.distance_km, 1.0));
    assert!(approx(custom.laps[1].summary.distance_km, 2.0));

    plan.set_replicate(true);
    let replicated = calculate(&plan, None);
    assert!(approx(replicated.laps[1].summary.distance_km, 1.0));
}

#[test]
fn test_overview_ignores_goal() {
    let mut plan = one_interval_plan();
    plan.set_lap_count(2);

    let truncated = calculate(&plan, Some(Goal::distance(1.0)));
    let full = overview(&plan);

    assert!(approx(truncated.total.distance_km, 1.0));
    assert!(approx(full.distance_km, 4.0));
    assert!(approx(full.minutes, 20.0));
    assert!(approx(full.avg_pace.unwrap(), 5.0));
}

#[test]
fn test_base_summary_reported() {
    let report = calculate(&LapPlan::default(), None);
    let expected: f64 = LapPlan::default().base.iter().map(distance_for).sum();

    assert!(approx(report.base.distance_km, expected));
    assert!(approx(report.base.minutes, 10.0));
}
