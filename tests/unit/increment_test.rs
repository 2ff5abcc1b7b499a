//! Unit tests for the auto-increment speed ladder.

use hiitlap::laps::{AutoIncrement, Interval, LapPlan, LapTarget};

fn ladder_settings(propagate: bool) -> AutoIncrement {
    AutoIncrement {
        enabled: true,
        step: 0.5,
        propagate_to_overrides: propagate,
    }
}

#[test]
fn test_editing_first_speed_derives_ladder() {
    let mut plan = LapPlan::new(vec![Interval::new(1.0, 10.0); 3]);

    let anchor = plan.set_speed(LapTarget::Base, 0, 11.0).unwrap();
    ladder_settings(false).after_speed_edit(&mut plan, anchor);

    let speeds: Vec<f64> = plan.base.iter().map(|it| it.speed).collect();
    assert_eq!(speeds, vec![11.0, 11.5, 12.0]);
}

#[test]
fn test_propagation_follows_setting() {
    let mut plan = LapPlan::new(vec![Interval::new(1.0, 10.0); 2]);
    plan.set_replicate(false);
    plan.set_lap_count(2);

    let anchor = plan.set_speed(LapTarget::Base, 0, 8.0).unwrap();
    ladder_settings(false).after_speed_edit(&mut plan, anchor);
    assert_eq!(plan.overrides[0][1].speed, 10.0);

    let anchor = plan.set_speed(LapTarget::Base, 0, 9.0).unwrap();
    ladder_settings(true).after_speed_edit(&mut plan, anchor);
    assert_eq!(plan.overrides[0][0].speed, 9.0);
    assert_eq!(plan.overrides[1][1].speed, 9.5);
}
