//! Unit tests for configuration and session files.

use hiitlap::laps::{calculate, GoalOutcome, Interval, LapTarget};
use hiitlap::storage::{
    load_config_from, load_session, save_config_to, save_session, AppConfig, Session,
};

#[test]
fn test_session_from_saved_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    let mut config = AppConfig::default();
    config.base_lap = vec![Interval::new(10.0, 12.0)];
    config.defaults.goal_enabled = true;
    config.defaults.goal_distance_km = 1.0;
    save_config_to(&config, &config_path).unwrap();

    let loaded = load_config_from(&config_path).unwrap();
    let session = Session::from_config(&loaded);
    let report = calculate(&session.plan, Some(session.options.goal));

    assert!(matches!(report.goal, GoalOutcome::Reached(_)));
}

#[test]
fn test_session_edits_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.toml");

    let mut session = Session::default();
    session.options.auto_increment.enabled = true;
    let anchor = session.plan.set_speed(LapTarget::Base, 0, 10.0).unwrap();
    session
        .options
        .auto_increment
        .after_speed_edit(&mut session.plan, anchor);
    save_session(&mut session, &path).unwrap();

    let loaded = load_session(&path).unwrap();
    assert_eq!(loaded.plan.base[7].speed, 13.5);
    assert!(loaded.options.auto_increment.enabled);
}

#[test]
fn test_missing_session_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_session(&dir.path().join("nope.toml")).is_err());
}
