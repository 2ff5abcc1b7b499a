//! Unit tests for display formatting and pace classification.

use hiitlap::display::{format_km, format_pace, format_time, PaceClass, PLACEHOLDER};
use hiitlap::laps::{parse_pace, speed_to_pace};

#[test]
fn test_pace_strings() {
    assert_eq!(format_pace(Some(5.0)), "5:00 /km");
    assert_eq!(format_pace(Some(5.5)), "5:30 /km");
    assert_eq!(format_pace(speed_to_pace(0.0)), PLACEHOLDER);
}

#[test]
fn test_time_strings() {
    assert_eq!(format_time(125.5), "2:05:30");
    assert_eq!(format_time(45.0), "45:00");
}

#[test]
fn test_distance_strings() {
    assert_eq!(format_km(0.0), "0.000 km");
    assert_eq!(format_km(12.3456), "12.346 km");
}

#[test]
fn test_formatted_pace_parses_back() {
    assert_eq!(parse_pace(&format_pace(Some(5.5))), Some(5.5));
    assert_eq!(parse_pace(&format_pace(Some(4.0))), Some(4.0));
}

#[test]
fn test_classification_with_text_target() {
    assert_eq!(
        PaceClass::classify_text(speed_to_pace(12.0), "5:30"),
        Some(PaceClass::Good)
    );
    assert_eq!(
        PaceClass::classify_text(speed_to_pace(11.0), "5:30"),
        Some(PaceClass::Ok)
    );
    assert_eq!(
        PaceClass::classify_text(speed_to_pace(10.0), "5:30"),
        Some(PaceClass::Bad)
    );
    assert_eq!(PaceClass::classify_text(speed_to_pace(10.0), ""), None);
    assert_eq!(PaceClass::classify_text(speed_to_pace(0.0), "5:30"), None);
}
