//! Unit tests for CSV export.

use hiitlap::export::{export_csv, export_csv_to_file, CSV_HEADER};
use hiitlap::laps::{Interval, LapPlan};

#[test]
fn test_export_full_lap_set() {
    let mut plan = LapPlan::new(vec![Interval::new(2.0, 10.0), Interval::new(1.0, 12.0)]);
    plan.set_lap_count(3);

    let csv = export_csv(&plan).unwrap();
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 1 + 3 * 2);
    assert_eq!(lines[1], "1,1,2,10,0.333333");
    assert_eq!(lines[6], "3,2,1,12,0.200000");
}

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("laps.csv");

    export_csv_to_file(&LapPlan::default(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 9);
}
