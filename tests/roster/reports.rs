//! Report aggregation

use crate::common::*;
use rosterdb::{course_report, course_reports, overall_report};

#[test]
fn overall_report_on_empty_store_is_none() {
    assert!(overall_report(&RecordStore::new()).is_none());
}

#[test]
fn overall_report_fields() {
    let store = store_with(&[
        (1, "Ann", "CS", [1.0, 1.0, 1.0]),
        (2, "Ben", "Math", [4.0, 4.0, 4.0]),
        (3, "Cal", "Art", [4.0, 4.0, 4.0]),
        (4, "Dee", "Art", [2.5, 2.5, 2.5]),
    ]);
    let report = overall_report(&store).unwrap();
    assert_eq!(report.count, 4);
    assert!((report.mean_gpa - 2.875).abs() < 1e-6);
    // Ben reaches 4.0 first; Cal ties but does not displace him
    assert_eq!(report.best.id, 2);
    assert_eq!(report.worst_gpa, 1.0);
}

#[test]
fn course_counts_sum_to_overall_count() {
    let store = store_with(&[
        (1, "A", "CS", [1.0, 2.0, 3.0]),
        (2, "B", "Math", [2.0, 2.0, 2.0]),
        (3, "C", "cs", [3.0, 3.0, 3.0]),
        (4, "D", "CS", [4.0, 4.0, 4.0]),
    ]);
    let reports = course_reports(&store);
    // Course names are compared exactly, so "cs" is its own group
    assert_eq!(reports.len(), 3);
    let total: usize = reports.iter().map(|r| r.count).sum();
    assert_eq!(total, overall_report(&store).unwrap().count);
}

#[test]
fn single_course_lookup() {
    let store = store_with(&[
        (1, "A", "CS", [1.0, 1.0, 1.0]),
        (2, "B", "CS", [3.0, 3.0, 3.0]),
    ]);
    let cs = course_report(&store, "CS").unwrap();
    assert_eq!(cs.count, 2);
    assert!((cs.mean_gpa - 2.0).abs() < 1e-6);
    assert_eq!(cs.top_performer.id, 2);
    assert!(course_report(&store, "Math").is_none());
}
