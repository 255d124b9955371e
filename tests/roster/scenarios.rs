//! End-to-end scenarios

use crate::common::*;
use rosterdb::{course_reports, overall_report};

#[test]
fn insert_duplicate_then_remove() {
    let mut store = RecordStore::new();
    store
        .insert(student(1, "Alice", "CS", [4.0, 3.5, 3.0]))
        .unwrap();
    assert_eq!(store.find_by_id(1).unwrap().gpa(), 3.5);

    let err = store
        .insert(student(1, "Alice", "CS", [1.0, 1.0, 1.0]))
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId(1)));
    assert_eq!(store.len(), 1);

    store.remove(1).unwrap();
    assert_eq!(store.len(), 0);
    assert!(store.find_by_id(1).is_none());
}

#[test]
fn course_reports_follow_first_appearance() {
    let store = store_with(&[
        (1, "Ann", "CS", [3.0, 3.0, 3.0]),
        (2, "Ben", "Math", [2.0, 2.0, 2.0]),
        (3, "Cal", "CS", [4.0, 4.0, 4.0]),
    ]);

    let reports = course_reports(&store);
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0].course, "CS");
    assert_eq!(reports[0].count, 2);
    assert!((reports[0].mean_gpa - 3.5).abs() < 1e-6);
    assert_eq!(reports[0].top_performer.name, "Cal");
    assert_eq!(reports[0].top_performer.gpa, 4.0);

    assert_eq!(reports[1].course, "Math");
    assert_eq!(reports[1].count, 1);

    let overall = overall_report(&store).unwrap();
    let total: usize = reports.iter().map(|r| r.count).sum();
    assert_eq!(total, overall.count);
}

#[test]
fn full_session_through_roster() {
    let dir = TempDir::new().unwrap();

    {
        let mut roster = Roster::open(dir.path()).unwrap();
        roster.insert(student(3, "Cal", "CS", [2.0, 2.5, 3.0])).unwrap();
        roster.insert(student(1, "Ann", "Math", [4.0, 4.0, 3.0])).unwrap();
        roster.insert(student(2, "Ben", "CS", [1.0, 1.0, 1.0])).unwrap();
        roster
            .update(2, FieldChange::Grades([3.0, 3.0, 3.0]))
            .unwrap();
        roster.sort_default(SortKey::Id);
        roster.close().unwrap();
    }

    let roster = Roster::open(dir.path()).unwrap();
    let ids: Vec<i32> = roster.records().iter().map(Record::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(roster.find_by_id(2).unwrap().gpa(), 3.0);

    let best = roster.overall_report().unwrap().best;
    assert_eq!(best.name, "Ann");
}
