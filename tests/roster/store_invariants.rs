//! Store invariants under mutation

use crate::common::*;
use rosterdb::{sort, BoundedText};

#[test]
fn find_by_id_returns_inserted_record() {
    let mut store = RecordStore::new();
    let candidate = student(10, "Dana", "Physics", [3.0, 3.5, 4.0]);
    store.insert(candidate.clone()).unwrap();

    let found = store.find_by_id(10).unwrap();
    assert_eq!(found.name(), &candidate.name);
    assert_eq!(found.course(), &candidate.course);
    assert_eq!(found.age(), candidate.age);
    assert_eq!(found.grades(), &candidate.grades);
}

#[test]
fn bound_violations_leave_store_unchanged() {
    let mut store = store_with(&[(1, "Ann", "CS", [3.0, 3.0, 3.0])]);
    let before = store.records().to_vec();

    let mut young = student(2, "Kid", "CS", [1.0, 1.0, 1.0]);
    young.age = 17;
    let mut old = student(3, "Elder", "CS", [1.0, 1.0, 1.0]);
    old.age = 100;
    let high = student(4, "Over", "CS", [1.0, 4.5, 1.0]);
    let low = student(5, "Under", "CS", [-0.1, 1.0, 1.0]);

    for candidate in [young, old, high, low] {
        let err = store.insert(candidate).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }
    assert_eq!(store.records(), &before[..]);
}

#[test]
fn remove_keeps_relative_order() {
    let mut store = store_with(&[
        (5, "E", "CS", [1.0, 1.0, 1.0]),
        (2, "B", "CS", [1.0, 1.0, 1.0]),
        (9, "I", "CS", [1.0, 1.0, 1.0]),
        (1, "A", "CS", [1.0, 1.0, 1.0]),
    ]);
    store.remove(2).unwrap();
    assert_eq!(ids(&store), vec![5, 9, 1]);

    let err = store.remove(2).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(ids(&store), vec![5, 9, 1]);
}

#[test]
fn grade_update_keeps_gpa_consistent() {
    let mut store = store_with(&[(1, "Ann", "CS", [3.0, 3.0, 3.0])]);
    store
        .update(1, FieldChange::Grades([0.5, 1.5, 3.7]))
        .unwrap();
    let record = store.find_by_id(1).unwrap();
    let mean = record.grades().iter().sum::<f32>() / 3.0;
    assert!((record.gpa() - mean).abs() < 1e-6);
}

#[test]
fn name_and_course_updates_apply() {
    let mut store = store_with(&[(1, "Ann", "CS", [3.0, 3.0, 3.0])]);
    store
        .update(1, FieldChange::Name(BoundedText::new("Anna").unwrap()))
        .unwrap();
    store
        .update(1, FieldChange::Course(BoundedText::new("Bio").unwrap()))
        .unwrap();
    let record = store.find_by_id(1).unwrap();
    assert_eq!(record.name().as_str(), "Anna");
    assert_eq!(record.course().as_str(), "Bio");
}

#[test]
fn oversized_name_is_refused_not_truncated() {
    let long = "n".repeat(rosterdb::MAX_TEXT_LEN + 1);
    let err = NewRecord::new(1, &long, 20, "CS", [1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, Error::TextTooLong { .. }));
}

#[test]
fn sort_gpa_descending_is_stable() {
    let mut store = store_with(&[
        (1, "A", "CS", [2.0, 2.0, 2.0]),
        (2, "B", "CS", [3.0, 3.0, 3.0]),
        (3, "C", "CS", [2.0, 2.0, 2.0]),
        (4, "D", "CS", [3.0, 3.0, 3.0]),
        (5, "E", "CS", [1.0, 1.0, 1.0]),
    ]);
    sort(&mut store, SortKey::Gpa, SortDirection::Descending);
    assert_eq!(ids(&store), vec![2, 4, 1, 3, 5]);

    for pair in store.records().windows(2) {
        assert!(pair[0].gpa() >= pair[1].gpa());
    }
}

#[test]
fn sort_id_ascending_is_non_decreasing() {
    let mut store = store_with(&[
        (40, "A", "CS", [1.0, 1.0, 1.0]),
        (-3, "B", "CS", [1.0, 1.0, 1.0]),
        (17, "C", "CS", [1.0, 1.0, 1.0]),
    ]);
    sort(&mut store, SortKey::Id, SortDirection::Ascending);
    assert_eq!(ids(&store), vec![-3, 17, 40]);
}

#[test]
fn capacity_grows_by_doubling_and_never_shrinks() {
    let mut store = RecordStore::with_capacity(5);
    for id in 0..6 {
        store.insert(student(id, "S", "CS", [1.0, 1.0, 1.0])).unwrap();
    }
    assert_eq!(store.capacity(), 10);

    for id in 0..6 {
        store.remove(id).unwrap();
    }
    assert!(store.is_empty());
    assert_eq!(store.capacity(), 10);
}
