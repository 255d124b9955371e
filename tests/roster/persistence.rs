//! Persistence through the record file

use crate::common::*;
use proptest::prelude::*;
use std::fs;

#[test]
fn round_trip_empty_store() {
    let dir = TempDir::new().unwrap();
    let file = RecordFile::new(dir.path().join("students.dat"));
    let store = RecordStore::new();

    file.save(store.records()).unwrap();
    assert!(file.load().unwrap().is_empty());
}

#[test]
fn round_trip_preserves_order_and_fields() {
    let dir = TempDir::new().unwrap();
    let file = RecordFile::new(dir.path().join("students.dat"));
    let store = store_with(&[
        (3, "Cal", "CS", [2.0, 2.5, 3.0]),
        (1, "Ann", "Math", [4.0, 0.0, 1.25]),
        (2, "Ben", "Art", [0.1, 0.2, 0.3]),
    ]);

    file.save(store.records()).unwrap();
    assert_eq!(file.load().unwrap(), store.records());
}

#[test]
fn failed_load_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let file = RecordFile::new(dir.path().join("students.dat"));
    let saved = store_with(&[
        (1, "Ann", "CS", [1.0, 1.0, 1.0]),
        (2, "Ben", "CS", [2.0, 2.0, 2.0]),
    ]);
    file.save(saved.records()).unwrap();

    // Chop the second record in half
    let bytes = fs::read(file.path()).unwrap();
    fs::write(file.path(), &bytes[..bytes.len() - 60]).unwrap();

    let mut store = store_with(&[(9, "Keep", "CS", [3.0, 3.0, 3.0])]);
    let result = file.load().and_then(|records| store.replace_all(records));
    assert!(result.unwrap_err().is_corruption());
    assert_eq!(ids(&store), vec![9]);
}

#[test]
fn file_layout_is_little_endian_fixed_width() {
    let dir = TempDir::new().unwrap();
    let file = RecordFile::new(dir.path().join("students.dat"));
    let store = store_with(&[(258, "Ann", "CS", [1.0, 1.0, 1.0])]);
    file.save(store.records()).unwrap();

    let bytes = fs::read(file.path()).unwrap();
    assert_eq!(bytes.len(), 4 + rosterdb::RECORD_SIZE);
    assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
    assert_eq!(&bytes[4..8], &[2, 1, 0, 0]);
}

fn arb_candidate() -> impl Strategy<Value = NewRecord> {
    (
        -1000i32..1000,
        "[a-zA-Z]{0,49}",
        18i32..=99,
        "[a-zA-Z ]{0,20}",
        [0.0f32..=4.0, 0.0f32..=4.0, 0.0f32..=4.0],
    )
        .prop_map(|(id, name, age, course, grades)| {
            NewRecord::new(id, &name, age, &course, grades).unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn load_after_save_reproduces_store(
        candidates in proptest::collection::vec(arb_candidate(), 0..25)
    ) {
        let dir = TempDir::new().unwrap();
        let file = RecordFile::new(dir.path().join("students.dat"));

        let mut store = RecordStore::new();
        for candidate in candidates {
            let _ = store.insert(candidate);
        }

        file.save(store.records()).unwrap();
        let loaded = file.load().unwrap();
        prop_assert_eq!(&loaded[..], store.records());

        let mut restored = RecordStore::new();
        restored.replace_all(loaded).unwrap();
        prop_assert_eq!(restored.records(), store.records());
    }
}
