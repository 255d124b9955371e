//! Shared helpers for the roster integration tests.

#![allow(dead_code)]

pub use rosterdb::{
    Error, FieldChange, NewRecord, Record, RecordFile, RecordStore, Roster, SortDirection, SortKey,
};
pub use tempfile::TempDir;

/// Build a candidate with a fixed age
pub fn student(id: i32, name: &str, course: &str, grades: [f32; 3]) -> NewRecord {
    NewRecord::new(id, name, 20, course, grades).expect("valid test candidate")
}

/// Store holding `rows` in order
pub fn store_with(rows: &[(i32, &str, &str, [f32; 3])]) -> RecordStore {
    let mut store = RecordStore::new();
    for &(id, name, course, grades) in rows {
        store.insert(student(id, name, course, grades)).unwrap();
    }
    store
}

/// Ids in sequence order
pub fn ids(store: &RecordStore) -> Vec<i32> {
    store.iter().map(Record::id).collect()
}
