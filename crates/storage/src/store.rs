//! RecordStore: growable ordered sequence of student records
//!
//! This module implements the store using:
//! - `Vec<Record>` for contiguous, order-preserving storage
//! - A logical capacity that doubles when the sequence is full
//!
//! # Design Notes
//!
//! - **Sole mutation surface**: records are only created by `insert`, changed
//!   by `update`, reordered by `sort_by`, and destroyed by `remove`
//! - **No partial mutation**: every check runs before the sequence is touched
//! - **Capacity never shrinks**: removal keeps the allocated slots
//! - **Linear scans**: id uniqueness and lookups walk the sequence, O(n) per
//!   call. Fine for a class roster; a larger dataset would want an id index
//!   kept alongside the sequence.

use std::cmp::Ordering;

use roster_core::{Error, FieldChange, NewRecord, Record, Result};
use tracing::debug;

/// Capacity of a store created with `RecordStore::new`
pub const DEFAULT_INITIAL_CAPACITY: usize = 5;

/// Growable ordered sequence of records
///
/// The store exclusively owns its records; callers only ever see them
/// through shared borrows scoped to a single call.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Live records in sequence order
    records: Vec<Record>,
    /// Logical capacity, always >= `records.len()`
    capacity: usize,
}

impl RecordStore {
    /// Create an empty store with the default initial capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty store with room for `capacity` records
    ///
    /// A capacity of zero is raised to one so that doubling always grows.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current logical capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Records in current sequence order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in current sequence order
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Position of the record with this id, if any
    pub fn position_of(&self, id: i32) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// True if a live record has this id
    pub fn contains_id(&self, id: i32) -> bool {
        self.position_of(id).is_some()
    }

    /// First record with this id
    pub fn find_by_id(&self, id: i32) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// First record, in sequence order, whose name matches exactly
    ///
    /// Names are not unique; the earliest match wins.
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Validate and append a new record
    ///
    /// Returns the id of the inserted record.
    ///
    /// # Errors
    ///
    /// - `DuplicateId` if a live record already has the candidate's id
    /// - `OutOfRange` if the age or any grade is outside its bounds
    pub fn insert(&mut self, candidate: NewRecord) -> Result<i32> {
        if self.contains_id(candidate.id) {
            return Err(Error::DuplicateId(candidate.id));
        }
        let record = Record::new(candidate)?;
        let id = record.id();

        self.ensure_room();
        self.records.push(record);
        Ok(id)
    }

    /// Remove the record with this id
    ///
    /// Later records shift one position earlier; relative order of the
    /// remainder is preserved.
    ///
    /// # Errors
    ///
    /// `NotFound` if no live record has this id.
    pub fn remove(&mut self, id: i32) -> Result<()> {
        let position = self.position_of(id).ok_or(Error::NotFound(id))?;
        self.records.remove(position);
        Ok(())
    }

    /// Apply a single-field change to the record with this id
    ///
    /// # Errors
    ///
    /// - `NotFound` if no live record has this id
    /// - `OutOfRange` for an invalid age or grade (record unchanged)
    pub fn update(&mut self, id: i32, change: FieldChange) -> Result<()> {
        let position = self.position_of(id).ok_or(Error::NotFound(id))?;
        self.records[position].apply(change)
    }

    /// Stable in-place reorder of the sequence
    ///
    /// Records with equal keys keep their prior relative order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Record, &Record) -> Ordering,
    {
        self.records.sort_by(compare);
    }

    /// Replace the whole sequence in one step
    ///
    /// Used to install a freshly loaded sequence. Capacity grows to fit
    /// but never shrinks.
    ///
    /// # Errors
    ///
    /// `DuplicateId` if the incoming sequence repeats an id; the store is
    /// left untouched.
    pub fn replace_all(&mut self, records: Vec<Record>) -> Result<()> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(Error::DuplicateId(record.id()));
            }
        }

        if records.len() > self.capacity {
            debug!(
                old_capacity = self.capacity,
                new_capacity = records.len(),
                "Growing record store to fit replacement"
            );
            self.capacity = records.len();
        }
        self.records = records;
        let spare = self.capacity - self.records.len();
        self.records.reserve_exact(spare);
        Ok(())
    }

    /// Release every record, keeping capacity
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Double the logical capacity if the sequence is full
    fn ensure_room(&mut self) {
        if self.records.len() < self.capacity {
            return;
        }
        let new_capacity = self.capacity * 2;
        debug!(
            old_capacity = self.capacity,
            new_capacity, "Growing record store"
        );
        self.records.reserve_exact(new_capacity - self.records.len());
        self.capacity = new_capacity;
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
