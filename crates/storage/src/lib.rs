//! Storage layer for RosterDB
//!
//! This crate implements the in-memory record store:
//! - RecordStore: growable ordered sequence of student records
//! - CRUD with id uniqueness and field-bound enforcement
//! - Amortized O(1) append with capacity doubling
//! - Stable reordering and atomic whole-sequence replacement

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{RecordStore, DEFAULT_INITIAL_CAPACITY};
