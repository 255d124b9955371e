//! RosterDB - Embedded student roster store
//!
//! RosterDB keeps a growable, ordered collection of student records with
//! id uniqueness and field-bound enforcement, stable multi-key sorting,
//! per-course statistics, and a crash-safe fixed-width binary file.
//!
//! # Quick Start
//!
//! ```ignore
//! use rosterdb::{NewRecord, Roster, SortKey};
//!
//! let mut roster = Roster::open("./roster-data")?;
//! roster.insert(NewRecord::new(1, "Alice", 20, "CS", [4.0, 3.5, 3.0])?)?;
//! roster.sort_default(SortKey::Gpa);
//! for course in roster.course_reports() {
//!     println!("{}: {} students", course.course, course.count);
//! }
//! roster.close()?;
//! ```
//!
//! # Architecture
//!
//! - `roster-core`: record model, bounds, errors
//! - `roster-storage`: the in-memory `RecordStore`
//! - `roster-durability`: binary codec and `RecordFile`
//! - `roster-engine`: sorting, reports, config, and the `Roster` facade

pub use roster_core::{
    BoundedText, Error, FieldChange, NewRecord, Record, Result, GRADE_COUNT, MAX_AGE, MAX_GRADE,
    MAX_TEXT_LEN, MIN_AGE, MIN_GRADE,
};
pub use roster_durability::{decode_records, encode_records, RecordFile, RECORD_SIZE};
pub use roster_engine::*;
pub use roster_storage::{RecordStore, DEFAULT_INITIAL_CAPACITY};
