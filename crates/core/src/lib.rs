//! Core types for RosterDB
//!
//! This crate defines the foundational types used throughout the system:
//! - Record: validated student record with derived GPA
//! - NewRecord: caller-supplied insertion candidate
//! - FieldChange: single-field update
//! - BoundedText: fixed-width-safe text for names and courses
//! - Limits: age and grade bounds, text width, GPA computation
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod text;

pub use error::{Error, Result};
pub use limits::{
    mean_grade, validate_age, validate_grade, validate_grades, GRADE_COUNT, MAX_AGE, MAX_GRADE,
    MAX_TEXT_LEN, MIN_AGE, MIN_GRADE, TEXT_FIELD_WIDTH,
};
pub use record::{FieldChange, NewRecord, Record};
pub use text::BoundedText;
