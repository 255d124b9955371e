//! Field bounds for student records
//!
//! These limits are enforced by the store on every insert and update, and
//! by the codec on every decoded record. Violations return `OutOfRange`.
//!
//! ## Contract
//!
//! The text width and grade count are part of the on-disk layout and cannot
//! change without changing the file format.

use crate::error::{Error, Result};

/// Youngest accepted age
pub const MIN_AGE: i32 = 18;

/// Oldest accepted age
pub const MAX_AGE: i32 = 99;

/// Lowest accepted grade
pub const MIN_GRADE: f32 = 0.0;

/// Highest accepted grade
pub const MAX_GRADE: f32 = 4.0;

/// Number of grades carried by every record
pub const GRADE_COUNT: usize = 3;

/// Width of a text field on disk, in bytes
pub const TEXT_FIELD_WIDTH: usize = 50;

/// Maximum text payload in bytes (one byte of the field is always padding)
pub const MAX_TEXT_LEN: usize = TEXT_FIELD_WIDTH - 1;

/// Validate an age
pub fn validate_age(age: i32) -> Result<()> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(Error::int_out_of_range("age", age, MIN_AGE, MAX_AGE));
    }
    Ok(())
}

/// Validate a single grade
///
/// NaN never satisfies the range check and is rejected.
pub fn validate_grade(grade: f32) -> Result<()> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(Error::float_out_of_range(
            "grade", grade, MIN_GRADE, MAX_GRADE,
        ));
    }
    Ok(())
}

/// Validate every grade, stopping at the first bad one
pub fn validate_grades(grades: &[f32; GRADE_COUNT]) -> Result<()> {
    grades.iter().try_for_each(|&g| validate_grade(g))
}

/// Arithmetic mean of the grades
///
/// Summed sequentially in `f32` and divided by the grade count, so the same
/// grades always give the same bits.
pub fn mean_grade(grades: &[f32; GRADE_COUNT]) -> f32 {
    let mut sum = 0.0f32;
    for g in grades {
        sum += g;
    }
    sum / GRADE_COUNT as f32
}
