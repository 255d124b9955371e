//! Student record types
//!
//! - `NewRecord`: caller-supplied candidate for insertion
//! - `Record`: validated record with derived GPA
//! - `FieldChange`: a single-field update
//!
//! `Record` has no field setters. It is built by `Record::new`, which
//! validates every bound and computes the GPA, and changed only through
//! `Record::apply`, which revalidates before touching any field.

use crate::error::Result;
use crate::limits::{mean_grade, validate_age, validate_grades, GRADE_COUNT};
use crate::text::BoundedText;
use serde::{Deserialize, Serialize};

/// Candidate record supplied by the caller
///
/// Field types are already parsed; semantic bounds are checked by
/// `Record::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Student id, unique within a store
    pub id: i32,
    /// Student name
    pub name: BoundedText,
    /// Age in years
    pub age: i32,
    /// Course name
    pub course: BoundedText,
    /// Grades in [0.0, 4.0]
    pub grades: [f32; GRADE_COUNT],
}

impl NewRecord {
    /// Build a candidate from plain strings, checking text bounds
    pub fn new(
        id: i32,
        name: &str,
        age: i32,
        course: &str,
        grades: [f32; GRADE_COUNT],
    ) -> Result<Self> {
        Ok(NewRecord {
            id,
            name: BoundedText::for_field("name", name)?,
            age,
            course: BoundedText::for_field("course", course)?,
            grades,
        })
    }
}

/// One student's stored data plus derived GPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    id: i32,
    name: BoundedText,
    age: i32,
    course: BoundedText,
    grades: [f32; GRADE_COUNT],
    gpa: f32,
}

impl Record {
    /// Validate a candidate and compute its GPA
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the age or any grade is outside its bounds.
    pub fn new(candidate: NewRecord) -> Result<Self> {
        validate_age(candidate.age)?;
        validate_grades(&candidate.grades)?;
        Ok(Record {
            id: candidate.id,
            name: candidate.name,
            age: candidate.age,
            course: candidate.course,
            gpa: mean_grade(&candidate.grades),
            grades: candidate.grades,
        })
    }

    /// Student id
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Student name
    pub fn name(&self) -> &BoundedText {
        &self.name
    }

    /// Age in years
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Course name
    pub fn course(&self) -> &BoundedText {
        &self.course
    }

    /// The three grades
    pub fn grades(&self) -> &[f32; GRADE_COUNT] {
        &self.grades
    }

    /// Mean of the grades
    pub fn gpa(&self) -> f32 {
        self.gpa
    }

    /// Apply a single-field change
    ///
    /// Validation happens before any field is written, so on error the
    /// record is unchanged.
    pub fn apply(&mut self, change: FieldChange) -> Result<()> {
        match change {
            FieldChange::Name(name) => self.name = name,
            FieldChange::Age(age) => {
                validate_age(age)?;
                self.age = age;
            }
            FieldChange::Course(course) => self.course = course,
            FieldChange::Grades(grades) => {
                validate_grades(&grades)?;
                self.gpa = mean_grade(&grades);
                self.grades = grades;
            }
        }
        Ok(())
    }
}

impl From<Record> for NewRecord {
    fn from(record: Record) -> Self {
        NewRecord {
            id: record.id,
            name: record.name,
            age: record.age,
            course: record.course,
            grades: record.grades,
        }
    }
}

/// A change to exactly one field of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldChange {
    /// Replace the name
    Name(BoundedText),
    /// Replace the age (revalidated)
    Age(i32),
    /// Replace the course
    Course(BoundedText),
    /// Replace all grades (revalidated, GPA recomputed)
    Grades([f32; GRADE_COUNT]),
}

impl FieldChange {
    /// Name of the field this change targets
    pub fn field(&self) -> &'static str {
        match self {
            FieldChange::Name(_) => "name",
            FieldChange::Age(_) => "age",
            FieldChange::Course(_) => "course",
            FieldChange::Grades(_) => "grades",
        }
    }
}
