//! Engine layer for RosterDB
//!
//! Builds on the store and the record file:
//! - Sorting: stable in-place sort by GPA, id, or name
//! - Reports: class-wide and per-course statistics
//! - Config: `roster.toml` loading and defaults
//! - Roster: open / save / reload / close lifecycle

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod report;
pub mod roster;
pub mod sort;

pub use config::{RosterConfig, CONFIG_FILE_NAME, DEFAULT_DATA_FILE};
pub use report::{
    course_report, course_reports, overall_report, CourseReport, OverallReport, TopPerformer,
};
pub use roster::Roster;
pub use sort::{sort, sort_default, SortDirection, SortKey};
