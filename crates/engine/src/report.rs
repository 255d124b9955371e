//! Roster statistics
//!
//! Read-only aggregation over the store: one overall report and one report
//! per course.
//!
//! ## Tie-breaking
//!
//! The best student is the first record, in sequence order, that holds the
//! strictly highest GPA seen so far. Later records with an equal GPA never
//! displace it.
//!
//! ## Complexity
//!
//! `course_reports` is O(n²): for every record it scans earlier records to
//! see whether the course was already reported, then scans the whole store
//! to aggregate that course. First-appearance ordering falls out of this
//! directly. Fine at class-roster scale.

use roster_core::Record;
use roster_storage::RecordStore;
use serde::Serialize;

/// Highest-GPA student of a group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPerformer {
    /// Student id
    pub id: i32,
    /// Student name
    pub name: String,
    /// Student GPA
    pub gpa: f32,
}

impl TopPerformer {
    fn of(record: &Record) -> Self {
        TopPerformer {
            id: record.id(),
            name: record.name().to_string(),
            gpa: record.gpa(),
        }
    }
}

/// Class-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallReport {
    /// Number of records
    pub count: usize,
    /// Mean GPA over all records
    pub mean_gpa: f32,
    /// Best student overall
    pub best: TopPerformer,
    /// Lowest GPA in the class
    pub worst_gpa: f32,
}

/// Statistics for one course
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseReport {
    /// Course name
    pub course: String,
    /// Number of enrolled students
    pub count: usize,
    /// Mean GPA of enrolled students
    pub mean_gpa: f32,
    /// Best student in the course
    pub top_performer: TopPerformer,
}

/// Running aggregate over a group of records
struct GroupStats<'a> {
    count: usize,
    gpa_sum: f64,
    best: &'a Record,
    worst_gpa: f32,
}

impl<'a> GroupStats<'a> {
    fn collect<I>(mut records: I) -> Option<Self>
    where
        I: Iterator<Item = &'a Record>,
    {
        let first = records.next()?;
        let mut stats = GroupStats {
            count: 1,
            gpa_sum: f64::from(first.gpa()),
            best: first,
            worst_gpa: first.gpa(),
        };
        for record in records {
            stats.count += 1;
            stats.gpa_sum += f64::from(record.gpa());
            if record.gpa() > stats.best.gpa() {
                stats.best = record;
            }
            if record.gpa() < stats.worst_gpa {
                stats.worst_gpa = record.gpa();
            }
        }
        Some(stats)
    }

    fn mean_gpa(&self) -> f32 {
        (self.gpa_sum / self.count as f64) as f32
    }
}

/// Class-wide statistics, or `None` for an empty store
pub fn overall_report(store: &RecordStore) -> Option<OverallReport> {
    let stats = GroupStats::collect(store.iter())?;
    Some(OverallReport {
        count: stats.count,
        mean_gpa: stats.mean_gpa(),
        best: TopPerformer::of(stats.best),
        worst_gpa: stats.worst_gpa,
    })
}

/// Statistics for one course, or `None` if nobody takes it
pub fn course_report(store: &RecordStore, course: &str) -> Option<CourseReport> {
    let stats = GroupStats::collect(store.iter().filter(|r| r.course().as_str() == course))?;
    Some(CourseReport {
        course: course.to_string(),
        count: stats.count,
        mean_gpa: stats.mean_gpa(),
        top_performer: TopPerformer::of(stats.best),
    })
}

/// Statistics for every course, in order of first appearance
pub fn course_reports(store: &RecordStore) -> Vec<CourseReport> {
    let records = store.records();
    let mut reports = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let course = record.course();
        if records[..i].iter().any(|prev| prev.course() == course) {
            continue;
        }
        if let Some(report) = course_report(store, course.as_str()) {
            reports.push(report);
        }
    }

    reports
}
