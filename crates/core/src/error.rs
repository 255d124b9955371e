//! Error types for the roster store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every error is recoverable: an operation that returns `Err` leaves the
//! store exactly as it was before the call.

use std::io;
use thiserror::Error;

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the roster store
#[derive(Debug, Error)]
pub enum Error {
    /// A live record already uses this id
    #[error("Duplicate id: a record with id {0} already exists")]
    DuplicateId(i32),

    /// No live record has this id
    #[error("Record not found: id {0}")]
    NotFound(i32),

    /// Numeric field outside its permitted range
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    OutOfRange {
        /// Field that failed validation
        field: &'static str,
        /// Rejected value, rendered for display
        value: String,
        /// Inclusive lower bound
        min: String,
        /// Inclusive upper bound
        max: String,
    },

    /// Text field exceeds its fixed-width payload
    #[error("{field} too long: {len} bytes (max {max})")]
    TextTooLong {
        /// Field that failed validation
        field: &'static str,
        /// Actual payload length in bytes
        len: usize,
        /// Maximum payload length in bytes
        max: usize,
    },

    /// Text field contains a byte that cannot be stored
    #[error("{field} is not valid text: {reason}")]
    InvalidText {
        /// Field that failed validation
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// I/O error (file open, write, rename, fsync)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted stream is truncated or malformed
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Configuration file could not be parsed or holds an invalid value
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an `OutOfRange` error for an integer field
    pub fn int_out_of_range(field: &'static str, value: i32, min: i32, max: i32) -> Self {
        Error::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Build an `OutOfRange` error for a floating-point field
    pub fn float_out_of_range(field: &'static str, value: f32, min: f32, max: f32) -> Self {
        Error::OutOfRange {
            field,
            value: value.to_string(),
            min: format!("{:.1}", min),
            max: format!("{:.1}", max),
        }
    }

    /// Build a `CorruptData` error from anything displayable
    pub fn corrupt(reason: impl Into<String>) -> Self {
        Error::CorruptData(reason.into())
    }

    /// True for `NotFound`
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// True for `CorruptData`
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::CorruptData(_))
    }

    /// True for errors raised by field validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. } | Error::TextTooLong { .. } | Error::InvalidText { .. }
        )
    }
}
