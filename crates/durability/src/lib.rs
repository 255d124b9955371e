//! Durability layer for RosterDB
//!
//! This crate handles everything that touches disk:
//!
//! - Binary record format: fixed-width, little-endian, no padding
//! - Whole-sequence codec: count prefix plus records, strict validation
//! - Crash-safe record file: write-fsync-rename saves, full-read loads

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec; // Count-prefixed stream encode/decode
pub mod format; // Single-record layout
pub mod record_file; // Atomic save and load

pub use codec::{decode_records, encode_records};
pub use format::{encoded_len, COUNT_SIZE, RECORD_SIZE};
pub use record_file::RecordFile;
