//! Whole-sequence codec
//!
//! Encodes a record count followed by every record, and decodes the same
//! stream back into a fresh `Vec<Record>`. Decoding never touches a store;
//! the caller installs the result only after it has fully succeeded.

use std::collections::HashSet;
use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use roster_core::{Error, Record, Result};

use crate::format::{decode_record, encode_record, RECORD_SIZE};

/// Upper bound on the up-front allocation made from an untrusted count
const MAX_PREALLOCATED_RECORDS: usize = 1024;

/// Encode `records` as a count-prefixed stream
pub fn encode_records<W: Write>(writer: &mut W, records: &[Record]) -> Result<()> {
    let count = i32::try_from(records.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} records exceed the i32 record count", records.len()),
        )
    })?;

    writer.write_i32::<LittleEndian>(count)?;
    for record in records {
        encode_record(writer, record)?;
    }
    Ok(())
}

/// Decode a count-prefixed stream into records
///
/// # Errors
///
/// `CorruptData` if the count is missing or negative, if fewer records than
/// the count are present, if bytes follow the last record, if any record
/// fails validation, or if two records share an id. `Io` for any other read
/// failure.
pub fn decode_records<R: Read>(reader: &mut R) -> Result<Vec<Record>> {
    let count = match reader.read_i32::<LittleEndian>() {
        Ok(count) => count,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            return Err(Error::corrupt("stream too short for record count"));
        }
        Err(e) => return Err(e.into()),
    };
    let count = usize::try_from(count)
        .map_err(|_| Error::corrupt(format!("negative record count {}", count)))?;

    let mut records = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
    let mut seen_ids = HashSet::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
    let mut buf = [0u8; RECORD_SIZE];

    for index in 0..count {
        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(Error::corrupt(format!(
                    "truncated stream: expected {} records, found {}",
                    count, index
                )));
            }
            Err(e) => return Err(e.into()),
        }

        let record = decode_record(&buf, index)?;
        if !seen_ids.insert(record.id()) {
            return Err(Error::corrupt(format!(
                "record {}: duplicate id {}",
                index,
                record.id()
            )));
        }
        records.push(record);
    }

    let mut probe = [0u8; 1];
    if reader.read(&mut probe)? != 0 {
        return Err(Error::corrupt(format!(
            "unexpected bytes after {} records",
            count
        )));
    }

    Ok(records)
}
