//! Record file format
//!
//! ## Layout
//!
//! All integers and floats are little-endian; there is no padding between
//! fields.
//!
//! ```text
//! [Record Count: i32]
//! For each record (124 bytes):
//!   [Id: i32]
//!   [Name: 50 bytes, UTF-8 payload then zero padding]
//!   [Age: i32]
//!   [Course: 50 bytes, UTF-8 payload then zero padding]
//!   [Grades: 3 × f32]
//!   [GPA: f32]
//! ```
//!
//! Text payloads are at most 49 bytes, so every text field holds at least
//! one zero byte. Everything after the first zero must also be zero.
//!
//! ## Decoding rules
//!
//! A decoded record must satisfy every in-memory invariant: age and grades in
//! range, and the stored GPA bit-identical to the mean recomputed from the
//! stored grades. Anything else is reported as `CorruptData`.

use std::io::{self, Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use roster_core::{BoundedText, Error, NewRecord, Record, Result, GRADE_COUNT, TEXT_FIELD_WIDTH};

/// Size of the record count prefix
pub const COUNT_SIZE: usize = 4;

/// Size of one encoded record
pub const RECORD_SIZE: usize = 4 + TEXT_FIELD_WIDTH + 4 + TEXT_FIELD_WIDTH + 4 * GRADE_COUNT + 4;

/// Total encoded size of a file holding `count` records
pub fn encoded_len(count: usize) -> usize {
    COUNT_SIZE + count * RECORD_SIZE
}

/// Encode one record as exactly `RECORD_SIZE` bytes
pub fn encode_record<W: Write>(writer: &mut W, record: &Record) -> io::Result<()> {
    writer.write_i32::<LittleEndian>(record.id())?;
    write_text(writer, record.name())?;
    writer.write_i32::<LittleEndian>(record.age())?;
    write_text(writer, record.course())?;
    for &grade in record.grades() {
        writer.write_f32::<LittleEndian>(grade)?;
    }
    writer.write_f32::<LittleEndian>(record.gpa())?;
    Ok(())
}

/// Decode one record from exactly `RECORD_SIZE` bytes
///
/// `index` is only used to label errors.
pub fn decode_record(bytes: &[u8; RECORD_SIZE], index: usize) -> Result<Record> {
    let mut cursor = Cursor::new(&bytes[..]);
    // The buffer is exactly RECORD_SIZE, so these reads cannot run short.
    let id = cursor.read_i32::<LittleEndian>()?;
    let name = read_text(&mut cursor, "name", index)?;
    let age = cursor.read_i32::<LittleEndian>()?;
    let course = read_text(&mut cursor, "course", index)?;
    let mut grades = [0.0f32; GRADE_COUNT];
    cursor.read_f32_into::<LittleEndian>(&mut grades)?;
    let stored_gpa = cursor.read_f32::<LittleEndian>()?;

    let record = Record::new(NewRecord {
        id,
        name,
        age,
        course,
        grades,
    })
    .map_err(|e| Error::corrupt(format!("record {} (id {}): {}", index, id, e)))?;

    if record.gpa().to_bits() != stored_gpa.to_bits() {
        return Err(Error::corrupt(format!(
            "record {} (id {}): stored gpa {} does not match grades (expected {})",
            index,
            id,
            stored_gpa,
            record.gpa()
        )));
    }

    Ok(record)
}

fn write_text<W: Write>(writer: &mut W, text: &BoundedText) -> io::Result<()> {
    let mut field = [0u8; TEXT_FIELD_WIDTH];
    let payload = text.as_str().as_bytes();
    field[..payload.len()].copy_from_slice(payload);
    writer.write_all(&field)
}

fn read_text<R: Read>(reader: &mut R, field: &'static str, index: usize) -> Result<BoundedText> {
    let mut raw = [0u8; TEXT_FIELD_WIDTH];
    reader.read_exact(&mut raw)?;

    let end = raw.iter().position(|&b| b == 0).ok_or_else(|| {
        Error::corrupt(format!("record {}: {} field has no terminator", index, field))
    })?;
    if raw[end..].iter().any(|&b| b != 0) {
        return Err(Error::corrupt(format!(
            "record {}: {} field has non-zero padding",
            index, field
        )));
    }
    let text = std::str::from_utf8(&raw[..end]).map_err(|e| {
        Error::corrupt(format!("record {}: {} field is not UTF-8: {}", index, field, e))
    })?;

    BoundedText::for_field(field, text)
        .map_err(|e| Error::corrupt(format!("record {}: {}", index, e)))
}
