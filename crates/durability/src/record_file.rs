//! Crash-safe record file
//!
//! Uses write-fsync-rename for saves and full-read-then-decode for loads.
//!
//! # Crash Safety
//!
//! Saving follows this pattern:
//! 1. Encode every record into memory
//! 2. Write to a temporary sibling file (`.<name>.tmp`)
//! 3. fsync the temporary file
//! 4. Atomic rename over the final path
//! 5. fsync the parent directory
//!
//! Either the complete new file exists or the previous one is untouched;
//! there is no window where a half-written file sits at the final path.
//!
//! Loading reads the whole file and decodes it into a new sequence. Nothing
//! is handed back unless every record decoded cleanly.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use roster_core::{Record, Result};
use tracing::{debug, info, warn};

use crate::codec::{decode_records, encode_records};
use crate::format::encoded_len;

/// A record file on disk
#[derive(Debug, Clone)]
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    /// Refer to the record file at `path`; nothing is opened yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordFile { path: path.into() }
    }

    /// Final path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the temporary file used while saving
    pub fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_else(|| OsStr::new("records")));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// True if the record file exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Save `records`, replacing the file atomically
    ///
    /// # Errors
    ///
    /// `Io` if the temporary file cannot be written or renamed. The previous
    /// file contents are left untouched and the temporary file is removed.
    pub fn save(&self, records: &[Record]) -> Result<()> {
        let mut bytes = Vec::with_capacity(encoded_len(records.len()));
        encode_records(&mut bytes, records)?;

        let temp_path = self.temp_path();
        if let Err(e) = self.write_and_rename(&temp_path, &bytes) {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Record file save failed; previous contents kept"
            );
            if temp_path.is_file() {
                let _ = fs::remove_file(&temp_path);
            }
            return Err(e.into());
        }

        info!(
            path = %self.path.display(),
            records = records.len(),
            bytes = bytes.len(),
            "Saved record file"
        );
        Ok(())
    }

    fn write_and_rename(&self, temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(temp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(temp_path, &self.path)?;
        sync_dir(dir)
    }

    /// Load every record from the file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be opened or read (including not found)
    /// - `CorruptData` if the contents are truncated or malformed
    pub fn load(&self) -> Result<Vec<Record>> {
        let bytes = fs::read(&self.path)?;
        match decode_records(&mut &bytes[..]) {
            Ok(records) => {
                info!(
                    path = %self.path.display(),
                    records = records.len(),
                    "Loaded record file"
                );
                Ok(records)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Rejected record file");
                Err(e)
            }
        }
    }

    /// Remove a temporary file left behind by an interrupted save
    ///
    /// Returns true if a file was removed.
    pub fn cleanup_temp_file(&self) -> Result<bool> {
        let temp_path = self.temp_path();
        if !temp_path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&temp_path)?;
        debug!(path = %temp_path.display(), "Removed stale temporary record file");
        Ok(true)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

// Directories cannot be opened as files on other platforms.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
