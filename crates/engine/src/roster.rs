//! Roster struct and open/close logic
//!
//! This module provides the `Roster` facade that ties together:
//! - Configuration (`roster.toml` in the data directory)
//! - The in-memory `RecordStore`
//! - The crash-safe `RecordFile`
//! - Sorting and reporting
//!
//! ## Lifecycle
//!
//! 1. `Roster::open(dir)` writes a default config if none exists, removes
//!    any temporary file left by an interrupted save, and loads the record
//!    file. A missing record file means an empty roster.
//! 2. Callers mutate through `insert` / `remove` / `update` / `sort`.
//! 3. `save` persists on demand; `reload` replaces the store from disk.
//! 4. `close` saves when `save_on_close` is set.
//!
//! `Roster` is single-owner. Wrap it in one exclusive lock if it must be
//! shared.

use std::io;
use std::path::{Path, PathBuf};

use roster_core::{Error, FieldChange, NewRecord, Record, Result};
use roster_durability::RecordFile;
use roster_storage::RecordStore;
use tracing::{info, warn};

use crate::config::{RosterConfig, CONFIG_FILE_NAME};
use crate::report::{self, CourseReport, OverallReport};
use crate::sort::{self, SortDirection, SortKey};

/// Student roster with optional on-disk persistence
///
/// # Example
///
/// ```ignore
/// use rosterdb::{NewRecord, Roster, SortKey};
///
/// let mut roster = Roster::open("/path/to/data")?;
/// roster.insert(NewRecord::new(1, "Alice", 20, "CS", [4.0, 3.5, 3.0])?)?;
/// roster.sort_default(SortKey::Gpa);
/// roster.close()?;
/// ```
#[derive(Debug)]
pub struct Roster {
    store: RecordStore,
    file: Option<RecordFile>,
    config: RosterConfig,
}

impl Roster {
    /// Open the roster stored in `dir`
    ///
    /// Creates the directory and a default `roster.toml` if missing.
    ///
    /// # Errors
    ///
    /// `Io` or `InvalidConfig` for config problems, `CorruptData` if the
    /// record file exists but cannot be decoded.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let config_path = dir.join(CONFIG_FILE_NAME);
        RosterConfig::write_default_if_missing(&config_path)?;
        let config = RosterConfig::from_file(&config_path)?;
        Self::open_with_config(dir, config)
    }

    /// Open the roster in `dir` using an explicit config
    ///
    /// The config file in `dir` is neither read nor written.
    pub fn open_with_config<P: AsRef<Path>>(dir: P, config: RosterConfig) -> Result<Self> {
        config.validate()?;
        let data_path = resolve_data_path(dir.as_ref(), &config.data_file);
        let file = RecordFile::new(data_path);

        if file.cleanup_temp_file()? {
            warn!(
                path = %file.temp_path().display(),
                "Discarded temporary record file from an interrupted save"
            );
        }

        let mut store = RecordStore::with_capacity(config.initial_capacity);
        match file.load() {
            Ok(records) => store.replace_all(records)?,
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %file.path().display(), "No record file yet; starting empty");
            }
            Err(e) => return Err(e),
        }

        info!(
            path = %file.path().display(),
            records = store.len(),
            capacity = store.capacity(),
            "Opened roster"
        );

        Ok(Roster {
            store,
            file: Some(file),
            config,
        })
    }

    /// In-memory roster with no backing file
    pub fn ephemeral(initial_capacity: usize) -> Self {
        Roster {
            store: RecordStore::with_capacity(initial_capacity),
            file: None,
            config: RosterConfig {
                initial_capacity: initial_capacity.max(1),
                save_on_close: false,
                ..RosterConfig::default()
            },
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Path of the backing record file, if any
    pub fn data_path(&self) -> Option<&Path> {
        self.file.as_ref().map(RecordFile::path)
    }

    /// Read view of the store
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable access to the store
    pub fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }

    /// Records in current order
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// See [`RecordStore::insert`]
    pub fn insert(&mut self, candidate: NewRecord) -> Result<i32> {
        self.store.insert(candidate)
    }

    /// See [`RecordStore::remove`]
    pub fn remove(&mut self, id: i32) -> Result<()> {
        self.store.remove(id)
    }

    /// See [`RecordStore::update`]
    pub fn update(&mut self, id: i32, change: FieldChange) -> Result<()> {
        self.store.update(id, change)
    }

    /// See [`RecordStore::find_by_id`]
    pub fn find_by_id(&self, id: i32) -> Option<&Record> {
        self.store.find_by_id(id)
    }

    /// See [`RecordStore::find_by_name`]
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.store.find_by_name(name)
    }

    /// Sort by `key` in `direction`
    pub fn sort(&mut self, key: SortKey, direction: SortDirection) {
        sort::sort(&mut self.store, key, direction);
    }

    /// Sort by `key` in its conventional direction
    pub fn sort_default(&mut self, key: SortKey) {
        sort::sort_default(&mut self.store, key);
    }

    /// Class-wide statistics, or `None` if empty
    pub fn overall_report(&self) -> Option<OverallReport> {
        report::overall_report(&self.store)
    }

    /// Per-course statistics in first-appearance order
    pub fn course_reports(&self) -> Vec<CourseReport> {
        report::course_reports(&self.store)
    }

    /// Persist every record to the backing file
    ///
    /// A no-op for an ephemeral roster.
    pub fn save(&self) -> Result<()> {
        match &self.file {
            Some(file) => file.save(self.store.records()),
            None => Ok(()),
        }
    }

    /// Replace the store with the backing file's contents
    ///
    /// The file is decoded in full before the store is touched; on any
    /// error the store keeps its current records.
    ///
    /// # Errors
    ///
    /// `Io` (including a missing file) or `CorruptData`. An ephemeral roster
    /// reports `Io` with `NotFound`.
    pub fn reload(&mut self) -> Result<()> {
        let file = self.file.as_ref().ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "ephemeral roster has no record file",
            ))
        })?;
        let records = file.load()?;
        self.store.replace_all(records)
    }

    /// Close the roster, saving first if the config asks for it
    pub fn close(self) -> Result<()> {
        if self.config.save_on_close {
            self.save()?;
        }
        info!(records = self.store.len(), "Closed roster");
        Ok(())
    }
}

fn resolve_data_path(dir: &Path, data_file: &str) -> PathBuf {
    let path = Path::new(data_file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
