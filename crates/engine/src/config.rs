//! Roster configuration via `roster.toml`
//!
//! On first open, a default `roster.toml` is created in the data directory.
//! To change settings, edit the file and reopen.

use roster_core::{Error, Result};
use roster_storage::DEFAULT_INITIAL_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "roster.toml";

/// Default record file name, relative to the data directory.
pub const DEFAULT_DATA_FILE: &str = "students.dat";

/// Roster configuration loaded from `roster.toml`.
///
/// # Example
///
/// ```toml
/// data_file = "students.dat"
/// initial_capacity = 5
/// save_on_close = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Record file, relative to the data directory unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: String,
    /// Slots reserved by a new, empty store.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
    /// Save the store when the roster is closed.
    #[serde(default = "default_save_on_close")]
    pub save_on_close: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_initial_capacity() -> usize {
    DEFAULT_INITIAL_CAPACITY
}

fn default_save_on_close() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            initial_capacity: default_initial_capacity(),
            save_on_close: default_save_on_close(),
        }
    }
}

impl RosterConfig {
    /// Check values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for an empty data file name or a zero capacity.
    pub fn validate(&self) -> Result<()> {
        if self.data_file.trim().is_empty() {
            return Err(Error::InvalidConfig("data_file must not be empty".into()));
        }
        if self.initial_capacity == 0 {
            return Err(Error::InvalidConfig(
                "initial_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Roster configuration
#
# Record file, relative to this directory unless absolute.
data_file = "students.dat"

# Slots reserved by a new, empty store. Grows by doubling when full.
initial_capacity = 5

# Save the store when the roster is closed (default: true).
save_on_close = true
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `InvalidConfig` if it cannot be
    /// parsed or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = toml::from_str(&content).map_err(|e| {
            Error::InvalidConfig(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
