//! Configuration for Rollbook
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a Rollbook archive
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for both data files
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── student.ser             (single student)
    ///     └── students_multiple.ser   (roster)
    pub data_dir: PathBuf,

    /// File name of the single-student file, relative to `data_dir`
    pub student_file: String,

    /// File name of the roster file, relative to `data_dir`
    pub roster_file: String,

    /// Whether writes are fsynced before the handle is released
    pub sync_policy: SyncPolicy,
}

/// Durability policy for file writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// fsync after every write
    Always,

    /// flush to the OS only
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            student_file: "student.ser".to_string(),
            roster_file: "students_multiple.ser".to_string(),
            sync_policy: SyncPolicy::Always,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the single-student file
    pub fn student_path(&self) -> PathBuf {
        self.data_dir.join(&self.student_file)
    }

    /// Full path of the roster file
    pub fn roster_path(&self) -> PathBuf {
        self.data_dir.join(&self.roster_file)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory (root for both files)
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the single-student file name
    pub fn student_file(mut self, name: impl Into<String>) -> Self {
        self.config.student_file = name.into();
        self
    }

    /// Set the roster file name
    pub fn roster_file(mut self, name: impl Into<String>) -> Self {
        self.config.roster_file = name.into();
        self
    }

    /// Set the write sync policy
    pub fn sync_policy(mut self, policy: SyncPolicy) -> Self {
        self.config.sync_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
