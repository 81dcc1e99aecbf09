//! Archive Module
//!
//! Coordinates the codec and the file store over the two configured files.
//!
//! ## Responsibilities
//! - Prepare the data directory on open
//! - Route single students and rosters to their own files
//! - Log each completed save and load

use std::fs;
use std::path::PathBuf;

use crate::codec;
use crate::config::Config;
use crate::error::Result;
use crate::store;
use crate::student::Student;

/// A pair of student files under one data directory
///
/// Single-process, single-user: nothing guards against concurrent writers.
pub struct StudentArchive {
    config: Config,
}

impl StudentArchive {
    /// Open an archive, creating the data directory if it doesn't exist
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;
        tracing::debug!(data_dir = %config.data_dir.display(), "archive opened");
        Ok(Self { config })
    }

    /// Encode and write one student to the single-student file
    ///
    /// Returns the path written.
    pub fn save_student(&self, student: &Student) -> Result<PathBuf> {
        let path = self.student_path();
        let bytes = codec::encode(student)?;
        store::write_with(&path, &bytes, self.config.sync_policy)?;

        tracing::info!(path = %path.display(), id = student.id(), "student saved");
        Ok(path)
    }

    /// Read and decode the single-student file
    pub fn load_student(&self) -> Result<Student> {
        let path = self.student_path();
        let bytes = store::read(&path)?;
        let student = codec::decode(&bytes)?;

        tracing::info!(path = %path.display(), id = student.id(), "student loaded");
        Ok(student)
    }

    /// Encode and write an ordered roster to the roster file
    pub fn save_roster(&self, students: &[Student]) -> Result<PathBuf> {
        let path = self.roster_path();
        let bytes = codec::encode_many(students)?;
        store::write_with(&path, &bytes, self.config.sync_policy)?;

        tracing::info!(path = %path.display(), count = students.len(), "roster saved");
        Ok(path)
    }

    /// Read and decode the roster file, preserving order
    pub fn load_roster(&self) -> Result<Vec<Student>> {
        let path = self.roster_path();
        let bytes = store::read(&path)?;
        let students = codec::decode_many(&bytes)?;

        tracing::info!(path = %path.display(), count = students.len(), "roster loaded");
        Ok(students)
    }

    pub fn student_path(&self) -> PathBuf {
        self.config.student_path()
    }

    pub fn roster_path(&self) -> PathBuf {
        self.config.roster_path()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
