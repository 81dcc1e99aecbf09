//! Student record
//!
//! The unit of data persisted by the archive.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single student entry
///
/// Immutable once constructed: fields are only reachable through accessors.
/// No bounds are enforced on any field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    id: i32,
    name: String,
    grade: String,
}

impl Student {
    /// Format version written into every encoded frame
    ///
    /// Bump this whenever the payload layout changes; older builds will then
    /// reject the new files instead of misreading them.
    pub const FORMAT_VERSION: u16 = 1;

    pub fn new(id: i32, name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            grade: grade.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Grade: {}", self.grade)
    }
}
