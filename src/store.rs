//! File Store
//!
//! Whole-file reads and writes of raw byte streams.
//!
//! ## Responsibilities
//! - Create or truncate the target file on write
//! - Distinguish a missing file from other I/O failures on read
//! - Release every file handle on all exit paths (handles are scoped values)
//!
//! A failed write may leave a truncated file behind; nothing is rolled back.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use crate::config::SyncPolicy;
use crate::error::Result;
use crate::RollbookError;

/// Write `bytes` to `path`, fsyncing before the handle is released
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    write_with(path, bytes, SyncPolicy::Always)
}

/// Write `bytes` to `path` with an explicit sync policy
pub fn write_with(path: &Path, bytes: &[u8], sync: SyncPolicy) -> Result<()> {
    tracing::debug!(path = %path.display(), "opening file for write");
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote and flushed");

    if sync == SyncPolicy::Always {
        let file = writer.into_inner().map_err(|e| RollbookError::Io(e.into_error()))?;
        file.sync_all()?;
        tracing::debug!(path = %path.display(), "synced to disk");
    }

    Ok(())
}

/// Read the whole file at `path`
///
/// Returns `NotFound` (never `Io`) when the file does not exist. Any other
/// failure to inspect the path (symlink loop, name too long, permissions)
/// is `Io`.
pub fn read(path: &Path) -> Result<Vec<u8>> {
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => return Err(RollbookError::NotFound(path.to_path_buf())),
        Err(e) => return Err(e.into()),
    }

    tracing::debug!(path = %path.display(), "opening file for read");
    let mut file = match File::open(path) {
        Ok(file) => file,
        // Deleted between the existence check and the open
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RollbookError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");

    Ok(bytes)
}
