//! Error types for Rollbook
//!
//! Provides a unified error type for all operations. Every variant is
//! terminal to the operation that raised it, never to the process.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RollbookError
pub type Result<T> = std::result::Result<T, RollbookError>;

/// Unified error type for Rollbook operations
#[derive(Debug, Error)]
pub enum RollbookError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InputFormat(String),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Encode error: {0}")]
    Encode(String),
}

/// Reasons a byte stream was rejected by the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("truncated data: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid magic bytes: not a rollbook file")]
    InvalidMagic,

    #[error("unsupported format version {found} (this build reads version {supported})")]
    UnsupportedVersion { found: u16, supported: u16 },

    #[error("unknown frame kind: 0x{0:02x}")]
    UnknownKind(u8),

    #[error("expected a {expected} frame, found a {found} frame")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0} unexpected trailing bytes")]
    TrailingBytes(usize),

    #[error("checksum mismatch: header says 0x{expected:08x}, payload is 0x{actual:08x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("malformed payload: {0}")]
    Payload(String),
}
