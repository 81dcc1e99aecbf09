//! # Rollbook
//!
//! Persist student records to disk and reconstruct them later:
//! - Explicit, versioned binary frame (magic, format tag, kind, CRC32)
//! - Whole-file store with scoped handles and a distinct not-found error
//! - Interactive menu shell over any `BufRead`/`Write` pair
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interactive Shell                       │
//! │                (menu, prompts, rendering)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    StudentArchive                           │
//! │          (student.ser / students_multiple.ser)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │          │ File Store  │
//!   │  (frames)   │          │ (read/write)│
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod student;
pub mod codec;
pub mod store;
pub mod archive;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, Result, RollbookError};
pub use config::{Config, SyncPolicy};
pub use student::Student;
pub use archive::StudentArchive;
pub use shell::Shell;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Rollbook
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
