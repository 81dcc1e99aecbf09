//! Codec Module
//!
//! Converts students (and rosters of students) to and from framed bytes.
//!
//! ## File Format (V1)
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Header (16 bytes)                                       │
//! │   Magic: "RLBK" (4) | Version: u16 (2) | Kind: u8 (1)   │
//! │   Reserved: u8 (1) | PayloadLen: u32 (4) | CRC32 (4)    │
//! ├─────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes, bincode fixint LE)           │
//! │   Single: [Id: i32][NameLen: u64][Name][GradeLen][Grade]│
//! │   Roster: [Count: u64] followed by Count students       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The version field carries [`Student::FORMAT_VERSION`](crate::Student::FORMAT_VERSION).
//! A reader rejects any other version, so a layout change is detected
//! rather than silently misinterpreted.

mod frame;
mod record;

pub use frame::{FrameHeader, FrameKind};
pub use record::{decode, decode_many, encode, encode_many};

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a Rollbook file
pub const MAGIC: &[u8; 4] = b"RLBK";

/// Header size: Magic (4) + Version (2) + Kind (1) + Reserved (1) + Len (4) + CRC (4)
pub const HEADER_SIZE: usize = 16;
