//! Student codec
//!
//! Encoding and decoding functions for single students and rosters.

use bincode::Options;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DecodeError, Result};
use crate::student::Student;
use crate::RollbookError;

use super::frame::{self, FrameKind};

// =============================================================================
// Single Student
// =============================================================================

/// Encode one student into a framed byte stream
///
/// Deterministic: equal students always produce identical bytes.
pub fn encode(student: &Student) -> Result<Vec<u8>> {
    let payload = serialize_payload(student)?;
    frame::seal(FrameKind::Single, &payload)
}

/// Decode one student from a framed byte stream
pub fn decode(bytes: &[u8]) -> Result<Student> {
    let payload = open_frame(bytes, FrameKind::Single)?;
    deserialize_payload(payload)
}

// =============================================================================
// Roster
// =============================================================================

/// Encode an ordered roster into a framed byte stream
///
/// Format: count (u64) followed by each student in order
pub fn encode_many(students: &[Student]) -> Result<Vec<u8>> {
    let payload = serialize_payload(students)?;
    frame::seal(FrameKind::Roster, &payload)
}

/// Decode an ordered roster from a framed byte stream
pub fn decode_many(bytes: &[u8]) -> Result<Vec<Student>> {
    let payload = open_frame(bytes, FrameKind::Roster)?;
    deserialize_payload(payload)
}

// =============================================================================
// Payload helpers
// =============================================================================

fn open_frame(bytes: &[u8], kind: FrameKind) -> Result<&[u8]> {
    frame::open(bytes, kind).map_err(|e| {
        tracing::warn!(error = %e, len = bytes.len(), "frame rejected");
        RollbookError::Decode(e)
    })
}

/// Fixed-width integers, little endian, no trailing bytes allowed
fn payload_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
}

fn serialize_payload<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    payload_options()
        .serialize(value)
        .map_err(|e| RollbookError::Encode(e.to_string()))
}

fn deserialize_payload<T: DeserializeOwned>(payload: &[u8]) -> Result<T> {
    payload_options().deserialize(payload).map_err(|e| {
        tracing::warn!(error = %e, "payload rejected");
        RollbookError::Decode(DecodeError::Payload(e.to_string()))
    })
}
