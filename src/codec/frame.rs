//! Frame header
//!
//! Writes and validates the fixed header that wraps every payload.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::{DecodeError, Result};
use crate::student::Student;
use crate::RollbookError;

use super::{HEADER_SIZE, MAGIC};

/// What a frame's payload holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameKind {
    Single = 0x01,
    Roster = 0x02,
}

impl FrameKind {
    pub fn name(self) -> &'static str {
        match self {
            FrameKind::Single => "single-student",
            FrameKind::Roster => "roster",
        }
    }
}

impl TryFrom<u8> for FrameKind {
    type Error = DecodeError;

    fn try_from(byte: u8) -> std::result::Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(FrameKind::Single),
            0x02 => Ok(FrameKind::Roster),
            other => Err(DecodeError::UnknownKind(other)),
        }
    }
}

/// Parsed header of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: u16,
    pub kind: FrameKind,
    pub payload_len: u32,
    pub payload_crc: u32,
}

impl FrameHeader {
    /// Parse and validate the header at the start of `bytes`
    ///
    /// Checks magic, version and kind; does not look at the payload.
    pub fn parse(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DecodeError::Truncated {
                expected: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let mut header = &bytes[..HEADER_SIZE];

        if &header[..4] != MAGIC {
            return Err(DecodeError::InvalidMagic);
        }
        header.advance(4);

        let version = header.get_u16_le();
        if version != Student::FORMAT_VERSION {
            return Err(DecodeError::UnsupportedVersion {
                found: version,
                supported: Student::FORMAT_VERSION,
            });
        }

        let kind = FrameKind::try_from(header.get_u8())?;
        let _reserved = header.get_u8();
        let payload_len = header.get_u32_le();
        let payload_crc = header.get_u32_le();

        Ok(Self {
            version,
            kind,
            payload_len,
            payload_crc,
        })
    }
}

/// Wrap a payload in a frame of the given kind
pub(crate) fn seal(kind: FrameKind, payload: &[u8]) -> Result<Vec<u8>> {
    let payload_len = u32::try_from(payload.len()).map_err(|_| {
        RollbookError::Encode(format!(
            "payload of {} bytes exceeds the 4 GiB frame limit",
            payload.len()
        ))
    })?;

    let mut buf = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    buf.put_slice(MAGIC);
    buf.put_u16_le(Student::FORMAT_VERSION);
    buf.put_u8(kind as u8);
    buf.put_u8(0);
    buf.put_u32_le(payload_len);
    buf.put_u32_le(crc32fast::hash(payload));
    buf.put_slice(payload);

    Ok(buf.to_vec())
}

/// Validate a frame and return its payload
///
/// The frame must be exactly `HEADER_SIZE + payload_len` bytes long, of the
/// expected kind, and its payload must match the stored CRC32.
pub(crate) fn open(bytes: &[u8], expected: FrameKind) -> std::result::Result<&[u8], DecodeError> {
    let header = FrameHeader::parse(bytes)?;

    if header.kind != expected {
        return Err(DecodeError::KindMismatch {
            expected: expected.name(),
            found: header.kind.name(),
        });
    }

    let total_len = HEADER_SIZE + header.payload_len as usize;
    if bytes.len() < total_len {
        return Err(DecodeError::Truncated {
            expected: total_len,
            actual: bytes.len(),
        });
    }
    if bytes.len() > total_len {
        return Err(DecodeError::TrailingBytes(bytes.len() - total_len));
    }

    let payload = &bytes[HEADER_SIZE..total_len];
    let actual = crc32fast::hash(payload);
    if actual != header.payload_crc {
        return Err(DecodeError::ChecksumMismatch {
            expected: header.payload_crc,
            actual,
        });
    }

    Ok(payload)
}
