//! Codec Tests
//!
//! These tests verify:
//! - Single student and roster round trips
//! - Deterministic encoding
//! - Header layout (magic, version, kind, length, CRC)
//! - Rejection of truncated, altered, and mismatched frames

use rollbook::codec::{
    decode, decode_many, encode, encode_many, FrameHeader, FrameKind, HEADER_SIZE, MAGIC,
};
use rollbook::{DecodeError, RollbookError, Student};

// =============================================================================
// Helper Functions
// =============================================================================

fn alice() -> Student {
    Student::new(101, "Alice", "A")
}

fn sample_roster() -> Vec<Student> {
    vec![
        Student::new(1, "Ada", "A+"),
        Student::new(2, "Brendan", "B"),
        Student::new(3, "Chidi", "C-"),
    ]
}

fn expect_decode_error(result: rollbook::Result<impl std::fmt::Debug>) -> DecodeError {
    match result {
        Err(RollbookError::Decode(e)) => e,
        other => panic!("Expected decode error, got {:?}", other),
    }
}

/// Overwrite the header CRC so payload edits reach the payload decoder
fn reseal(bytes: &mut [u8]) {
    let crc = crc32fast::hash(&bytes[HEADER_SIZE..]);
    bytes[12..16].copy_from_slice(&crc.to_le_bytes());
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_round_trip_single() {
    let student = alice();
    let decoded = decode(&encode(&student).unwrap()).unwrap();

    assert_eq!(decoded, student);
    assert_eq!(decoded.id(), 101);
    assert_eq!(decoded.name(), "Alice");
    assert_eq!(decoded.grade(), "A");
}

#[test]
fn test_round_trip_empty_strings() {
    let student = Student::new(0, "", "");
    let decoded = decode(&encode(&student).unwrap()).unwrap();

    assert_eq!(decoded, student);
    assert!(decoded.name().is_empty());
    assert!(decoded.grade().is_empty());
}

#[test]
fn test_round_trip_extreme_ids() {
    for id in [i32::MIN, -1, 0, 1, i32::MAX] {
        let student = Student::new(id, "Edge", "E");
        assert_eq!(decode(&encode(&student).unwrap()).unwrap(), student);
    }
}

#[test]
fn test_round_trip_unicode_and_whitespace() {
    let student = Student::new(7, "  Zoë Łukasiewicz 山田  ", "A\tplus\n");
    assert_eq!(decode(&encode(&student).unwrap()).unwrap(), student);
}

#[test]
fn test_round_trip_long_name() {
    let student = Student::new(9, "x".repeat(100_000), "B");
    assert_eq!(decode(&encode(&student).unwrap()).unwrap(), student);
}

#[test]
fn test_round_trip_roster_preserves_order() {
    let roster = sample_roster();
    let decoded = decode_many(&encode_many(&roster).unwrap()).unwrap();

    assert_eq!(decoded, roster);
    let ids: Vec<i32> = decoded.iter().map(Student::id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_round_trip_empty_roster() {
    let decoded = decode_many(&encode_many(&[]).unwrap()).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn test_round_trip_roster_with_duplicates() {
    let roster = vec![alice(), alice(), Student::new(101, "Alice", "B")];
    assert_eq!(decode_many(&encode_many(&roster).unwrap()).unwrap(), roster);
}

#[test]
fn test_encoding_is_deterministic() {
    assert_eq!(encode(&alice()).unwrap(), encode(&alice()).unwrap());
    assert_eq!(
        encode_many(&sample_roster()).unwrap(),
        encode_many(&sample_roster()).unwrap()
    );
}

// =============================================================================
// Header Layout Tests
// =============================================================================

#[test]
fn test_header_layout() {
    let bytes = encode(&alice()).unwrap();

    assert_eq!(&bytes[0..4], MAGIC);
    assert_eq!(
        u16::from_le_bytes([bytes[4], bytes[5]]),
        Student::FORMAT_VERSION
    );
    assert_eq!(bytes[6], FrameKind::Single as u8);
    assert_eq!(bytes[7], 0);

    let payload_len = u32::from_le_bytes(bytes[8..12].try_into().unwrap()) as usize;
    assert_eq!(bytes.len(), HEADER_SIZE + payload_len);

    // id (4) + name len (8) + "Alice" (5) + grade len (8) + "A" (1)
    assert_eq!(payload_len, 4 + 8 + 5 + 8 + 1);
    assert_eq!(i32::from_le_bytes(bytes[16..20].try_into().unwrap()), 101);
}

#[test]
fn test_header_parse() {
    let bytes = encode_many(&sample_roster()).unwrap();
    let header = FrameHeader::parse(&bytes).unwrap();

    assert_eq!(header.version, Student::FORMAT_VERSION);
    assert_eq!(header.kind, FrameKind::Roster);
    assert_eq!(header.payload_len as usize, bytes.len() - HEADER_SIZE);
    assert_eq!(header.payload_crc, crc32fast::hash(&bytes[HEADER_SIZE..]));
}

#[test]
fn test_roster_payload_starts_with_count() {
    let bytes = encode_many(&sample_roster()).unwrap();
    let count = u64::from_le_bytes(bytes[16..24].try_into().unwrap());
    assert_eq!(count, 3);
}

// =============================================================================
// Rejection Tests
// =============================================================================

#[test]
fn test_every_prefix_is_rejected() {
    let bytes = encode(&alice()).unwrap();

    for len in 0..bytes.len() {
        let err = expect_decode_error(decode(&bytes[..len]));
        assert!(
            matches!(err, DecodeError::Truncated { .. }),
            "prefix of {} bytes gave {:?}",
            len,
            err
        );
    }
}

#[test]
fn test_every_roster_prefix_is_rejected() {
    let bytes = encode_many(&sample_roster()).unwrap();

    for len in 0..bytes.len() {
        let err = expect_decode_error(decode_many(&bytes[..len]));
        assert!(
            matches!(err, DecodeError::Truncated { .. }),
            "prefix of {} bytes gave {:?}",
            len,
            err
        );
    }
}

#[test]
fn test_truncated_by_one_byte() {
    let bytes = encode(&alice()).unwrap();
    let err = expect_decode_error(decode(&bytes[..bytes.len() - 1]));

    assert_eq!(
        err,
        DecodeError::Truncated {
            expected: bytes.len(),
            actual: bytes.len() - 1,
        }
    );
}

#[test]
fn test_trailing_bytes_rejected() {
    let mut bytes = encode(&alice()).unwrap();
    bytes.extend_from_slice(&[0, 0]);

    assert_eq!(expect_decode_error(decode(&bytes)), DecodeError::TrailingBytes(2));
}

#[test]
fn test_altered_version_rejected() {
    let mut bytes = encode(&alice()).unwrap();
    let future = Student::FORMAT_VERSION + 1;
    bytes[4..6].copy_from_slice(&future.to_le_bytes());

    assert_eq!(
        expect_decode_error(decode(&bytes)),
        DecodeError::UnsupportedVersion {
            found: future,
            supported: Student::FORMAT_VERSION,
        }
    );
}

#[test]
fn test_version_zero_rejected() {
    let mut bytes = encode_many(&sample_roster()).unwrap();
    bytes[4..6].copy_from_slice(&0u16.to_le_bytes());

    assert!(matches!(
        expect_decode_error(decode_many(&bytes)),
        DecodeError::UnsupportedVersion { found: 0, .. }
    ));
}

#[test]
fn test_bad_magic_rejected() {
    let mut bytes = encode(&alice()).unwrap();
    bytes[0] = b'X';

    assert_eq!(expect_decode_error(decode(&bytes)), DecodeError::InvalidMagic);
}

#[test]
fn test_unknown_kind_rejected() {
    let mut bytes = encode(&alice()).unwrap();
    bytes[6] = 0x7F;

    assert_eq!(expect_decode_error(decode(&bytes)), DecodeError::UnknownKind(0x7F));
}

#[test]
fn test_kind_mismatch_rejected() {
    let single = encode(&alice()).unwrap();
    let roster = encode_many(&sample_roster()).unwrap();

    assert!(matches!(
        expect_decode_error(decode_many(&single)),
        DecodeError::KindMismatch { .. }
    ));
    assert!(matches!(
        expect_decode_error(decode(&roster)),
        DecodeError::KindMismatch { .. }
    ));
}

#[test]
fn test_flipped_payload_byte_fails_checksum() {
    let mut bytes = encode(&alice()).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;

    assert!(matches!(
        expect_decode_error(decode(&bytes)),
        DecodeError::ChecksumMismatch { .. }
    ));
}

#[test]
fn test_invalid_utf8_rejected() {
    let mut bytes = encode(&alice()).unwrap();
    // First byte of "Alice": 16 header + 4 id + 8 length
    bytes[28] = 0xFF;
    reseal(&mut bytes);

    assert!(matches!(
        expect_decode_error(decode(&bytes)),
        DecodeError::Payload(_)
    ));
}

#[test]
fn test_roster_count_overstated_rejected() {
    let mut bytes = encode_many(&[alice()]).unwrap();
    bytes[16..24].copy_from_slice(&2u64.to_le_bytes());
    reseal(&mut bytes);

    assert!(matches!(
        expect_decode_error(decode_many(&bytes)),
        DecodeError::Payload(_)
    ));
}

#[test]
fn test_roster_count_understated_rejected() {
    let mut bytes = encode_many(&[alice()]).unwrap();
    bytes[16..24].copy_from_slice(&0u64.to_le_bytes());
    reseal(&mut bytes);

    assert!(matches!(
        expect_decode_error(decode_many(&bytes)),
        DecodeError::Payload(_)
    ));
}

#[test]
fn test_garbage_rejected() {
    let garbage: Vec<u8> = (0..=255).collect();
    assert!(decode(&garbage).is_err());
    assert!(decode_many(&garbage).is_err());
    assert!(decode(&[]).is_err());
}
