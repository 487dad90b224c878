//! Edge case integration tests for the BCC decoder.
//!
//! - **Header rejection**: each validated field, checked in order; a
//!   rejected header must fail before any curve data is looked at.
//! - **Truncation**: inside the header, at a length prefix, and inside a
//!   point record, each reported with the right curve and point index.
//! - **Length prefix extremes**: zero, `i32::MIN`, and lengths far larger
//!   than the remaining input.
//! - **Leniency**: advisory header fields and trailing bytes never cause
//!   a failure.

use bcc_decoder::{BccDecoder, DecodeError, TruncationSite};
use bcc_tests::{FixtureBuilder, helix};
use bcc_wire::HeaderField;

fn valid() -> FixtureBuilder {
    let mut builder = FixtureBuilder::new();
    builder
        .add_loop(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]])
        .add_open(&[[0.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
    builder
}

fn rejected_field(bytes: &[u8]) -> HeaderField {
    match BccDecoder::decode(bytes) {
        Err(DecodeError::UnsupportedFormat { field, .. }) => field,
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

// ── Header rejection ──────────────────────────────────────────────────────────

#[test]
fn wrong_signature() {
    let bytes = valid().signature(*b"BCD").encode();
    assert_eq!(rejected_field(&bytes), HeaderField::Signature);
}

#[test]
fn wrong_record_byte_width() {
    let bytes = valid().record_byte_width(0x48).encode();
    assert_eq!(rejected_field(&bytes), HeaderField::RecordByteWidth);
}

#[test]
fn wrong_curve_type() {
    let bytes = valid().curve_type(*b"PO").encode();
    assert_eq!(rejected_field(&bytes), HeaderField::CurveType);
}

#[test]
fn wrong_dimensions() {
    for dims in [0, 2, 4, 255] {
        let bytes = valid().dimensions(dims).encode();
        assert_eq!(rejected_field(&bytes), HeaderField::Dimensions);
    }
}

#[test]
fn rejection_reports_expected_and_found() {
    let bytes = valid().curve_type(*b"c0").encode();
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        &err,
        DecodeError::UnsupportedFormat { expected, found, .. }
            if expected == "\"C0\"" && found == "\"c0\""
    ));
}

#[test]
fn rejected_header_reads_no_curve_data() {
    // The body is truncated mid-record. Reading it would yield
    // TruncatedInput; a header rejection must come first.
    let mut bytes = valid().dimensions(2).encode();
    bytes.truncate(70);
    assert_eq!(rejected_field(&bytes), HeaderField::Dimensions);

    let mut bytes = valid().signature(*b"XYZ").encode();
    bytes.truncate(64);
    assert_eq!(rejected_field(&bytes), HeaderField::Signature);
}

// ── Truncation ────────────────────────────────────────────────────────────────

#[test]
fn truncated_mid_header() {
    let bytes = valid().encode();
    for len in [0, 1, 3, 24, 63] {
        let err = BccDecoder::decode(&bytes[..len]).unwrap_err();
        assert!(
            matches!(
                err,
                DecodeError::TruncatedInput {
                    site: TruncationSite::Header,
                    ..
                }
            ),
            "len {len}: {err:?}"
        );
    }
}

#[test]
fn declared_count_exceeds_data() {
    let bytes = valid().declared_curves(3).encode();
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            site: TruncationSite::CurveLength { curve: 2 },
            offset,
            needed: 4,
            available: 0,
        } if offset == bytes.len()
    ));
}

#[test]
fn huge_declared_count_fails_at_first_missing_curve() {
    let bytes = valid().declared_curves(u64::MAX).encode();
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            site: TruncationSite::CurveLength { curve: 2 },
            ..
        }
    ));
}

#[test]
fn partial_length_prefix() {
    let mut bytes = valid().declared_curves(3).encode();
    bytes.extend_from_slice(&[0x01, 0x00]);
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            site: TruncationSite::CurveLength { curve: 2 },
            available: 2,
            ..
        }
    ));
}

#[test]
fn truncated_mid_point() {
    let bytes = valid().encode();
    // Curve 1 starts at 64 + 4 + 36 = 104; its second point at 120.
    let cut = &bytes[..126];
    let err = BccDecoder::decode(cut).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            site: TruncationSite::ControlPoint { curve: 1, point: 1 },
            offset: 120,
            needed: 12,
            available: 6,
        }
    ));
}

#[test]
fn length_larger_than_file() {
    let bytes = FixtureBuilder::new()
        .add_raw(1_000_000, &helix(2))
        .encode();
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            site: TruncationSite::ControlPoint { curve: 0, point: 2 },
            ..
        }
    ));
}

#[test]
fn truncation_error_message_names_location() {
    let bytes = valid().encode();
    let err = BccDecoder::decode(&bytes[..126]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "truncated input in curve 1 control point 1 at offset 120: needed 12 bytes, 6 available"
    );
}

// ── Length prefix extremes ────────────────────────────────────────────────────

#[test]
fn min_length_is_malformed_not_wrapped() {
    let bytes = FixtureBuilder::new()
        .add_open(&helix(2))
        .add_raw(i32::MIN, &[])
        .encode();
    let err = BccDecoder::decode(&bytes).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::MalformedRecord {
            curve: 1,
            raw_length: i32::MIN
        }
    ));
}

#[test]
fn zero_length_curve_is_open_and_empty() {
    let bytes = FixtureBuilder::new()
        .add_open(&[])
        .add_loop(&helix(2))
        .encode();
    let decoded = BccDecoder::decode(&bytes).unwrap();
    let empty = &decoded.curves[0];
    assert_eq!(empty.point_count, 0);
    assert!(!empty.is_loop);
    assert!(empty.points.is_empty());
    assert_eq!(decoded.curves[1].start_index, 0);
}

#[test]
fn negative_length_magnitude_is_point_count() {
    let bytes = FixtureBuilder::new().add_raw(-4, &helix(4)).encode();
    let decoded = BccDecoder::decode(&bytes).unwrap();
    assert_eq!(decoded.curves[0].point_count, 4);
    assert!(decoded.curves[0].is_loop);
}

// ── Leniency ──────────────────────────────────────────────────────────────────

#[test]
fn advisory_point_total_not_checked() {
    for declared in [0, 4, 6, u64::MAX] {
        let bytes = valid().declared_points(declared).encode();
        let decoded = BccDecoder::decode(&bytes).unwrap();
        assert_eq!(decoded.decoded_points(), 5);
        assert_eq!(decoded.header.total_control_points, declared);
    }
}

#[test]
fn any_up_axis_and_file_info_accepted() {
    let bytes = valid()
        .up_axis(0xFF)
        .file_info(&[0xFF; 40])
        .encode();
    let decoded = BccDecoder::decode(&bytes).unwrap();
    assert_eq!(decoded.header.up_axis, 0xFF);
    assert_eq!(decoded.header.file_info.as_bytes(), &[0xFF; 40]);
}

#[test]
fn trailing_bytes_ignored() {
    let bytes = valid().trailing(b"extra").encode();
    let decoded = BccDecoder::decode(&bytes).unwrap();
    assert_eq!(decoded.curves.len(), 2);
    assert_eq!(decoded.trailing_bytes, 5);
}

#[test]
fn fewer_declared_than_present_reads_only_declared() {
    let bytes = valid().declared_curves(1).encode();
    let decoded = BccDecoder::decode(&bytes).unwrap();
    assert_eq!(decoded.curves.len(), 1);
    assert_eq!(decoded.trailing_bytes, 4 + 24);
}
