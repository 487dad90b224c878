use std::fmt;

use bcc_wire::{HeaderField, WireError};

/// Where in the file a read ran out of bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TruncationSite {
    /// The fixed 64-byte header.
    Header,

    /// The signed length prefix of curve `curve`.
    CurveLength { curve: u64 },

    /// Control point `point` of curve `curve`: the first point whose
    /// 12 bytes are not all present.
    ControlPoint { curve: u64, point: u32 },
}

impl fmt::Display for TruncationSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::CurveLength { curve } => write!(f, "curve {curve} length field"),
            Self::ControlPoint { curve, point } => {
                write!(f, "curve {curve} control point {point}")
            }
        }
    }
}

/// Errors that can occur while decoding a BCC file.
///
/// Every variant is fatal for the decode session: the first one aborts
/// the decode and no partial result is returned.
///
/// ```text
///   DecodeError
///   ├── TruncatedInput      ← input ended inside the header or a curve record
///   ├── UnsupportedFormat   ← signature, record width, curve type or dimensions wrong
///   ├── MalformedRecord     ← curve length prefix with no valid point count
///   └── Io(std::io::Error)  ← reading the source failed (path / reader entry points)
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before a required field or record was complete.
    ///
    /// `offset` is the absolute file offset where the failed read began.
    #[error("truncated input in {site} at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        site: TruncationSite,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A header field failed validation.
    #[error("unsupported format: {field} expected {expected}, found {found}")]
    UnsupportedFormat {
        field: HeaderField,
        expected: String,
        found: String,
    },

    /// A curve's length prefix cannot be turned into a point count.
    #[error("malformed record: curve {curve} has length {raw_length}")]
    MalformedRecord { curve: u64, raw_length: i32 },

    /// The byte source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Lift a wire-level error raised at absolute offset `base`.
    ///
    /// `site` names what was being read when the slice ran out; `curve`
    /// is the curve index used if the error is a rejected length prefix.
    pub(crate) fn from_wire(err: WireError, site: TruncationSite, base: usize, curve: u64) -> Self {
        match err {
            WireError::UnexpectedEof {
                offset,
                needed,
                available,
            } => Self::TruncatedInput {
                site,
                offset: base + offset,
                needed,
                available,
            },
            WireError::UnsupportedField {
                field,
                expected,
                found,
            } => Self::UnsupportedFormat {
                field,
                expected,
                found,
            },
            WireError::LengthOverflow { raw } => Self::MalformedRecord {
                curve,
                raw_length: raw,
            },
        }
    }

    /// The header field that failed validation, if this is an
    /// [`UnsupportedFormat`](Self::UnsupportedFormat) error.
    #[must_use]
    pub fn header_field(&self) -> Option<HeaderField> {
        match self {
            Self::UnsupportedFormat { field, .. } => Some(*field),
            _ => None,
        }
    }
}
