use std::fs::File;
use std::io::Read;
use std::path::Path;

use bcc_types::Curve;
use bcc_wire::header::{BccHeader, HEADER_SIZE};
use log::{debug, warn};

use crate::curve_reader::CurveReader;
use crate::error::{DecodeError, TruncationSite};

/// The result of decoding a BCC file.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ DecodedFile                                          │
/// │   header: BccHeader     ← validated, informational   │
/// │   curves: Vec<Curve>    ← file order                 │
/// │   trailing_bytes: usize ← ignored after last curve   │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug)]
pub struct DecodedFile {
    pub header: BccHeader,

    /// Exactly `header.curve_count` curves, in file order.
    pub curves: Vec<Curve>,

    /// Bytes left over after the last declared curve. They are not an
    /// error; the format has no terminator to check them against.
    pub trailing_bytes: usize,
}

impl DecodedFile {
    /// Control points actually decoded, summed across curves.
    #[must_use]
    pub fn decoded_points(&self) -> u64 {
        self.curves.iter().map(|c| u64::from(c.point_count)).sum()
    }

    /// Whether the header's advisory point total agrees with what was
    /// decoded. A mismatch never fails decoding.
    #[must_use]
    pub fn declared_total_matches(&self) -> bool {
        self.header.total_control_points == self.decoded_points()
    }
}

/// Synchronous BCC decoder: parses a complete in-memory file.
///
/// Decoding runs in two strictly forward stages:
///
///   1. **Header**: read and validate the fixed 64-byte header
///      (signature, record byte width, curve type, dimensions).
///   2. **Curves**: read `curve_count` variable-length curve records,
///      assigning each its global `start_index`.
///
/// Neither stage looks ahead or backtracks, and the first error aborts
/// the whole decode.
///
/// The header's `total_control_points` is advisory. It is compared with
/// the decoded total only to log a warning; files where the two differ
/// still decode.
///
/// # Example
///
/// ```rust
/// use bcc_decoder::{BccDecoder, DecodeError};
///
/// let err = BccDecoder::decode(b"BCC").unwrap_err();
/// assert!(matches!(err, DecodeError::TruncatedInput { .. }));
/// ```
pub struct BccDecoder;

impl BccDecoder {
    /// Decode a complete BCC file from a byte slice.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TruncatedInput`] if the header or any declared
    ///   curve record is cut short.
    /// - [`DecodeError::UnsupportedFormat`] if a validated header field
    ///   has the wrong value. No curve data is read in that case.
    /// - [`DecodeError::MalformedRecord`] if a curve length is `i32::MIN`.
    pub fn decode(bytes: &[u8]) -> Result<DecodedFile, DecodeError> {
        let header = Self::read_header(bytes)?;
        debug!(
            "header: {} curves, {} control points declared, up axis {}",
            header.curve_count, header.total_control_points, header.up_axis
        );

        let body = &bytes[HEADER_SIZE..];
        let mut reader = CurveReader::new(body, header.curve_count, HEADER_SIZE);
        let mut curves = Vec::with_capacity(capacity_hint(header.curve_count, body.len()));
        while let Some(curve) = reader.next_curve()? {
            curves.push(curve);
        }

        let trailing_bytes = reader.remaining().len();
        if trailing_bytes > 0 {
            debug!("{trailing_bytes} trailing bytes after curve {}", curves.len());
        }

        let decoded = DecodedFile {
            header,
            curves,
            trailing_bytes,
        };

        if !decoded.declared_total_matches() {
            warn!(
                "header declares {} control points, decoded {}",
                decoded.header.total_control_points,
                decoded.decoded_points()
            );
        }

        debug!(
            "decoded {} curves, {} control points",
            decoded.curves.len(),
            decoded.decoded_points()
        );
        Ok(decoded)
    }

    /// Read and validate the header at the start of `bytes`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TruncatedInput`] with site `Header` if fewer
    ///   than 64 bytes are available.
    /// - [`DecodeError::UnsupportedFormat`] naming the first field that
    ///   failed validation.
    pub fn read_header(bytes: &[u8]) -> Result<BccHeader, DecodeError> {
        BccHeader::read_from(bytes)
            .map_err(|e| DecodeError::from_wire(e, TruncationSite::Header, 0, 0))
    }

    /// Decode `curve_count` curve records from `body`.
    ///
    /// `body` is the data immediately following the header; offsets in
    /// errors are reported as absolute file offsets on that assumption.
    /// Bytes past the last declared curve are ignored.
    ///
    /// # Errors
    ///
    /// [`DecodeError::TruncatedInput`] or [`DecodeError::MalformedRecord`]
    /// for the first curve that cannot be read.
    pub fn decode_curves(body: &[u8], curve_count: u64) -> Result<Vec<Curve>, DecodeError> {
        CurveReader::new(body, curve_count, HEADER_SIZE).collect()
    }

    /// Read `reader` to the end, then decode.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Io`] if reading fails, otherwise as
    /// [`decode`](Self::decode).
    pub fn decode_reader(mut reader: impl Read) -> Result<DecodedFile, DecodeError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::decode(&bytes)
    }

    /// Open, fully read and decode the file at `path`.
    ///
    /// The file handle is closed before decoding starts, so it is
    /// released on every exit path.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Io`] if the file cannot be opened or read,
    /// otherwise as [`decode`](Self::decode).
    pub fn decode_path(path: impl AsRef<Path>) -> Result<DecodedFile, DecodeError> {
        let path = path.as_ref();
        let bytes = {
            let mut file = File::open(path)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            bytes
        };
        debug!("read {} bytes from {}", bytes.len(), path.display());
        Self::decode(&bytes)
    }
}

/// Upper bound on how many curves `body` could possibly hold, so a
/// corrupt count cannot trigger a huge up-front allocation.
/// Upper bound on curves reserved before any record has been read.
const MAX_PREALLOCATED_CURVES: usize = 4096;

fn capacity_hint(declared: u64, body_len: usize) -> usize {
    let fit = (body_len / bcc_wire::LENGTH_PREFIX_SIZE).min(MAX_PREALLOCATED_CURVES);
    usize::try_from(declared).map_or(fit, |d| d.min(fit))
}
