use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use crate::error::WireError;

/// Format signature: ASCII "BCC".
/// Compared byte for byte, no case folding.
pub const BCC_SIGNATURE: [u8; 3] = *b"BCC";

/// Record byte width tag.
///
/// High nibble is the integer width, low nibble the float width. This
/// decoder reads 4-byte lengths and 4-byte floats only, so `0x44` is the
/// single accepted value.
pub const RECORD_BYTE_WIDTH: u8 = 0x44;

/// Curve type tag for uniform Catmull-Rom control polygons ("C0").
pub const CURVE_TYPE: [u8; 2] = *b"C0";

/// Every control point carries exactly three coordinates.
pub const DIMENSIONS: u8 = 3;

/// Size of the opaque file-info blob at the end of the header.
pub const FILE_INFO_SIZE: usize = 40;

/// Total header size in bytes (fixed).
pub const HEADER_SIZE: usize = 64;

/// The header fields that are checked against fixed values.
///
/// Listed in validation order: the first mismatch is the one reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderField {
    Signature,
    RecordByteWidth,
    CurveType,
    Dimensions,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Signature => "signature",
            Self::RecordByteWidth => "record byte width",
            Self::CurveType => "curve type",
            Self::Dimensions => "dimensions",
        };
        f.write_str(name)
    }
}

/// Up-axis hint, as written by the exporting tool.
///
/// Never validated. Values outside 0..=2 are kept as-is in
/// [`BccHeader::up_axis`] and map to `None` here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpAxis {
    X,
    Y,
    Z,
}

impl UpAxis {
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }
}

/// The 40-byte descriptive blob carried in every header.
///
/// Opaque to the decoder. Exporters usually store NUL-padded text here,
/// which [`text`](Self::text) recovers for display.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FileInfo([u8; FILE_INFO_SIZE]);

impl FileInfo {
    #[must_use]
    pub fn from_raw(raw: [u8; FILE_INFO_SIZE]) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; FILE_INFO_SIZE] {
        &self.0
    }

    /// The blob up to its first NUL, decoded as lossy UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(FILE_INFO_SIZE);
        String::from_utf8_lossy(&self.0[..end]).into_owned()
    }
}

impl Default for FileInfo {
    fn default() -> Self {
        Self([0; FILE_INFO_SIZE])
    }
}

impl fmt::Debug for FileInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FileInfo").field(&self.text()).finish()
    }
}

/// BCC file header: the first 64 bytes of every file.
///
/// ```text
/// ┌────────┬──────────┬─────────────────────────────────────────┐
/// │ Offset │ Size     │ Description                             │
/// ├────────┼──────────┼─────────────────────────────────────────┤
/// │ 0x00   │ 3 bytes  │ Signature: "BCC"                        │
/// │ 0x03   │ 1 byte   │ Record byte width (0x44)                │
/// │ 0x04   │ 2 bytes  │ Curve type: "C0"                        │
/// │ 0x06   │ 1 byte   │ Dimensions (3)                          │
/// │ 0x07   │ 1 byte   │ Up axis (informational)                 │
/// │ 0x08   │ 8 bytes  │ Curve count, u64 LE                     │
/// │ 0x10   │ 8 bytes  │ Total control points, u64 LE (advisory) │
/// │ 0x18   │ 40 bytes │ File info (opaque)                      │
/// └────────┴──────────┴─────────────────────────────────────────┘
/// ```
///
/// `up_axis`, `total_control_points` and `file_info` are informational
/// only. They are never validated, and `total_control_points` is not
/// compared against the number of points actually present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BccHeader {
    pub signature: [u8; 3],
    pub record_byte_width: u8,
    pub curve_type: [u8; 2],
    pub dimensions: u8,
    pub up_axis: u8,
    pub curve_count: u64,
    pub total_control_points: u64,
    pub file_info: FileInfo,
}

impl BccHeader {
    /// Parse and validate a header from the first 64 bytes of `buf`.
    ///
    /// Bytes past [`HEADER_SIZE`] are ignored.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the buffer is shorter than 64 bytes.
    /// - [`WireError::UnsupportedField`] for the first of signature, record
    ///   byte width, curve type or dimensions that does not match.
    pub fn read_from(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() < HEADER_SIZE {
            return Err(WireError::eof(0, HEADER_SIZE, buf.len()));
        }

        let signature = [buf[0], buf[1], buf[2]];
        if signature != BCC_SIGNATURE {
            return Err(unsupported(
                HeaderField::Signature,
                show_tag(&BCC_SIGNATURE),
                show_tag(&signature),
            ));
        }

        let record_byte_width = buf[3];
        if record_byte_width != RECORD_BYTE_WIDTH {
            return Err(unsupported(
                HeaderField::RecordByteWidth,
                format!("{RECORD_BYTE_WIDTH:#04X}"),
                format!("{record_byte_width:#04X}"),
            ));
        }

        let curve_type = [buf[4], buf[5]];
        if curve_type != CURVE_TYPE {
            return Err(unsupported(
                HeaderField::CurveType,
                show_tag(&CURVE_TYPE),
                show_tag(&curve_type),
            ));
        }

        let dimensions = buf[6];
        if dimensions != DIMENSIONS {
            return Err(unsupported(
                HeaderField::Dimensions,
                DIMENSIONS.to_string(),
                dimensions.to_string(),
            ));
        }

        let mut file_info = [0u8; FILE_INFO_SIZE];
        file_info.copy_from_slice(&buf[24..HEADER_SIZE]);

        Ok(Self {
            signature,
            record_byte_width,
            curve_type,
            dimensions,
            up_axis: buf[7],
            curve_count: LittleEndian::read_u64(&buf[8..16]),
            total_control_points: LittleEndian::read_u64(&buf[16..24]),
            file_info: FileInfo::from_raw(file_info),
        })
    }

    /// The up-axis hint, if it names one of the three axes.
    #[must_use]
    pub fn up_axis(&self) -> Option<UpAxis> {
        UpAxis::from_raw(self.up_axis)
    }
}

fn unsupported(field: HeaderField, expected: String, found: String) -> WireError {
    WireError::UnsupportedField {
        field,
        expected,
        found,
    }
}

/// Quote a byte tag, escaping anything outside printable ASCII.
fn show_tag(tag: &[u8]) -> String {
    format!("\"{}\"", tag.escape_ascii())
}
