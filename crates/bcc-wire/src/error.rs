use crate::header::HeaderField;

/// Byte-level errors raised while slicing a BCC buffer.
///
/// These carry raw offsets and values only. The decoder crate lifts them
/// into its own taxonomy, attaching which curve or point was being read.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before a fixed-width field or record could be read.
    ///
    /// `offset` is where the read started, relative to the slice handed
    /// to the reader. `needed` is the byte width of the field.
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A validated header field did not hold its required value.
    #[error("unsupported {field}: expected {expected}, found {found}")]
    UnsupportedField {
        field: HeaderField,
        expected: String,
        found: String,
    },

    /// A curve length prefix whose magnitude cannot be represented.
    ///
    /// Only `i32::MIN` triggers this: its absolute value does not fit
    /// in an `i32`.
    #[error("curve length {raw} has no representable point count")]
    LengthOverflow { raw: i32 },
}

impl WireError {
    /// Build an [`UnexpectedEof`](Self::UnexpectedEof) for a read of
    /// `needed` bytes at `offset` in a buffer of `len` bytes.
    #[must_use]
    pub fn eof(offset: usize, needed: usize, len: usize) -> Self {
        Self::UnexpectedEof {
            offset,
            needed,
            available: len.saturating_sub(offset),
        }
    }
}
