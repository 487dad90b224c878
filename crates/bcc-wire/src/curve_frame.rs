use byteorder::{ByteOrder, LittleEndian};

use crate::error::WireError;

/// Width of the signed length prefix in front of every curve record.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Width of one control point: three little-endian `f32`s.
pub const CONTROL_POINT_SIZE: usize = 12;

/// Decoded curve length prefix.
///
/// On the wire this is a single `i32`: the magnitude is the number of
/// control points that follow, the sign marks a closed loop.
///
/// ```text
/// ┌──────────────┬───────────────────────────────────────┐
/// │ raw length   │ meaning                               │
/// ├──────────────┼───────────────────────────────────────┤
/// │  n  (n >= 0) │ open curve, n control points          │
/// │ -n  (n > 0)  │ loop, n control points                │
/// │ i32::MIN     │ rejected: |i32::MIN| overflows i32    │
/// └──────────────┴───────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveLength {
    pub point_count: u32,
    pub is_loop: bool,
}

impl CurveLength {
    /// Interpret a raw signed length.
    ///
    /// # Errors
    ///
    /// [`WireError::LengthOverflow`] for `i32::MIN`.
    pub fn from_raw(raw: i32) -> Result<Self, WireError> {
        let magnitude = raw
            .checked_abs()
            .ok_or(WireError::LengthOverflow { raw })?;

        Ok(Self {
            point_count: magnitude.unsigned_abs(),
            is_loop: raw < 0,
        })
    }

    /// Read the 4-byte length prefix at the start of `buf`.
    ///
    /// Returns the raw value alongside the decoded length so callers can
    /// report it when it is rejected.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_raw(buf: &[u8]) -> Result<i32, WireError> {
        let bytes = buf
            .get(..LENGTH_PREFIX_SIZE)
            .ok_or_else(|| WireError::eof(0, LENGTH_PREFIX_SIZE, buf.len()))?;
        Ok(LittleEndian::read_i32(bytes))
    }

    /// Byte extent of the point records that follow this prefix.
    ///
    /// `None` when the product does not fit in `usize`, which can only
    /// happen on 32-bit targets.
    #[must_use]
    pub fn body_len(self) -> Option<usize> {
        usize::try_from(self.point_count)
            .ok()?
            .checked_mul(CONTROL_POINT_SIZE)
    }
}

/// Read one `(x, y, z)` control point from the start of `buf`.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 12 bytes remain.
pub fn read_control_point(buf: &[u8]) -> Result<[f32; 3], WireError> {
    let bytes = buf
        .get(..CONTROL_POINT_SIZE)
        .ok_or_else(|| WireError::eof(0, CONTROL_POINT_SIZE, buf.len()))?;

    let mut xyz = [0f32; 3];
    LittleEndian::read_f32_into(bytes, &mut xyz);
    Ok(xyz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_length_is_open() {
        let len = CurveLength::from_raw(7).unwrap();
        assert_eq!(
            len,
            CurveLength {
                point_count: 7,
                is_loop: false
            }
        );
    }

    #[test]
    fn negative_length_is_loop() {
        let len = CurveLength::from_raw(-3).unwrap();
        assert_eq!(len.point_count, 3);
        assert!(len.is_loop);
    }

    #[test]
    fn zero_length_is_open_and_empty() {
        let len = CurveLength::from_raw(0).unwrap();
        assert_eq!(len.point_count, 0);
        assert!(!len.is_loop);
        assert_eq!(len.body_len(), Some(0));
    }

    #[test]
    fn extreme_lengths() {
        let max = CurveLength::from_raw(i32::MAX).unwrap();
        assert_eq!(max.point_count, 2_147_483_647);

        let min_plus_one = CurveLength::from_raw(i32::MIN + 1).unwrap();
        assert_eq!(min_plus_one.point_count, 2_147_483_647);
        assert!(min_plus_one.is_loop);
    }

    #[test]
    fn reject_min_length() {
        let result = CurveLength::from_raw(i32::MIN);
        assert!(matches!(
            result,
            Err(WireError::LengthOverflow { raw: i32::MIN })
        ));
    }

    #[test]
    fn read_raw_is_little_endian() {
        let raw = CurveLength::read_raw(&[0xFD, 0xFF, 0xFF, 0xFF, 0x99]).unwrap();
        assert_eq!(raw, -3);
    }

    #[test]
    fn read_raw_short_buffer() {
        let result = CurveLength::read_raw(&[0x01, 0x00]);
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEof {
                needed: 4,
                available: 2,
                ..
            })
        ));
    }

    #[test]
    fn body_len_scales_by_point_size() {
        let len = CurveLength::from_raw(-5).unwrap();
        assert_eq!(len.body_len(), Some(60));
    }

    #[test]
    fn reads_point_bits_exactly() {
        let values = [1.5f32, -0.0, f32::MIN_POSITIVE];
        let mut buf = Vec::new();
        for v in values {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        let xyz = read_control_point(&buf).unwrap();
        for (got, want) in xyz.iter().zip(values) {
            assert_eq!(got.to_bits(), want.to_bits());
        }
    }

    #[test]
    fn read_point_short_buffer() {
        let result = read_control_point(&[0u8; 11]);
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEof {
                needed: 12,
                available: 11,
                ..
            })
        ));
    }
}
