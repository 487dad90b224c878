use bcc_types::{ControlPoint, Curve};
use bcc_wire::curve_frame::{
    CONTROL_POINT_SIZE, CurveLength, LENGTH_PREFIX_SIZE, read_control_point,
};
use log::trace;

use crate::error::{DecodeError, TruncationSite};

/// Cursor-based reader for the curve records that follow the header.
///
/// Yields exactly `declared` curves, in file order, then stops. The
/// count always comes from the header; the reader never infers it from
/// how many bytes remain. After the first error the reader is exhausted.
///
/// Each record is validated in full before any byte of it is
/// interpreted: the length prefix is read and checked, then the whole
/// `point_count * 12` byte extent is bounds-checked, and only then are
/// the points decoded.
///
/// ```text
///   let mut reader = CurveReader::new(body, header.curve_count, HEADER_SIZE);
///   while let Some(curve) = reader.next_curve()? {
///       // curve.start_index == points in all earlier curves
///   }
/// ```
pub struct CurveReader<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Absolute file offset of `buf[0]`, used in error reports.
    base: usize,
    declared: u64,
    curve: u64,
    next_start: u64,
    done: bool,
}

impl<'a> CurveReader<'a> {
    /// Create a reader over `buf`, which begins at absolute file offset
    /// `base` and should hold `declared` curve records.
    #[must_use]
    pub fn new(buf: &'a [u8], declared: u64, base: usize) -> Self {
        Self {
            buf,
            pos: 0,
            base,
            declared,
            curve: 0,
            next_start: 0,
            done: declared == 0,
        }
    }

    /// Read the next curve record.
    ///
    /// Returns `Ok(None)` once all declared curves have been read.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::TruncatedInput`] if the length prefix or any
    ///   control point of the current curve is cut short.
    /// - [`DecodeError::MalformedRecord`] if the length prefix is
    ///   `i32::MIN`.
    pub fn next_curve(&mut self) -> Result<Option<Curve>, DecodeError> {
        if self.done {
            return Ok(None);
        }

        match self.read_record() {
            Ok(curve) => {
                self.curve += 1;
                self.next_start = curve.end_index();
                if self.curve == self.declared {
                    self.done = true;
                }
                Ok(Some(curve))
            }
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }

    fn read_record(&mut self) -> Result<Curve, DecodeError> {
        let buf = self.buf;
        let index = self.curve;
        let prefix_at = self.pos;

        let raw = CurveLength::read_raw(&buf[prefix_at..]).map_err(|e| {
            DecodeError::from_wire(
                e,
                TruncationSite::CurveLength { curve: index },
                self.base + prefix_at,
                index,
            )
        })?;

        let length = CurveLength::from_raw(raw).map_err(|e| {
            DecodeError::from_wire(
                e,
                TruncationSite::CurveLength { curve: index },
                self.base + prefix_at,
                index,
            )
        })?;

        let body_at = prefix_at + LENGTH_PREFIX_SIZE;
        let available = buf.len() - body_at;
        let body_len = length.body_len().ok_or(DecodeError::MalformedRecord {
            curve: index,
            raw_length: raw,
        })?;

        if body_len > available {
            let complete = available / CONTROL_POINT_SIZE;
            let point = u32::try_from(complete).unwrap_or(length.point_count);
            return Err(DecodeError::TruncatedInput {
                site: TruncationSite::ControlPoint {
                    curve: index,
                    point,
                },
                offset: self.base + body_at + complete * CONTROL_POINT_SIZE,
                needed: CONTROL_POINT_SIZE,
                available: available - complete * CONTROL_POINT_SIZE,
            });
        }

        let body = &buf[body_at..body_at + body_len];
        let mut points = Vec::with_capacity(body_len / CONTROL_POINT_SIZE);
        for (i, chunk) in body.chunks_exact(CONTROL_POINT_SIZE).enumerate() {
            let xyz = read_control_point(chunk).map_err(|e| {
                DecodeError::from_wire(
                    e,
                    TruncationSite::ControlPoint {
                        curve: index,
                        point: u32::try_from(i).unwrap_or(length.point_count),
                    },
                    self.base + body_at + i * CONTROL_POINT_SIZE,
                    index,
                )
            })?;
            points.push(ControlPoint::from(xyz));
        }

        self.pos = body_at + body_len;

        trace!(
            "curve {index}: {} points, loop={}, start={}",
            length.point_count, length.is_loop, self.next_start
        );

        Ok(Curve {
            start_index: self.next_start,
            point_count: length.point_count,
            is_loop: length.is_loop,
            points,
        })
    }

    /// Number of curves read so far.
    #[must_use]
    pub fn curves_read(&self) -> u64 {
        self.curve
    }

    /// Running total of control points read so far.
    #[must_use]
    pub fn points_read(&self) -> u64 {
        self.next_start
    }

    /// Bytes consumed from the reader's buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl Iterator for CurveReader<'_> {
    type Item = Result<Curve, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_curve().transpose()
    }
}

impl std::iter::FusedIterator for CurveReader<'_> {}
