//! Test fixtures for the BCC workspace.
//!
//! The product has no write path, so integration tests and benches build
//! their input bytes here. [`FixtureBuilder`] produces a valid file by
//! default; its setters deliberately allow every header field and every
//! length prefix to be wrong so the decoder's failure modes can be hit.
//!
//! ```rust
//! use bcc_tests::FixtureBuilder;
//!
//! let bytes = FixtureBuilder::new()
//!     .add_loop(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]])
//!     .add_open(&[[0.0, 0.0, 1.0], [0.0, 1.0, 1.0]])
//!     .encode();
//! assert_eq!(bytes.len(), 64 + 4 + 36 + 4 + 24);
//! ```

use bcc_wire::header::{
    BCC_SIGNATURE, CURVE_TYPE, DIMENSIONS, FILE_INFO_SIZE, HEADER_SIZE, RECORD_BYTE_WIDTH,
};

/// Builder for synthetic BCC payloads.
#[derive(Clone, Debug)]
pub struct FixtureBuilder {
    signature: [u8; 3],
    record_byte_width: u8,
    curve_type: [u8; 2],
    dimensions: u8,
    up_axis: u8,
    declared_curves: Option<u64>,
    declared_points: Option<u64>,
    file_info: [u8; FILE_INFO_SIZE],
    curves: Vec<(i32, Vec<[f32; 3]>)>,
    trailing: Vec<u8>,
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureBuilder {
    /// A valid, empty file: correct header, zero curves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            signature: BCC_SIGNATURE,
            record_byte_width: RECORD_BYTE_WIDTH,
            curve_type: CURVE_TYPE,
            dimensions: DIMENSIONS,
            up_axis: 1,
            declared_curves: None,
            declared_points: None,
            file_info: [0; FILE_INFO_SIZE],
            curves: Vec::new(),
            trailing: Vec::new(),
        }
    }

    /// Append an open curve (positive length prefix).
    pub fn add_open(&mut self, points: &[[f32; 3]]) -> &mut Self {
        let len = point_len(points);
        self.add_raw(len, points)
    }

    /// Append a loop (negative length prefix).
    pub fn add_loop(&mut self, points: &[[f32; 3]]) -> &mut Self {
        let len = point_len(points);
        self.add_raw(-len, points)
    }

    /// Append a record with an arbitrary length prefix. `points` are
    /// written as given, whether or not they agree with `raw_len`.
    pub fn add_raw(&mut self, raw_len: i32, points: &[[f32; 3]]) -> &mut Self {
        self.curves.push((raw_len, points.to_vec()));
        self
    }

    pub fn signature(&mut self, signature: [u8; 3]) -> &mut Self {
        self.signature = signature;
        self
    }

    pub fn record_byte_width(&mut self, width: u8) -> &mut Self {
        self.record_byte_width = width;
        self
    }

    pub fn curve_type(&mut self, curve_type: [u8; 2]) -> &mut Self {
        self.curve_type = curve_type;
        self
    }

    pub fn dimensions(&mut self, dimensions: u8) -> &mut Self {
        self.dimensions = dimensions;
        self
    }

    pub fn up_axis(&mut self, up_axis: u8) -> &mut Self {
        self.up_axis = up_axis;
        self
    }

    /// Override the header's curve count. Defaults to the number of
    /// records added.
    pub fn declared_curves(&mut self, count: u64) -> &mut Self {
        self.declared_curves = Some(count);
        self
    }

    /// Override the header's control-point total. Defaults to the sum of
    /// the points added.
    pub fn declared_points(&mut self, count: u64) -> &mut Self {
        self.declared_points = Some(count);
        self
    }

    /// Set the file-info blob; longer input is cut at 40 bytes.
    pub fn file_info(&mut self, info: &[u8]) -> &mut Self {
        let n = info.len().min(FILE_INFO_SIZE);
        self.file_info = [0; FILE_INFO_SIZE];
        self.file_info[..n].copy_from_slice(&info[..n]);
        self
    }

    /// Bytes appended after the last record.
    pub fn trailing(&mut self, bytes: &[u8]) -> &mut Self {
        self.trailing = bytes.to_vec();
        self
    }

    /// Serialize header, records and trailing bytes.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let curve_count = self.declared_curves.unwrap_or(self.curves.len() as u64);
        let point_count = self
            .declared_points
            .unwrap_or_else(|| self.curves.iter().map(|(_, p)| p.len() as u64).sum());

        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(&self.signature);
        out.push(self.record_byte_width);
        out.extend_from_slice(&self.curve_type);
        out.push(self.dimensions);
        out.push(self.up_axis);
        out.extend_from_slice(&curve_count.to_le_bytes());
        out.extend_from_slice(&point_count.to_le_bytes());
        out.extend_from_slice(&self.file_info);

        for (raw_len, points) in &self.curves {
            out.extend_from_slice(&raw_len.to_le_bytes());
            for point in points {
                for v in point {
                    out.extend_from_slice(&v.to_le_bytes());
                }
            }
        }

        out.extend_from_slice(&self.trailing);
        out
    }
}

fn point_len(points: &[[f32; 3]]) -> i32 {
    i32::try_from(points.len()).expect("fixture curve has more than i32::MAX points")
}

/// `n` deterministic, distinct points along a helix, for larger fixtures.
#[must_use]
pub fn helix(n: usize) -> Vec<[f32; 3]> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 * 0.25;
            [t.cos(), t.sin(), t * 0.1]
        })
        .collect()
}
