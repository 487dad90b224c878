#![warn(clippy::pedantic)]

pub mod curve_frame;
pub mod error;
pub mod header;

pub use curve_frame::{CONTROL_POINT_SIZE, CurveLength, LENGTH_PREFIX_SIZE, read_control_point};
pub use error::WireError;
pub use header::{BccHeader, FileInfo, HEADER_SIZE, HeaderField, UpAxis};
