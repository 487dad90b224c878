#![warn(clippy::pedantic)]

pub mod curve_reader;
pub mod decoder;
pub mod error;

pub use curve_reader::CurveReader;
pub use decoder::{BccDecoder, DecodedFile};
pub use error::{DecodeError, TruncationSite};
