#![warn(clippy::pedantic)]

pub mod curve;
pub mod document;

pub use curve::{ControlPoint, Curve};
pub use document::Document;
