#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;

pub use bcc_types::Document;
pub use config::{OutputMode, RenderConfig};
pub use driver::{BccDriver, DefaultDriver};
pub use error::RenderError;
