use std::io::Write;

use bcc_types::Document;
use log::{debug, warn};

use crate::config::{OutputMode, RenderConfig};
use crate::error::RenderError;

/// Core driver interface: renders a decoded document as text.
///
/// Implementations are stateless; everything they need comes through
/// [`RenderConfig`].
///
/// ```text
/// Document ──▶ BccDriver::render() ──▶ JSON text
///                     │
///               RenderConfig (mode)
/// ```
pub trait BccDriver {
    /// Render the document into an owned string.
    ///
    /// # Errors
    ///
    /// [`RenderError::Serialize`] if serialization fails.
    fn render(&self, document: &Document, config: &RenderConfig) -> Result<String, RenderError>;

    /// Render the document straight into `sink`, without building the
    /// whole text in memory first.
    ///
    /// # Errors
    ///
    /// [`RenderError::Serialize`] if serialization or a write fails.
    fn render_to(
        &self,
        document: &Document,
        config: &RenderConfig,
        sink: &mut dyn Write,
    ) -> Result<(), RenderError>;
}

/// Default JSON driver.
///
/// Output shape, keys in this order:
///
/// ```json
/// {
///   "curves": [
///     {
///       "startIndex": 0,
///       "count": 3,
///       "loop": true,
///       "points": [[0.0, 0.0, 0.0], ...]
///     }
///   ]
/// }
/// ```
///
/// Coordinates are written in the shortest form that parses back to the
/// same `f32`. Non-finite coordinates have no JSON form and are written
/// as `null`; a warning is logged when that happens.
pub struct DefaultDriver;

impl BccDriver for DefaultDriver {
    fn render(&self, document: &Document, config: &RenderConfig) -> Result<String, RenderError> {
        check_finite(document);
        let text = match config.mode {
            OutputMode::Pretty => serde_json::to_string_pretty(document)?,
            OutputMode::Compact => serde_json::to_string(document)?,
        };
        debug!(
            "rendered {} curves as {} bytes ({:?})",
            document.curves.len(),
            text.len(),
            config.mode
        );
        Ok(text)
    }

    fn render_to(
        &self,
        document: &Document,
        config: &RenderConfig,
        sink: &mut dyn Write,
    ) -> Result<(), RenderError> {
        check_finite(document);
        match config.mode {
            OutputMode::Pretty => serde_json::to_writer_pretty(sink, document)?,
            OutputMode::Compact => serde_json::to_writer(sink, document)?,
        }
        Ok(())
    }
}

fn check_finite(document: &Document) {
    let non_finite = document
        .control_points()
        .filter(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        .count();
    if non_finite > 0 {
        warn!("{non_finite} control points have non-finite coordinates, rendered as null");
    }
}
