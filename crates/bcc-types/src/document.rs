use serde::{Deserialize, Serialize};

use crate::curve::{ControlPoint, Curve};

/// The output document: every decoded curve, in file order.
///
/// Serializes as a single-key object:
///
/// ```json
/// { "curves": [ { "startIndex": 0, "count": 3, "loop": true, "points": [...] } ] }
/// ```
///
/// The document owns its curves outright. Nothing is reordered, filtered
/// or merged on the way in.
///
/// Deserializing only accepts finite coordinates. NaN and infinities are
/// serialized as `null`, so a document holding them does not round-trip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
  pub curves: Vec<Curve>,
}

impl Document {
  /// Wrap a decoded curve sequence as-is.
  #[must_use]
  pub fn build(curves: Vec<Curve>) -> Self {
    Self { curves }
  }

  /// Total control points across all curves.
  #[must_use]
  pub fn total_points(&self) -> u64 {
    self.curves.iter().map(|c| u64::from(c.point_count)).sum()
  }

  /// Number of curves flagged as loops.
  #[must_use]
  pub fn loop_count(&self) -> usize {
    self.curves.iter().filter(|c| c.is_loop).count()
  }

  /// Flattened view of every control point, in global index order.
  ///
  /// The `n`th item is the point whose global index is `n`, so a curve's
  /// points are the range `start_index..end_index()` of this sequence.
  /// Derived on demand; the document never stores a flat copy.
  pub fn control_points(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
    self.curves.iter().flat_map(|c| c.points.iter())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn curve(start_index: u64, is_loop: bool, points: &[[f32; 3]]) -> Curve {
    Curve {
      start_index,
      point_count: u32::try_from(points.len()).unwrap(),
      is_loop,
      points: points.iter().copied().map(ControlPoint::from).collect(),
    }
  }

  fn two_curves() -> Document {
    Document::build(vec![
      curve(0, true, &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]),
      curve(3, false, &[[0.0, 0.0, 1.0], [0.0, 1.0, 1.0]]),
    ])
  }

  #[test]
  fn empty_document_serializes_with_curves_key() {
    let json = serde_json::to_string(&Document::default()).unwrap();
    assert_eq!(json, r#"{"curves":[]}"#);
  }

  #[test]
  fn null_coordinate_is_rejected_on_parse() {
    let err = serde_json::from_str::<Document>(
      r#"{"curves":[{"startIndex":0,"count":1,"loop":false,"points":[[null,1.0,null]]}]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid type: null"), "{err}");
  }

  #[test]
  fn totals() {
    let doc = two_curves();
    assert_eq!(doc.total_points(), 5);
    assert_eq!(doc.loop_count(), 1);
  }

  #[test]
  fn flattened_points_follow_global_index() {
    let doc = two_curves();
    let flat: Vec<[f32; 3]> = doc.control_points().map(|&p| p.into()).collect();
    assert_eq!(flat.len(), 5);
    assert_eq!(flat[3], [0.0, 0.0, 1.0]);

    let second = &doc.curves[1];
    let start = usize::try_from(second.start_index).unwrap();
    assert_eq!(ControlPoint::from(flat[start]), second.points[0]);
  }

  #[test]
  fn build_preserves_order() {
    let doc = two_curves();
    assert!(doc.curves[0].is_loop);
    assert!(!doc.curves[1].is_loop);
  }
}
