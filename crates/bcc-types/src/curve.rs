use serde::{Deserialize, Serialize};

/// A single 3-D control point.
///
/// Serialized as a bare `[x, y, z]` array, the shape visualization
/// tooling expects. Coordinates are carried exactly as read from the
/// file; nothing in the pipeline does arithmetic on them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct ControlPoint {
  pub x: f32,
  pub y: f32,
  pub z: f32,
}

impl ControlPoint {
  #[must_use]
  pub fn new(x: f32, y: f32, z: f32) -> Self {
    Self { x, y, z }
  }

  /// Bitwise equality, so `-0.0 != 0.0` and `NaN == NaN` when the
  /// payloads match. This is the comparison a lossless decoder owes its
  /// input.
  #[must_use]
  pub fn bits_eq(&self, other: &Self) -> bool {
    self.x.to_bits() == other.x.to_bits()
      && self.y.to_bits() == other.y.to_bits()
      && self.z.to_bits() == other.z.to_bits()
  }
}

impl From<[f32; 3]> for ControlPoint {
  fn from([x, y, z]: [f32; 3]) -> Self {
    Self { x, y, z }
  }
}

impl From<ControlPoint> for [f32; 3] {
  fn from(p: ControlPoint) -> Self {
    [p.x, p.y, p.z]
  }
}

/// One decoded curve record.
///
/// ```text
/// ┌─────────────┬──────────────┬─────────────────────────────────────┐
/// │ Field       │ JSON key     │ Source                              │
/// ├─────────────┼──────────────┼─────────────────────────────────────┤
/// │ start_index │ "startIndex" │ points in all preceding curves      │
/// │ point_count │ "count"      │ |raw length|                        │
/// │ is_loop     │ "loop"       │ raw length < 0                      │
/// │ points      │ "points"     │ point_count × [x, y, z]             │
/// └─────────────┴──────────────┴─────────────────────────────────────┘
/// ```
///
/// Field order above is the serialized order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
  /// Offset of this curve's first point in the concatenation of all
  /// curves' points.
  #[serde(rename = "startIndex")]
  pub start_index: u64,

  /// Number of control points. Always equal to `points.len()` for
  /// decoded curves.
  #[serde(rename = "count")]
  pub point_count: u32,

  /// The last point connects back to the first.
  #[serde(rename = "loop")]
  pub is_loop: bool,

  pub points: Vec<ControlPoint>,
}

impl Curve {
  /// Index one past this curve's last point, i.e. the next curve's
  /// `start_index`.
  #[must_use]
  pub fn end_index(&self) -> u64 {
    self.start_index + u64::from(self.point_count)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn triangle() -> Curve {
    Curve {
      start_index: 0,
      point_count: 3,
      is_loop: true,
      points: vec![
        ControlPoint::new(0.0, 0.0, 0.0),
        ControlPoint::new(1.0, 0.0, 0.0),
        ControlPoint::new(1.0, 1.0, 0.0),
      ],
    }
  }

  #[test]
  fn point_serializes_as_array() {
    let json = serde_json::to_string(&ControlPoint::new(1.0, -2.5, 3.0)).unwrap();
    assert_eq!(json, "[1.0,-2.5,3.0]");
  }

  #[test]
  fn curve_field_names_and_order() {
    let json = serde_json::to_string(&triangle()).unwrap();
    assert_eq!(
      json,
      r#"{"startIndex":0,"count":3,"loop":true,"points":[[0.0,0.0,0.0],[1.0,0.0,0.0],[1.0,1.0,0.0]]}"#
    );
  }

  #[test]
  fn curve_parses_back() {
    let json = serde_json::to_string(&triangle()).unwrap();
    let parsed: Curve = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, triangle());
  }

  #[test]
  fn end_index_is_next_start() {
    let mut c = triangle();
    c.start_index = 10;
    assert_eq!(c.end_index(), 13);
  }

  #[test]
  fn bits_eq_distinguishes_signed_zero() {
    let a = ControlPoint::new(0.0, 0.0, 0.0);
    let b = ControlPoint::new(-0.0, 0.0, 0.0);
    assert_eq!(a, b);
    assert!(!a.bits_eq(&b));
  }
}
