use crate::math::polygon_2d::{bounds_2d, perimeter_length, point_at_fraction, signed_area_2d};
use crate::math::Point2;

use super::PatternPoint;

/// An ordered point sequence forming an implicit closed polygon: the last
/// point connects back to the first, and the order defines the winding.
pub type Outline = Vec<PatternPoint>;

/// Perimeter queries over an outline.
pub trait OutlineExt {
    /// Returns the vertex positions in outline order.
    fn positions(&self) -> Vec<Point2>;

    /// Closed perimeter length; `0.0` with fewer than 2 points.
    fn perimeter_length(&self) -> f64;

    /// Point at arc-length fraction `t` of the closed perimeter.
    ///
    /// `t` is clamped to `[0, 1]` and both ends return the first point.
    fn point_at_fraction(&self, t: f64) -> Option<Point2>;

    /// Shoelace area, positive for counter-clockwise winding.
    fn signed_area(&self) -> f64;

    /// Axis-aligned `(min, max)` corners.
    fn bounds(&self) -> Option<(Point2, Point2)>;

    /// Whether the outline has enough points to enclose an area.
    fn is_polygon(&self) -> bool;
}

impl OutlineExt for [PatternPoint] {
    fn positions(&self) -> Vec<Point2> {
        self.iter().map(PatternPoint::position).collect()
    }

    fn perimeter_length(&self) -> f64 {
        perimeter_length(&self.positions())
    }

    fn point_at_fraction(&self, t: f64) -> Option<Point2> {
        point_at_fraction(&self.positions(), t)
    }

    fn signed_area(&self) -> f64 {
        signed_area_2d(&self.positions())
    }

    fn bounds(&self) -> Option<(Point2, Point2)> {
        bounds_2d(&self.positions())
    }

    fn is_polygon(&self) -> bool {
        self.len() >= 3
    }
}
