use super::intersect_2d::lerp;
use super::{Point2, Vector2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sum of the edge lengths of a closed polygon, including the closing edge
/// from the last point back to the first.
///
/// Returns `0.0` for fewer than 2 points.
#[must_use]
pub fn perimeter_length(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (points[(i + 1) % n] - points[i]).norm())
        .sum()
}

/// Walks the closed perimeter to the arc-length fraction `t`.
///
/// `t` is clamped to `[0, 1]`. Both `t = 0` and `t = 1` return the first point
/// exactly. Returns `None` for an empty polygon.
#[must_use]
pub fn point_at_fraction(points: &[Point2], t: f64) -> Option<Point2> {
    let first = *points.first()?;
    let n = points.len();
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if n < 2 || t <= 0.0 || t >= 1.0 {
        return Some(first);
    }

    let total = perimeter_length(points);
    if total < TOLERANCE {
        return Some(first);
    }

    let target = t * total;
    let mut walked = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let len = (b - a).norm();
        if len < TOLERANCE {
            continue;
        }
        if walked + len >= target {
            return Some(lerp(&a, &b, (target - walked) / len));
        }
        walked += len;
    }

    // Rounding left the target just past the accumulated length.
    Some(first)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// Returns `None` if the segment has zero length.
#[must_use]
pub fn segment_direction(a: &Point2, b: &Point2) -> Option<Vector2> {
    (b - a).try_normalize(TOLERANCE)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the outward normal of an edge direction for a polygon with the
/// given winding.
///
/// Counter-clockwise polygons (`area > 0`) have their interior on the left of
/// each edge, so the outward side is the right. Degenerate polygons with zero
/// area are treated as counter-clockwise.
#[must_use]
pub fn outward_normal(dir: Vector2, signed_area: f64) -> Vector2 {
    if signed_area < 0.0 {
        left_normal(dir)
    } else {
        -left_normal(dir)
    }
}

/// Axis-aligned bounds of a point set as `(min, max)`, or `None` when empty.
#[must_use]
pub fn bounds_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let (first, rest) = points.split_first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in rest {
        lo = Point2::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = Point2::new(hi.x.max(p.x), hi.y.max(p.y));
    }
    Some((lo, hi))
}
