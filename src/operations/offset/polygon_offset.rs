use crate::geometry::{Outline, OutlineExt, PatternPoint};
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{outward_normal, segment_direction, signed_area_2d};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Maximum miter distance as a multiple of `|distance|`. Corners whose miter
/// reaches further fall back to moving the vertex along the averaged normal.
const MITER_LIMIT: f64 = 4.0;

/// Direction and outward normal of a non-degenerate edge.
#[derive(Clone, Copy)]
struct EdgeFrame {
    dir: Vector2,
    normal: Vector2,
}

/// Offsets a closed outline by `distance` with miter joins.
///
/// Every edge is pushed along its outward normal (positive `distance`
/// expands, negative shrinks) and each vertex becomes the intersection of its
/// two neighbouring offset edges, so the result has the same point count and
/// point kinds as the input. Outward is derived from the winding, so both
/// clockwise and counter-clockwise outlines grow for positive distances.
///
/// Corners whose offset edges are parallel or meet beyond [`MITER_LIMIT`]
/// are moved by `distance` along the averaged edge normal instead. Sharp
/// concave corners under large offsets may therefore self-intersect; the
/// result is not checked for simplicity.
///
/// Outlines with fewer than 3 points, and a zero distance, yield a copy.
#[must_use]
pub fn offset_polygon(outline: &[PatternPoint], distance: f64) -> Outline {
    let n = outline.len();
    if !outline.is_polygon() || distance.abs() < TOLERANCE {
        return outline.to_vec();
    }

    let points = outline.positions();
    let area = signed_area_2d(&points);
    let frames: Vec<Option<EdgeFrame>> = (0..n)
        .map(|i| {
            segment_direction(&points[i], &points[(i + 1) % n]).map(|dir| EdgeFrame {
                dir,
                normal: outward_normal(dir, area),
            })
        })
        .collect();

    if frames.iter().all(Option::is_none) {
        return outline.to_vec();
    }

    outline
        .iter()
        .enumerate()
        .map(|(i, vertex)| {
            // Zero-length edges are skipped: the nearest real edge on each side
            // passes through this vertex anyway.
            let prev = (1..=n).find_map(|k| frames[(i + n - k) % n]);
            let next = (0..n).find_map(|k| frames[(i + k) % n]);
            match (prev, next) {
                (Some(prev), Some(next)) => {
                    vertex.with_position(offset_corner(points[i], prev, next, distance))
                }
                _ => *vertex,
            }
        })
        .collect()
}

/// Computes the offset position of one corner.
fn offset_corner(corner: Point2, prev: EdgeFrame, next: EdgeFrame, distance: f64) -> Point2 {
    let p_prev = corner + prev.normal * distance;
    let p_next = corner + next.normal * distance;

    if let Some((t, _)) = line_line_intersect_2d(&p_prev, &prev.dir, &p_next, &next.dir) {
        let miter = p_prev + prev.dir * t;
        let limit = MITER_LIMIT * distance.abs();
        if (miter - corner).norm_squared() <= limit * limit {
            return miter;
        }
    }

    let averaged = (prev.normal + next.normal)
        .try_normalize(TOLERANCE)
        .unwrap_or(next.normal);
    tracing::trace!(
        x = corner.x,
        y = corner.y,
        "miter rejected, offsetting along averaged normal"
    );
    corner + averaged * distance
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PointKind;
    use approx::assert_abs_diff_eq;

    fn square(size: f64) -> Outline {
        vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(size, 0.0),
            PatternPoint::curve(size, size),
            PatternPoint::corner(0.0, size),
        ]
    }

    fn hexagon(radius: f64) -> Outline {
        (0..6)
            .map(|k| {
                let a = f64::from(k) * std::f64::consts::PI / 3.0;
                PatternPoint::corner(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    fn assert_same_geometry(a: &[PatternPoint], b: &[PatternPoint]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!(p.coincides_with(q, 1e-9), "{p:?} != {q:?}");
        }
    }

    #[test]
    fn zero_distance_is_a_copy() {
        for outline in [square(10.0), hexagon(5.0)] {
            assert_same_geometry(&offset_polygon(&outline, 0.0), &outline);
        }
    }

    #[test]
    fn square_expands_with_mitered_corners() {
        let result = offset_polygon(&square(10.0), 1.0);
        let expected = [(-1.0, -1.0), (11.0, -1.0), (11.0, 11.0), (-1.0, 11.0)];
        for (p, (x, y)) in result.iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn clockwise_outline_also_expands() {
        let mut outline = square(10.0);
        outline.reverse();
        let result = offset_polygon(&outline, 2.0);
        assert_abs_diff_eq!(result.perimeter_length(), 56.0, epsilon = 1e-9);
        assert!(result.signed_area() < 0.0);
    }

    #[test]
    fn negative_distance_shrinks() {
        let result = offset_polygon(&square(10.0), -1.0);
        assert_abs_diff_eq!(result.perimeter_length(), 32.0, epsilon = 1e-9);
    }

    #[test]
    fn preserves_point_count_and_kinds() {
        let outline = square(4.0);
        let result = offset_polygon(&outline, 0.5);
        assert_eq!(result.len(), outline.len());
        assert_eq!(result[2].kind, PointKind::Curve);
    }

    #[test]
    fn convex_perimeter_grows_for_any_positive_distance() {
        for outline in [square(10.0), hexagon(7.0)] {
            let base = outline.perimeter_length();
            for d in [0.01, 0.5, 1.0, 3.0, 25.0] {
                assert!(offset_polygon(&outline, d).perimeter_length() > base);
            }
        }
    }

    #[test]
    fn concave_corner_is_mitered_inside_limit() {
        let l_shape = vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(4.0, 0.0),
            PatternPoint::corner(4.0, 1.0),
            PatternPoint::corner(1.0, 1.0),
            PatternPoint::corner(1.0, 4.0),
            PatternPoint::corner(0.0, 4.0),
        ];
        let result = offset_polygon(&l_shape, 0.5);
        assert_abs_diff_eq!(result[3].x, 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(result[3].y, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn narrow_wedge_tip_falls_back_to_averaged_normal() {
        let wedged = vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(9.0, 0.0),
            PatternPoint::corner(10.0, 8.0),
            PatternPoint::corner(11.0, 0.0),
            PatternPoint::corner(20.0, 0.0),
            PatternPoint::corner(20.0, 20.0),
            PatternPoint::corner(0.0, 20.0),
        ];
        let result = offset_polygon(&wedged, 1.5);

        // The reflex tip's miter is far past the limit, so the tip moves
        // straight down the wedge axis by exactly the distance.
        let moved = result[2].position() - wedged[2].position();
        assert_abs_diff_eq!(moved.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moved.y, -1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(moved.norm(), 1.5, epsilon = 1e-9);

        // The leg vertices swap sides: the result self-intersects and is
        // returned as is.
        assert!(result[1].x > result[3].x);
        assert_abs_diff_eq!(result[1].y, -1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(result[3].y, -1.5, epsilon = 1e-9);
    }

    #[test]
    fn sharp_spike_falls_back_to_averaged_normal() {
        let sliver = vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(10.0, 0.0),
            PatternPoint::corner(0.0, 0.5),
        ];
        let result = offset_polygon(&sliver, 1.0);
        let moved = (result[1].position() - sliver[1].position()).norm();
        assert_abs_diff_eq!(moved, 1.0, epsilon = 1e-9);
        assert!(result[1].x > 10.0);
    }

    #[test]
    fn coincident_points_reuse_neighbouring_edges() {
        let outline = vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(10.0, 0.0),
            PatternPoint::corner(10.0, 0.0),
            PatternPoint::corner(10.0, 10.0),
            PatternPoint::corner(0.0, 10.0),
        ];
        let result = offset_polygon(&outline, 1.0);
        assert_eq!(result.len(), 5);
        let corner = PatternPoint::corner(11.0, -1.0);
        assert!(result[1].coincides_with(&corner, 1e-9));
        assert!(result[2].coincides_with(&corner, 1e-9));
    }

    #[test]
    fn too_few_points_are_copied() {
        let segment = vec![
            PatternPoint::corner(0.0, 0.0),
            PatternPoint::corner(1.0, 0.0),
        ];
        assert_same_geometry(&offset_polygon(&segment, 2.0), &segment);
    }
}
