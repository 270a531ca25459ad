//! Geometric checks on element outlines and baselines.
//!
//! Outlines are closed polygons, baselines open polylines. An outline is
//! usable when it has enough distinct points, stays in the image quadrant,
//! does not self-intersect and is not degenerately small.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, Contains, Coord, EuclideanLength, Line, LineString, Polygon};

use crate::model::Point;

/// Smallest accepted outline perimeter and baseline length, in pixels.
const MIN_EXTENT: f64 = 4.0;

/// Convert points to an open polyline.
pub fn to_linestring(points: &[Point]) -> LineString<f64> {
    LineString::new(points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

/// Convert points to a polygon. The ring is closed automatically.
pub fn to_polygon(points: &[Point]) -> Polygon<f64> {
    Polygon::new(to_linestring(points), Vec::new())
}

fn non_negative(points: &[Point]) -> bool {
    // NaN fails both comparisons and so counts as out of range
    points.iter().all(|p| p.x >= 0.0 && p.y >= 0.0)
}

/// Drop consecutive duplicate points and an explicit closing point.
fn open_ring(points: &[Point]) -> Vec<Coord<f64>> {
    let mut ring: Vec<Coord<f64>> = Vec::with_capacity(points.len());
    for p in points {
        let coord = Coord { x: p.x, y: p.y };
        if ring.last() != Some(&coord) {
            ring.push(coord);
        }
    }
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    ring
}

/// Whether the ring is simple, i.e. free of self-intersections.
///
/// Adjacent segments may share their common endpoint; any other contact
/// between two segments, including collinear overlap, makes the ring
/// non-simple.
fn ring_is_simple(ring: &[Coord<f64>]) -> bool {
    let n = ring.len();
    let segment = |i: usize| Line::new(ring[i], ring[(i + 1) % n]);

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(segment(i), segment(j)) {
                None => {}
                Some(LineIntersection::Collinear { .. }) => return false,
                Some(LineIntersection::SinglePoint { is_proper, .. }) => {
                    if !adjacent || is_proper {
                        return false;
                    }
                }
            }
        }
    }
    true
}

/// Whether the points form a usable outline polygon.
pub fn validate_polygon(points: &[Point]) -> bool {
    if points.len() < 3 || !non_negative(points) {
        return false;
    }
    let ring = open_ring(points);
    if ring.len() < 3 || !ring_is_simple(&ring) {
        return false;
    }
    let polygon = to_polygon(points);
    polygon.unsigned_area() > 0.0 && polygon.exterior().euclidean_length() >= MIN_EXTENT
}

/// Whether the points form a usable baseline polyline.
pub fn validate_line(points: &[Point]) -> bool {
    points.len() >= 2
        && non_negative(points)
        && to_linestring(points).euclidean_length() >= MIN_EXTENT
}

/// Whether `inner` lies entirely inside `outer`. Boundary contact is
/// allowed, and a polygon contains itself.
pub fn polygon_within(inner: &Polygon<f64>, outer: &Polygon<f64>) -> bool {
    outer.contains(inner)
}

/// Whether the polyline lies entirely inside `outer`.
pub fn line_within(line: &LineString<f64>, outer: &Polygon<f64>) -> bool {
    outer.contains(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_rectangle_is_valid() {
        assert!(validate_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 50.0),
            (0.0, 50.0)
        ])));
    }

    #[test]
    fn test_explicitly_closed_ring_is_valid() {
        assert!(validate_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 50.0),
            (0.0, 50.0),
            (0.0, 0.0)
        ])));
    }

    #[test]
    fn test_too_few_points_is_invalid() {
        assert!(!validate_polygon(&points(&[(0.0, 0.0), (100.0, 50.0)])));
        // three raw points collapsing to two distinct ones
        assert!(!validate_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 50.0),
            (100.0, 50.0)
        ])));
    }

    #[test]
    fn test_self_intersection_is_invalid() {
        // bowtie
        assert!(!validate_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 100.0),
            (100.0, 0.0),
            (0.0, 100.0)
        ])));
    }

    #[test]
    fn test_negative_coordinates_are_invalid() {
        assert!(!validate_polygon(&points(&[
            (-1.0, 0.0),
            (100.0, 0.0),
            (100.0, 50.0),
            (0.0, 50.0)
        ])));
    }

    #[test]
    fn test_zero_area_is_invalid() {
        assert!(!validate_polygon(&points(&[
            (0.0, 0.0),
            (50.0, 0.0),
            (100.0, 0.0)
        ])));
    }

    #[test]
    fn test_perimeter_threshold() {
        // perimeter just above 3.4
        assert!(!validate_polygon(&points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (0.0, 1.0)
        ])));
        // unit square sits exactly on the threshold
        assert!(validate_polygon(&points(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0)
        ])));
    }

    #[test]
    fn test_baseline_validity() {
        assert!(validate_line(&points(&[(0.0, 10.0), (80.0, 10.0)])));
        assert!(!validate_line(&points(&[(0.0, 10.0)])));
        assert!(!validate_line(&points(&[(0.0, 10.0), (2.0, 10.0)])));
        assert!(!validate_line(&points(&[(-5.0, 10.0), (80.0, 10.0)])));
    }

    #[test]
    fn test_containment_is_reflexive() {
        let square = to_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0)
        ]));
        assert!(polygon_within(&square, &square));
    }

    #[test]
    fn test_boundary_contact_counts_as_inside() {
        let outer = to_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0)
        ]));
        // shares the left edge with the outer square
        let inner = to_polygon(&points(&[
            (0.0, 0.0),
            (50.0, 0.0),
            (50.0, 50.0),
            (0.0, 50.0)
        ]));
        assert!(polygon_within(&inner, &outer));

        let outside = to_polygon(&points(&[
            (90.0, 90.0),
            (150.0, 90.0),
            (150.0, 150.0),
            (90.0, 150.0)
        ]));
        assert!(!polygon_within(&outside, &outer));
    }

    #[test]
    fn test_line_containment() {
        let outer = to_polygon(&points(&[
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 100.0),
            (0.0, 100.0)
        ]));
        let inside = to_linestring(&points(&[(10.0, 50.0), (90.0, 50.0)]));
        let escaping = to_linestring(&points(&[(10.0, 50.0), (150.0, 50.0)]));
        assert!(line_within(&inside, &outer));
        assert!(!line_within(&escaping, &outer));
    }
}
