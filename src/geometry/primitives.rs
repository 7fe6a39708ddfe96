use std::cmp::Ordering;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Lexicographic order on `(x, y)`, total over floats.
    pub(crate) fn lex_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl From<[f64; 2]> for Point2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Twice the signed area of triangle `o`, `a`, `b`.
///
/// Positive when `o -> a -> b` turns left (counter-clockwise), negative when
/// it turns right, zero when the three points are collinear.
#[inline]
pub fn cross(o: Point2, a: Point2, b: Point2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

#[inline]
pub fn orientation(o: Point2, a: Point2, b: Point2) -> Orientation {
    let c = cross(o, a, b);
    if c > 0.0 {
        Orientation::CounterClockwise
    } else if c < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Whether segment `p1 q1` properly crosses segment `p2 q2`.
///
/// The orientations of each segment's endpoints relative to the other segment
/// must differ. "On the line" counts as a third side, so an endpoint touching
/// the other segment registers as a crossing, but two segments on one common
/// line never do, even when they overlap.
pub fn segments_intersect(p1: Point2, q1: Point2, p2: Point2, q2: Point2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);
    o1 != o2 && o3 != o4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn test_cross_sign() {
        let o = p(0.0, 0.0);
        assert_eq!(cross(o, p(1.0, 0.0), p(0.0, 1.0)), 1.0);
        assert_eq!(cross(o, p(0.0, 1.0), p(1.0, 0.0)), -1.0);
        assert_eq!(cross(o, p(1.0, 1.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_orientation() {
        let o = p(0.0, 0.0);
        assert_eq!(
            orientation(o, p(1.0, 0.0), p(1.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(
            orientation(o, p(1.0, 1.0), p(1.0, 0.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(o, p(1.0, 1.0), p(3.0, 3.0)),
            Orientation::Collinear
        );
    }

    #[test]
    fn test_crossing_segments() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 2.0),
            p(0.0, 2.0),
            p(2.0, 0.0)
        ));
    }

    #[test]
    fn test_disjoint_segments() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(0.0, 1.0),
            p(1.0, 1.0)
        ));
        // Supporting lines cross, segments do not.
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(3.0, 0.0),
            p(2.0, 1.0)
        ));
    }

    #[test]
    fn test_touching_endpoint_counts() {
        assert!(segments_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0)
        ));
    }

    #[test]
    fn test_collinear_overlap_is_not_an_intersection() {
        assert!(!segments_intersect(
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(1.0, 0.0),
            p(3.0, 0.0)
        ));
    }
}
