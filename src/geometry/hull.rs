use super::primitives::{cross, segments_intersect, Point2};
use crate::error::{Error, Result};

/// Closed convex boundary, counter-clockwise, first vertex repeated last.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    ring: Vec<Point2>,
}

impl Hull {
    /// Build the convex hull of `points`. See [`convex_hull`].
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        convex_hull(points)
    }

    /// Boundary vertices including the closing repeat of the first vertex.
    pub fn vertices(&self) -> &[Point2] {
        &self.ring
    }

    /// Boundary vertices without the closing repeat.
    pub fn open_vertices(&self) -> &[Point2] {
        &self.ring[..self.ring.len() - 1]
    }

    /// Number of distinct boundary vertices (always at least 3).
    pub fn len(&self) -> usize {
        self.ring.len() - 1
    }

    /// Always `false`; a hull has at least three vertices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Boundary edges in ring order.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.ring.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether `p` lies inside or on the boundary.
    pub fn contains(&self, p: Point2) -> bool {
        self.edges().all(|(a, b)| cross(a, b, p) >= 0.0)
    }

    /// Whether any segment of `polyline` crosses any boundary edge.
    ///
    /// A polyline lying entirely inside the hull does not cross it.
    pub fn intersects_polyline(&self, polyline: &[Point2]) -> bool {
        polyline_intersects_ring(polyline, &self.ring)
    }
}

/// Polyline against an arbitrary vertex ring; edge `j` joins vertex `j` and
/// vertex `(j + 1) % len`.
pub(crate) fn polyline_intersects_ring(polyline: &[Point2], ring: &[Point2]) -> bool {
    let m = ring.len();
    polyline.windows(2).any(|seg| {
        (0..m).any(|j| segments_intersect(seg[0], seg[1], ring[j], ring[(j + 1) % m]))
    })
}

/// Andrew's monotone chain convex hull.
///
/// Fails with [`Error::ShapeTooSmall`] for fewer than three points and with
/// [`Error::Collinear`] when every point lies on one line (this includes all
/// points coinciding).
pub fn convex_hull(points: &[Point2]) -> Result<Hull> {
    if points.len() < 3 {
        return Err(Error::ShapeTooSmall {
            found: points.len(),
        });
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(Error::InvalidParameter {
            name: "points",
            message: "coordinates must be finite",
        });
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(Point2::lex_cmp);

    if are_collinear(&sorted) {
        return Err(Error::Collinear);
    }

    let lower = half_hull(sorted.iter().copied());
    let upper = half_hull(sorted.iter().rev().copied());

    // Each chain ends where the other begins.
    let mut ring = Vec::with_capacity(lower.len() + upper.len() - 1);
    ring.extend_from_slice(&lower[..lower.len() - 1]);
    ring.extend_from_slice(&upper[..upper.len() - 1]);
    ring.push(ring[0]);

    Ok(Hull { ring })
}

fn half_hull(points: impl Iterator<Item = Point2>) -> Vec<Point2> {
    let mut chain: Vec<Point2> = Vec::new();
    for p in points {
        while chain.len() >= 2
            && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0.0
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}

/// `sorted` must be in lexicographic order, so duplicates of the first point
/// come first.
fn are_collinear(sorted: &[Point2]) -> bool {
    let p0 = sorted[0];
    let Some(p1) = sorted.iter().copied().find(|p| *p != p0) else {
        return true;
    };
    sorted.iter().all(|&p| cross(p0, p1, p) == 0.0)
}
