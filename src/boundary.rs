//! Cluster outlines and path crossing tests.
//!
//! Ties the pieces together: clusters are reduced to convex [`Hull`]s, and a
//! path (a polyline) is tested against those hulls edge by edge.

use tracing::warn;

use crate::cluster::{Cluster, Label, Outline};
use crate::error::Result;
use crate::geometry::{polyline_intersects_ring, Hull, Point2};
use crate::point::Point;

/// Outline every cluster that has a hull.
///
/// Groups with fewer than three members, or with all members on one line,
/// are logged and skipped. Order follows `clusters`.
pub fn outline_clusters(clusters: &[Cluster]) -> Vec<Outline> {
    let mut outlines = Vec::with_capacity(clusters.len());
    for cluster in clusters {
        match cluster.hull() {
            Ok(hull) => outlines.push(Outline {
                label: cluster.label(),
                hull,
            }),
            Err(err) => {
                warn!(label = ?cluster.label(), size = cluster.len(), %err, "skipping cluster outline");
            }
        }
    }
    outlines
}

/// Whether any segment of `polyline` crosses any edge of `hull`.
///
/// `hull` is a vertex ring, open or closed; edge `j` joins vertex `j` and
/// vertex `(j + 1) % hull.len()`. Crossing follows
/// [`segments_intersect`](crate::geometry::segments_intersect), so segments
/// that only run along a hull edge do not count.
pub fn polyline_intersects_hull(polyline: &[Point2], hull: &[Point2]) -> bool {
    polyline_intersects_ring(polyline, hull)
}

/// Labels of the outlines that `polyline` crosses, in outline order.
pub fn crossed_outlines(polyline: &[Point2], outlines: &[Outline]) -> Vec<Label> {
    outlines
        .iter()
        .filter(|o| o.hull.intersects_polyline(polyline))
        .map(|o| o.label)
        .collect()
}

/// Project a path of multidimensional points onto the first two axes.
pub fn planar_path(points: &[Point]) -> Result<Vec<Point2>> {
    points.iter().map(Point::xy).collect()
}

/// Convex hull of a set of multidimensional points, via their planar projection.
pub fn hull_of(points: &[Point]) -> Result<Hull> {
    Hull::from_points(&planar_path(points)?)
}
