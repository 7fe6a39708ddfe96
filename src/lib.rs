//! Density clusters and their outlines.
//!
//! `outline` groups multidimensional points with DBSCAN, reduces each group to
//! its convex boundary, and tests paths for crossings against those
//! boundaries.
//!
//! - [`cluster`]: [`Dataset`], [`Dbscan`], and epsilon estimation from the k-distance curve
//! - [`geometry`]: planar orientation tests, segment intersection, monotone-chain hulls
//! - [`boundary`]: cluster outlines and polyline crossing tests
//! - [`distance`], [`stats`]: the metrics and summary statistics the above consume
//!
//! ```rust
//! use outline::{boundary, Dataset, Point2};
//!
//! let mut data = Dataset::new(vec![
//!     [0.0, 0.0],
//!     [2.0, 0.0],
//!     [2.0, 2.0],
//!     [0.0, 2.0],
//!     [1.0, 1.0],
//! ])
//! .unwrap();
//!
//! let outlines = data.fit(3.0, 3, true).unwrap().into_outlines().unwrap();
//! assert_eq!(outlines.len(), 1);
//!
//! let path = [Point2::new(-1.0, 1.0), Point2::new(3.0, 1.0)];
//! assert!(boundary::polyline_intersects_hull(&path, outlines[0].hull.vertices()));
//! ```

#![forbid(unsafe_code)]

pub mod boundary;
pub mod cluster;
pub mod distance;
pub mod error;
pub mod geometry;
pub mod point;
pub mod stats;

pub use boundary::{outline_clusters, polyline_intersects_hull};
pub use cluster::{
    find_epsilon, k_distances, Cluster, ClusterNode, Clustering, Dataset, Dbscan, Fit, Label,
    Outline,
};
pub use distance::{Distance, Metric};
pub use error::{Error, Result};
pub use geometry::{convex_hull, segments_intersect, Hull, Point2};
pub use point::Point;
