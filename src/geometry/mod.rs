//! Planar geometry: orientation tests, segment intersection, convex hulls.
//!
//! Everything here works on [`Point2`]. Multidimensional points enter through
//! [`Point::xy`](crate::Point::xy), which makes the projection explicit.
//!
//! ## Hull construction
//!
//! [`convex_hull`] is Andrew's monotone chain: sort, then build a lower and an
//! upper chain, popping any point that does not make a strict left turn.
//! Collinear boundary points are therefore dropped, and the result is in
//! counter-clockwise order starting at the lowest-x (then lowest-y) point.
//!
//! ```rust
//! use outline::geometry::{convex_hull, Point2};
//!
//! let pts = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//!     Point2::new(2.0, 2.0),
//! ];
//! let hull = convex_hull(&pts).unwrap();
//! assert_eq!(hull.open_vertices().len(), 4);
//! assert!(!hull.open_vertices().contains(&Point2::new(2.0, 2.0)));
//! ```

mod hull;
mod primitives;

pub(crate) use hull::polyline_intersects_ring;
pub use hull::{convex_hull, Hull};
pub use primitives::{cross, orientation, segments_intersect, Orientation, Point2};
