//! Multidimensional points.

use crate::error::{Error, Result};
use crate::geometry::Point2;

/// An ordered, fixed-length coordinate vector.
///
/// The dimension is fixed at construction. Equality compares dimension and
/// coordinates element-wise.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Create a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates in axis order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Project onto the first two axes.
    ///
    /// Hull and intersection routines are planar; this is the only way an
    /// n-dimensional point enters them. Coordinates past the second are dropped.
    pub fn xy(&self) -> Result<Point2> {
        match self.coords.as_slice() {
            [x, y, ..] => Ok(Point2::new(*x, *y)),
            _ => Err(Error::NotPlanar {
                dimension: self.dimension(),
            }),
        }
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}
