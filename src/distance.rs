//! Distance functions consumed by the clustering engine.
//!
//! Every function here is symmetric and returns `0.0` for identical inputs.
//! Whichever metric a [`Dataset`](crate::Dataset) is built with decides the
//! unit `eps` is measured in: with [`Metric::SquaredEuclidean`], `eps` is a
//! squared radius.

use crate::error::{Error, Result};

/// Mean Earth radius in kilometres, for [`Metric::Haversine`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A distance function between two equal-length coordinate slices.
///
/// Implementations may assume `a.len() == b.len()`; callers that cannot
/// guarantee it go through [`checked_distance`].
pub trait Distance {
    /// Distance between `a` and `b`.
    fn distance(&self, a: &[f64], b: &[f64]) -> f64;

    /// Check that this metric is usable on points of the given dimension.
    ///
    /// Called once per fit or estimation, before any distance is taken.
    fn check(&self, _dimension: usize) -> Result<()> {
        Ok(())
    }
}

impl<F> Distance for F
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        self(a, b)
    }
}

/// Built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    /// L2 norm of the difference.
    #[default]
    Euclidean,
    /// Squared L2 norm; cheaper, but `eps` must be squared to match.
    SquaredEuclidean,
    /// L1 norm.
    Manhattan,
    /// L-infinity norm.
    Chebyshev,
    /// Great-circle distance. Reads coordinate 0 as latitude and 1 as
    /// longitude, both in degrees.
    Haversine {
        /// Sphere radius; the result is in the same unit.
        radius: f64,
    },
}

impl Distance for Metric {
    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Metric::Euclidean => euclidean(a, b),
            Metric::SquaredEuclidean => squared_euclidean(a, b),
            Metric::Manhattan => manhattan(a, b),
            Metric::Chebyshev => chebyshev(a, b),
            Metric::Haversine { radius } => haversine(a, b, radius),
        }
    }

    fn check(&self, dimension: usize) -> Result<()> {
        if let Metric::Haversine { radius } = *self {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(Error::InvalidParameter {
                    name: "radius",
                    message: "must be positive and finite",
                });
            }
            if dimension < 2 {
                return Err(Error::NotPlanar { dimension });
            }
        }
        Ok(())
    }
}

/// Like [`Distance::distance`], but rejects slices of different length and
/// dimensions the metric cannot measure.
pub fn checked_distance<D: Distance + ?Sized>(metric: &D, a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    metric.check(a.len())?;
    Ok(metric.distance(a, b))
}

/// Sum of squared coordinate differences.
#[inline]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Straight-line distance.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Sum of absolute coordinate differences.
#[inline]
pub fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Largest absolute coordinate difference.
#[inline]
pub fn chebyshev(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Haversine distance on a sphere of the given radius.
///
/// Only the first two coordinates (latitude, longitude in degrees) are read.
pub fn haversine(a: &[f64], b: &[f64], radius: f64) -> f64 {
    debug_assert!(a.len() >= 2 && b.len() >= 2);
    let (lat1, lon1) = (a[0].to_radians(), a[1].to_radians());
    let (lat2, lon2) = (b[0].to_radians(), b[1].to_radians());
    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Clamp guards asin/atan2 against h drifting just above 1.
    let h = h.clamp(0.0, 1.0);
    2.0 * radius * h.sqrt().atan2((1.0 - h).sqrt())
}
