//! Epsilon estimation from the k-distance curve.
//!
//! For each point, its k-distance is the distance to its k-th nearest other
//! point. Sorted in descending order, these form a curve that drops steeply
//! across the outliers and then flattens over the dense regions. The value
//! just after the steepest single drop (the "elbow") separates the two and is
//! returned as `eps`.
//!
//! Typically `k = min_pts`.

use tracing::debug;

use super::node::Dataset;
use crate::distance::{checked_distance, Distance};
use crate::error::{Error, Result};

/// k-distance of every point, in input order.
///
/// Each point is compared with every other point by position, so an exact
/// duplicate of a point counts as a neighbor at distance zero.
///
/// Requires `1 <= k < points.len()`.
pub fn k_distances<P, D>(points: &[P], k: usize, metric: &D) -> Result<Vec<f64>>
where
    P: AsRef<[f64]>,
    D: Distance + ?Sized,
{
    let n = points.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k >= n {
        return Err(Error::KOutOfRange { k, n_points: n });
    }
    metric.check(points[0].as_ref().len())?;

    let mut out = Vec::with_capacity(n);
    let mut row: Vec<f64> = Vec::with_capacity(n - 1);
    for (i, p) in points.iter().enumerate() {
        row.clear();
        for (j, q) in points.iter().enumerate() {
            if i != j {
                row.push(checked_distance(metric, p.as_ref(), q.as_ref())?);
            }
        }
        // Only the k-th order statistic is needed.
        let (_, kth, _) = row.select_nth_unstable_by(k - 1, f64::total_cmp);
        out.push(*kth);
    }
    Ok(out)
}

/// Index of the largest drop `d[i - 1] - d[i]` in a descending curve.
///
/// Ties keep the first occurrence. Returns 0 when no drop is positive.
fn elbow(descending: &[f64]) -> usize {
    let mut best = 0.0;
    let mut idx = 0;
    for i in 1..descending.len() {
        let diff = descending[i - 1] - descending[i];
        if diff > best {
            best = diff;
            idx = i;
        }
    }
    idx
}

/// Estimate `eps` for `min_pts = k` from the elbow of the k-distance curve.
pub fn find_epsilon<P, D>(points: &[P], k: usize, metric: &D) -> Result<f64>
where
    P: AsRef<[f64]>,
    D: Distance + ?Sized,
{
    let mut distances = k_distances(points, k, metric)?;
    distances.sort_by(|a, b| b.total_cmp(a));
    let idx = elbow(&distances);
    debug!(k, elbow = idx, eps = distances[idx], "estimated epsilon");
    Ok(distances[idx])
}

impl<D: Distance> Dataset<D> {
    /// Estimate `eps` for this dataset under its own metric.
    ///
    /// The result is in the metric's units, so it can be passed straight to a
    /// fit of the same dataset.
    pub fn find_epsilon(&self, k: usize) -> Result<f64> {
        find_epsilon(self.nodes(), k, self.metric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Metric;

    fn line(xs: &[f64]) -> Vec<Vec<f64>> {
        xs.iter().map(|&x| vec![x, 0.0]).collect()
    }

    #[test]
    fn test_k_distances() {
        let pts = line(&[0.0, 1.0, 3.0, 10.0]);
        let d = k_distances(&pts, 1, &Metric::Euclidean).unwrap();
        assert_eq!(d, vec![1.0, 1.0, 2.0, 7.0]);

        let d = k_distances(&pts, 2, &Metric::Euclidean).unwrap();
        assert_eq!(d, vec![3.0, 2.0, 3.0, 9.0]);
    }

    #[test]
    fn test_duplicates_count_as_neighbors() {
        let pts = line(&[0.0, 0.0, 5.0]);
        let d = k_distances(&pts, 1, &Metric::Euclidean).unwrap();
        assert_eq!(d, vec![0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_k_validation() {
        let pts = line(&[0.0, 1.0, 2.0]);
        assert!(matches!(
            k_distances(&pts, 0, &Metric::Euclidean),
            Err(Error::InvalidParameter { name: "k", .. })
        ));
        assert_eq!(
            k_distances(&pts, 3, &Metric::Euclidean),
            Err(Error::KOutOfRange { k: 3, n_points: 3 })
        );
        let none: Vec<Vec<f64>> = vec![];
        assert_eq!(
            k_distances(&none, 1, &Metric::Euclidean),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_dimension_mismatch_fails_fast() {
        let pts = vec![vec![0.0, 0.0], vec![1.0], vec![2.0, 2.0]];
        assert!(matches!(
            k_distances(&pts, 1, &Metric::Euclidean),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_haversine_on_one_axis_is_rejected() {
        let data = Dataset::new(vec![vec![1.0], vec![2.0], vec![3.0]])
            .unwrap()
            .with_metric(Metric::Haversine { radius: 6371.0 });
        assert_eq!(data.find_epsilon(1), Err(Error::NotPlanar { dimension: 1 }));

        let pts = line(&[0.0, 1.0, 2.0]);
        assert!(matches!(
            k_distances(&pts, 1, &Metric::Haversine { radius: -1.0 }),
            Err(Error::InvalidParameter { name: "radius", .. })
        ));
    }

    #[test]
    fn test_elbow() {
        assert_eq!(elbow(&[10.0, 9.0, 2.0, 1.0]), 2);
        assert_eq!(elbow(&[3.0, 3.0, 3.0]), 0);
        assert_eq!(elbow(&[5.0]), 0);
        // First of two equal drops wins.
        assert_eq!(elbow(&[6.0, 4.0, 2.0]), 1);
    }

    #[test]
    fn test_find_epsilon_picks_dense_scale() {
        // Two tight pairs and one far outlier.
        let pts = line(&[0.0, 1.0, 50.0, 51.0, 200.0]);
        let eps = find_epsilon(&pts, 1, &Metric::Euclidean).unwrap();
        // k-distances: 1, 1, 1, 1, 149 -> descending 149, 1, 1, 1, 1.
        assert_eq!(eps, 1.0);
    }

    #[test]
    fn test_even_spacing_and_flat_curve() {
        let pts = line(&[0.0, 1.0, 2.0, 3.0]);
        // k = 3 distances: 3, 2, 2, 3 -> descending 3, 3, 2, 2; elbow at index 2.
        let eps = find_epsilon(&pts, 3, &Metric::Euclidean).unwrap();
        assert_eq!(eps, 2.0);

        let same = line(&[4.0, 4.0, 4.0]);
        assert_eq!(find_epsilon(&same, 1, &Metric::Euclidean).unwrap(), 0.0);
    }

    #[test]
    fn test_dataset_uses_its_metric() {
        let data = Dataset::new(line(&[0.0, 2.0, 4.0, 100.0])).unwrap();
        let linear = data.find_epsilon(1).unwrap();
        let squared = data
            .with_metric(Metric::SquaredEuclidean)
            .find_epsilon(1)
            .unwrap();
        assert_eq!(linear, 2.0);
        assert_eq!(squared, 4.0);
    }
}
