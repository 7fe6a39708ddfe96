use outline::distance::{Distance, Metric, EARTH_RADIUS_KM};
use outline::{convex_hull, polyline_intersects_hull, Clustering, Dataset, Dbscan, Label, Point2};
use proptest::prelude::*;

fn planar(raw: &[(i32, i32)]) -> Vec<Point2> {
    raw.iter()
        .map(|&(x, y)| Point2::new(x as f64, y as f64))
        .collect()
}

proptest! {
    #[test]
    fn prop_dbscan_all_assigned(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 1..30),
        eps in 0.1f64..5.0,
        min_pts in 1usize..6
    ) {
        let labels = Dbscan::new(eps, min_pts).fit_predict(&data).unwrap();

        prop_assert_eq!(labels.len(), data.len());
        let n_clusters = labels.iter().filter_map(|l| l.cluster_id()).max().map_or(0, |m| m + 1);
        for &l in &labels {
            prop_assert_ne!(l, Label::Unassigned);
        }
        // Cluster ids are contiguous from zero.
        for id in 0..n_clusters {
            prop_assert!(labels.contains(&Label::Cluster(id)));
        }
    }

    #[test]
    fn prop_refit_and_dedup_agree(
        data in prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 3), 1..25),
        eps in 0.5f64..3.0,
        min_pts in 1usize..5
    ) {
        let mut dataset = Dataset::new(data.clone()).unwrap();
        let dbscan = Dbscan::new(eps, min_pts);
        let first = dbscan.fit(&mut dataset).unwrap();
        dataset.reset();
        let second = dbscan.fit(&mut dataset).unwrap();
        prop_assert_eq!(&first, &second);

        let dedup = dbscan.clone().with_dedup_worklist(true).fit_predict(&data).unwrap();
        prop_assert_eq!(dataset.labels(), dedup);
    }

    #[test]
    fn prop_metric_identity_and_symmetry(
        a in prop::collection::vec(-90.0f64..90.0, 2),
        b in prop::collection::vec(-90.0f64..90.0, 2)
    ) {
        let metrics = [
            Metric::Euclidean,
            Metric::SquaredEuclidean,
            Metric::Manhattan,
            Metric::Chebyshev,
            Metric::Haversine { radius: EARTH_RADIUS_KM },
        ];
        for m in metrics {
            prop_assert_eq!(m.distance(&a, &a), 0.0);
            let (ab, ba) = (m.distance(&a, &b), m.distance(&b, &a));
            prop_assert!((ab - ba).abs() <= 1e-9 * ab.max(1.0), "{:?}: {} vs {}", m, ab, ba);
            prop_assert!(ab >= 0.0);
        }
    }

    #[test]
    fn prop_hull_is_idempotent(
        raw in prop::collection::vec((-50i32..50, -50i32..50), 3..40)
    ) {
        let pts = planar(&raw);
        let hull = convex_hull(&pts);
        prop_assume!(hull.is_ok());
        let hull = hull.unwrap();

        let again = convex_hull(hull.open_vertices()).unwrap();
        prop_assert_eq!(&hull, &again);

        for p in &pts {
            prop_assert!(hull.contains(*p));
        }
    }

    #[test]
    fn prop_far_polyline_never_crosses(
        raw in prop::collection::vec((0i32..10, 0i32..10), 3..20),
        path in prop::collection::vec((20i32..30, -30i32..30), 2..6)
    ) {
        let hull = convex_hull(&planar(&raw));
        prop_assume!(hull.is_ok());
        let hull = hull.unwrap();

        prop_assert!(!polyline_intersects_hull(&planar(&path), hull.vertices()));
    }
}
