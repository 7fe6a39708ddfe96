//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. It discovers clusters of
//! arbitrary shape, decides the number of clusters itself, and leaves
//! low-density points as noise.
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size for a point to be "core". The
//!   neighborhood includes the point itself.
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. For each unvisited point P, in input order:
//!    - Mark P visited and find its ε-neighborhood N(P)
//!    - If |N(P)| < MinPts, label P noise (a later cluster may claim it)
//!    - Else P is core: open a new cluster and expand it
//!
//! 2. Expansion walks N(P) as a growing worklist. Each unvisited entry is
//!    visited and, if core, appends its own neighborhood. Each entry that is
//!    noise or unlabeled joins the cluster. A point already in another cluster
//!    keeps its label, so a border point shared by two clusters belongs to the
//!    one that reached it first.
//!
//! The worklist is not deduplicated by default, so a point can be queued many
//! times. Reprocessing is harmless (the visited flag stops re-expansion) but
//! costs time on dense data; [`Dbscan::with_dedup_worklist`] queues each point
//! at most once per cluster and yields the same labels.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) distance evaluations.
//! - **Space**: O(n) for node state, plus the worklist.
//!
//! ## Choosing ε
//!
//! ε is sensitive and dataset-dependent, and is measured in the units of the
//! dataset's metric (a squared radius under
//! [`Metric::SquaredEuclidean`](crate::Metric::SquaredEuclidean)).
//! [`Dataset::find_epsilon`] estimates it from the k-distance curve.
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use tracing::{debug, trace};

use super::node::{Cluster, ClusterNode, Dataset, Fit, Label, Outline};
use super::traits::Clustering;
use crate::boundary::outline_clusters;
use crate::distance::Distance;
use crate::error::{Error, Result};

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f64,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
    /// Queue each point at most once per expansion.
    dedup_worklist: bool,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points, the point itself included, to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by the k-distance elbow with k = `min_pts`.
    /// - `min_pts`: 2 * dimension is a common heuristic. Minimum is 3.
    pub fn new(epsilon: f64, min_pts: usize) -> Self {
        Self {
            epsilon,
            min_pts,
            dedup_worklist: false,
        }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Deduplicate the expansion worklist.
    pub fn with_dedup_worklist(mut self, dedup: bool) -> Self {
        self.dedup_worklist = dedup;
        self
    }

    /// Neighborhood radius, in the dataset metric's units.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Minimum neighborhood size for a core point.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Cluster `data` and return the partition.
    ///
    /// Node state is reset first, so refitting a dataset starts from scratch.
    /// Real clusters come first in id order, followed by the noise bucket if
    /// any point is noise.
    pub fn fit<D: Distance>(&self, data: &mut Dataset<D>) -> Result<Vec<Cluster>> {
        let n_clusters = self.assign(data)?;
        Ok(group(data.nodes(), n_clusters))
    }

    /// Cluster `data` and return the convex outline of each group.
    ///
    /// The noise bucket is outlined too. A group whose hull cannot be built
    /// (fewer than three members, or all collinear) is logged and left out;
    /// see [`outline_clusters`].
    pub fn fit_outlines<D: Distance>(&self, data: &mut Dataset<D>) -> Result<Vec<Outline>> {
        if data.dimension() < 2 {
            return Err(Error::NotPlanar {
                dimension: data.dimension(),
            });
        }

        let clusters = self.fit(data)?;
        Ok(outline_clusters(&clusters))
    }

    /// [`fit`](Self::fit) or [`fit_outlines`](Self::fit_outlines), chosen at runtime.
    pub fn fit_with<D: Distance>(&self, data: &mut Dataset<D>, with_hull: bool) -> Result<Fit> {
        if with_hull {
            self.fit_outlines(data).map(Fit::Outlines)
        } else {
            self.fit(data).map(Fit::Clusters)
        }
    }

    /// Label every node of `data`. Returns the number of clusters.
    fn assign<D: Distance>(&self, data: &mut Dataset<D>) -> Result<usize> {
        self.validate()?;
        data.metric().check(data.dimension())?;
        data.reset();

        let mut cluster_id = 0;
        for point_idx in 0..data.len() {
            if !data.nodes_mut()[point_idx].visit() {
                continue;
            }

            let neighbors = self.region_query(data, point_idx);

            // MinPts includes the point itself, which is always in its own neighborhood.
            if neighbors.len() < self.min_pts {
                // Not enough neighbors: mark as noise (might be border later)
                data.nodes_mut()[point_idx].set_label(Label::Noise);
                continue;
            }

            self.expand_cluster(data, point_idx, neighbors, cluster_id);
            cluster_id += 1;
        }

        debug_assert!(data
            .nodes()
            .iter()
            .all(|n| n.label() != Label::Unassigned));
        debug!(
            points = data.len(),
            clusters = cluster_id,
            noise = data.nodes().iter().filter(|n| n.label().is_noise()).count(),
            eps = self.epsilon,
            min_pts = self.min_pts,
            "dbscan fit"
        );
        Ok(cluster_id)
    }

    /// Indices of all points within epsilon of `point_idx`, itself included.
    fn region_query<D: Distance>(&self, data: &Dataset<D>, point_idx: usize) -> Vec<usize> {
        let nodes = data.nodes();
        let point = nodes[point_idx].point().coords();
        nodes
            .iter()
            .enumerate()
            .filter(|(_, other)| {
                data.metric().distance(point, other.point().coords()) <= self.epsilon
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Expand cluster from a core point.
    fn expand_cluster<D: Distance>(
        &self,
        data: &mut Dataset<D>,
        point_idx: usize,
        neighbors: Vec<usize>,
        cluster_id: usize,
    ) {
        let label = Label::Cluster(cluster_id);
        data.nodes_mut()[point_idx].set_label(label);

        let mut queued = if self.dedup_worklist {
            let mut q = vec![false; data.len()];
            neighbors.iter().for_each(|&i| q[i] = true);
            Some(q)
        } else {
            None
        };

        // Index-based: the worklist grows while it is walked.
        let mut worklist = neighbors;
        let mut cursor = 0;
        while cursor < worklist.len() {
            let idx = worklist[cursor];
            cursor += 1;

            if data.nodes_mut()[idx].visit() {
                let next = self.region_query(data, idx);
                if next.len() >= self.min_pts {
                    match queued.as_mut() {
                        Some(q) => {
                            for nn in next {
                                if !q[nn] {
                                    q[nn] = true;
                                    worklist.push(nn);
                                }
                            }
                        }
                        None => worklist.extend(next),
                    }
                }
            }

            // Promote noise (and not-yet-labeled points) to border/core members.
            let node = &mut data.nodes_mut()[idx];
            if matches!(node.label(), Label::Noise | Label::Unassigned) {
                node.set_label(label);
            }
        }

        trace!(cluster_id, processed = worklist.len(), "expanded cluster");
    }
}

/// Group labeled nodes: clusters in id order, then noise.
fn group(nodes: &[ClusterNode], n_clusters: usize) -> Vec<Cluster> {
    let mut members: Vec<Vec<ClusterNode>> = vec![Vec::new(); n_clusters];
    let mut noise = Vec::new();
    for node in nodes {
        match node.label() {
            Label::Cluster(id) => members[id].push(node.clone()),
            Label::Noise | Label::Unassigned => noise.push(node.clone()),
        }
    }

    let mut out: Vec<Cluster> = members
        .into_iter()
        .enumerate()
        .map(|(id, nodes)| Cluster::new(Label::Cluster(id), nodes))
        .collect();
    if !noise.is_empty() {
        out.push(Cluster::new(Label::Noise, noise));
    }
    out
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

impl Clustering for Dbscan {
    /// Labels `data` under [`Metric::Euclidean`](crate::Metric::Euclidean).
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<Label>> {
        let mut dataset = Dataset::new(data.iter().cloned())?;
        self.assign(&mut dataset)?;
        Ok(dataset.labels())
    }
}

impl<D: Distance> Dataset<D> {
    /// Cluster this dataset with the given parameters.
    ///
    /// With `with_hull`, returns the outline of every group that has one;
    /// otherwise the groups themselves. See [`Dbscan::fit`] and
    /// [`Dbscan::fit_outlines`].
    pub fn fit(&mut self, eps: f64, min_pts: usize, with_hull: bool) -> Result<Fit> {
        Dbscan::new(eps, min_pts).fit_with(self, with_hull)
    }
}
