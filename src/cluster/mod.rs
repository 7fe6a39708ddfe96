//! Density-based clustering.
//!
//! Points live in a [`Dataset`], which owns one [`ClusterNode`] per input
//! point and the [`Distance`](crate::Distance) that measures them. A
//! [`Dbscan`] fit borrows the dataset mutably, labels every node, and returns
//! the resulting groups (or their convex outlines).
//!
//! ## Labels
//!
//! Every node carries a [`Label`]: `Unassigned` before a fit, then either
//! `Noise` or `Cluster(id)`. Noise is provisional while a fit runs; a core
//! point discovered later can still pull a noise point into its cluster as a
//! border point. No node is `Unassigned` once a fit returns.
//!
//! ## Choosing ε
//!
//! [`find_epsilon`] reads the elbow off the sorted k-distance curve. It
//! measures with the dataset's own metric, so its result is already in the
//! units `fit` compares against.
//!
//! ## Usage
//!
//! ```rust
//! use outline::{Dataset, Dbscan, Label};
//!
//! let mut data = Dataset::new(vec![
//!     [0.0, 0.0],
//!     [1.0, 0.0],
//!     [0.0, 1.0],
//!     [1.0, 1.0],
//!     [10.0, 10.0],
//!     [11.0, 10.0],
//!     [10.0, 11.0],
//!     [11.0, 11.0],
//! ])
//! .unwrap();
//!
//! let eps = data.find_epsilon(3).unwrap();
//! let clusters = Dbscan::new(eps, 3).fit(&mut data).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].label(), Label::Cluster(0));
//! ```

mod dbscan;
mod epsilon;
mod node;
mod traits;

pub use dbscan::Dbscan;
pub use epsilon::{find_epsilon, k_distances};
pub use node::{Cluster, ClusterNode, Dataset, Fit, Label, Outline};
pub use traits::Clustering;
