use crate::distance::{Distance, Metric};
use crate::error::{Error, Result};
use crate::geometry::{convex_hull, Hull, Point2};
use crate::point::Point;

/// Cluster membership of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not yet classified. Never observed after a successful fit.
    #[default]
    Unassigned,
    /// Not density-reachable from any core point. A later core point may
    /// still claim it during the same fit.
    Noise,
    /// Member of the cluster with this id.
    Cluster(usize),
}

impl Label {
    /// Whether this is the noise label.
    pub fn is_noise(self) -> bool {
        self == Label::Noise
    }

    /// Cluster id, or `None` for noise and unassigned nodes.
    pub fn cluster_id(self) -> Option<usize> {
        match self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }
}

/// A point plus the per-fit state the clustering engine writes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterNode {
    point: Point,
    label: Label,
    visited: bool,
}

impl ClusterNode {
    /// Wrap a point as an unvisited, unassigned node.
    pub fn new(point: Point) -> Self {
        Self {
            point,
            label: Label::Unassigned,
            visited: false,
        }
    }

    /// The node's coordinates.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Current cluster membership.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Whether the last fit has visited this node.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    /// Marks the node visited; returns `false` if it already was.
    pub(crate) fn visit(&mut self) -> bool {
        !std::mem::replace(&mut self.visited, true)
    }

    pub(crate) fn reset(&mut self) {
        self.label = Label::Unassigned;
        self.visited = false;
    }
}

impl AsRef<[f64]> for ClusterNode {
    fn as_ref(&self) -> &[f64] {
        self.point.coords()
    }
}

/// The points of one clustering run together with the metric that measures them.
///
/// A dataset owns its nodes. Fitting borrows it mutably, so node state has a
/// single writer for the duration of a fit. Every point shares one dimension.
#[derive(Debug, Clone)]
pub struct Dataset<D = Metric> {
    nodes: Vec<ClusterNode>,
    dimension: usize,
    metric: D,
}

impl Dataset<Metric> {
    /// Build a dataset measured with [`Metric::Euclidean`].
    ///
    /// Fails on empty input, on zero-dimensional or non-finite points, and
    /// when points disagree on dimension.
    pub fn new<P, I>(points: I) -> Result<Self>
    where
        P: Into<Point>,
        I: IntoIterator<Item = P>,
    {
        let nodes: Vec<ClusterNode> = points
            .into_iter()
            .map(|p| ClusterNode::new(p.into()))
            .collect();

        let Some(first) = nodes.first() else {
            return Err(Error::EmptyInput);
        };
        let dimension = first.point.dimension();
        if dimension == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }

        for node in &nodes {
            let found = node.point.dimension();
            if found != dimension {
                return Err(Error::DimensionMismatch {
                    expected: dimension,
                    found,
                });
            }
            if node.point.coords().iter().any(|c| !c.is_finite()) {
                return Err(Error::InvalidParameter {
                    name: "points",
                    message: "coordinates must be finite",
                });
            }
        }

        Ok(Self {
            nodes,
            dimension,
            metric: Metric::default(),
        })
    }
}

impl<D: Distance> Dataset<D> {
    /// Measure this dataset with another distance function.
    pub fn with_metric<E: Distance>(self, metric: E) -> Dataset<E> {
        Dataset {
            nodes: self.nodes,
            dimension: self.dimension,
            metric,
        }
    }

    /// The distance function every fit and estimation on this dataset uses.
    pub fn metric(&self) -> &D {
        &self.metric
    }

    /// Nodes in input order.
    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [ClusterNode] {
        &mut self.nodes
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Common dimension of every point.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Current label of every node, in input order.
    pub fn labels(&self) -> Vec<Label> {
        self.nodes.iter().map(ClusterNode::label).collect()
    }

    /// Return every node to unvisited and unassigned.
    pub fn reset(&mut self) {
        self.nodes.iter_mut().for_each(ClusterNode::reset);
    }

    /// Give the nodes back to the caller.
    pub fn into_nodes(self) -> Vec<ClusterNode> {
        self.nodes
    }
}

/// One group of the partition a fit produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    label: Label,
    nodes: Vec<ClusterNode>,
}

impl Cluster {
    pub(crate) fn new(label: Label, nodes: Vec<ClusterNode>) -> Self {
        Self { label, nodes }
    }

    /// [`Label::Cluster`] for a real cluster, [`Label::Noise`] for the noise bucket.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Members in input order.
    pub fn nodes(&self) -> &[ClusterNode] {
        &self.nodes
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Members projected onto the first two axes.
    pub fn planar_points(&self) -> Result<Vec<Point2>> {
        self.nodes.iter().map(|n| n.point.xy()).collect()
    }

    /// Convex outline of the members.
    pub fn hull(&self) -> Result<Hull> {
        convex_hull(&self.planar_points()?)
    }
}

/// The convex outline of one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Label of the outlined group.
    pub label: Label,
    /// Closed convex boundary of the group's members.
    pub hull: Hull,
}

/// What a fit returns: the partition itself, or the outlines of its groups.
#[derive(Debug, Clone, PartialEq)]
pub enum Fit {
    /// Every group, real clusters first and noise last.
    Clusters(Vec<Cluster>),
    /// Outlines of the groups that have one.
    Outlines(Vec<Outline>),
}

impl Fit {
    /// The groups, if this fit was run without hulls.
    pub fn into_clusters(self) -> Option<Vec<Cluster>> {
        match self {
            Fit::Clusters(c) => Some(c),
            Fit::Outlines(_) => None,
        }
    }

    /// The outlines, if this fit was run with hulls.
    pub fn into_outlines(self) -> Option<Vec<Outline>> {
        match self {
            Fit::Outlines(o) => Some(o),
            Fit::Clusters(_) => None,
        }
    }

    /// Number of groups (or outlines) in the result.
    pub fn len(&self) -> usize {
        match self {
            Fit::Clusters(c) => c.len(),
            Fit::Outlines(o) => o.len(),
        }
    }

    /// Whether the result holds no groups.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
