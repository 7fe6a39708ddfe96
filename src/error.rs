use thiserror::Error;

/// Errors returned by clustering and geometry routines in this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input slice is empty.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested neighbor rank is incompatible with the dataset.
    #[error("invalid k: requested {k}, but dataset has {n_points} points")]
    KOutOfRange {
        /// Requested neighbor rank.
        k: usize,
        /// Number of points in the dataset.
        n_points: usize,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A point has fewer than two coordinates and cannot be projected to the plane.
    #[error("point of dimension {dimension} has no planar projection")]
    NotPlanar {
        /// Dimension of the offending point.
        dimension: usize,
    },

    /// Too few points to enclose an area.
    #[error("shape too small: {found} points, need at least 3")]
    ShapeTooSmall {
        /// Number of points supplied.
        found: usize,
    },

    /// Every point lies on a single line.
    #[error("points are collinear")]
    Collinear,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
