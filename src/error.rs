use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KdSearchError {
    /// A tree was requested over zero points.
    #[error("Cannot build a KDTree from an empty set of points.")]
    EmptyInput,

    /// A query radius was negative or NaN.
    #[error("Radius must be a non-negative number, got {0}.")]
    InvalidRadius(f64),

    /// An input point had a NaN coordinate, which cannot be ordered.
    #[error("Point {index} has a NaN coordinate on dimension {dim}.")]
    NaNCoordinate { index: usize, dim: usize },

    /// A query center did not have as many dimensions as the indexed points.
    #[error("Expected a coordinate with {expected} dimensions, got {found}.")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, KdSearchError>;
