use std::collections::TryReserveError;
use thiserror::Error;

/// Everything that can abort a k-means run.
///
/// None of these are recoverable within a run: they either indicate a violated precondition
/// (inconsistent input, invalid parameters) or resource exhaustion.
#[derive(Debug, Error)]
pub enum KMeansError {
    /// Two vectors of differing dimension were combined.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Storage for a vector or collection could not be provided.
    #[error("allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// `k` has to satisfy `1 < k < n`.
    #[error("invalid number of clusters: {k} (points: {n})")]
    InvalidClusterCount { k: usize, n: usize },

    #[error("invalid number of points: {0}")]
    InvalidPointCount(usize),

    #[error("invalid dimension of point: {0}")]
    InvalidDimension(usize),

    /// `max_iter` has to satisfy `1 < max_iter < 1000`.
    #[error("invalid maximum iteration: {0}")]
    InvalidMaxIterations(usize),

    /// A point without cluster assignment was fed into the update step.
    #[error("point {index} has not been assigned to a cluster")]
    Unassigned { index: usize },

    /// An initialization method produced the wrong amount of centroids.
    #[error("initialized {found} centroids, but {expected} were requested")]
    InvalidCentroidCount { expected: usize, found: usize },

    /// A field of the input could not be parsed as a real number.
    #[error("line {line}: could not parse '{field}' as a real number")]
    Parse { line: usize, field: String },

    /// A row of the input had the wrong amount of fields.
    #[error("line {line}: expected {expected} coordinates, found {found}")]
    RowLength { line: usize, expected: usize, found: usize },

    /// The input did not contain the announced amount of points.
    #[error("expected {expected} points, but the input contains {found}")]
    PointCountMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
