//! Error types for MonteVest.

use thiserror::Error;

/// Result type alias for MonteVest operations.
pub type Result<T> = std::result::Result<T, MonteVestError>;

/// Error types for the simulation pipeline.
#[derive(Error, Debug)]
pub enum MonteVestError {
    /// A simulation parameter violates its domain constraint.
    ///
    /// Raised before any simulation work begins; the run never starts.
    #[error("Invalid parameter `{field}`: {message}")]
    InvalidParameter { field: &'static str, message: String },

    /// The GBM recursion produced a non-finite price.
    ///
    /// Fails the run fast rather than propagating NaN/Infinity into the
    /// downstream statistics.
    #[error("Degenerate numeric result: non-finite price in path {path}")]
    DegenerateNumeric { path: usize },

    /// The run was cancelled at a batch boundary.
    ///
    /// No partial result is published.
    #[error("Simulation cancelled before completion")]
    Cancelled,

    /// Empty data provided to an aggregation step.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },
}

impl MonteVestError {
    /// Create an invalid parameter error naming the offending field.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Create a degenerate numeric error for the given path index.
    pub fn degenerate_numeric(path: usize) -> Self {
        Self::DegenerateNumeric { path }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }
}
