//! Run-level errors
//!
//! Per-index problems (bad timestamps, missing prefix) never surface here;
//! they are narrated and skipped. These errors end the run.

use thiserror::Error;

/// Boxed error coming from a `Cluster` implementation
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for selection and deletion
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The cluster could not be reached or returned an unusable response
    #[error("cluster {operation} failed: {source}")]
    Cluster {
        operation: &'static str,
        #[source]
        source: BoxError,
    },

    /// Disk budget was negative, zero or not a finite number
    #[error("invalid disk budget: {0} GB")]
    InvalidBudget(f64),
}

impl Error {
    /// Wrap a collaborator error, tagging the operation that failed
    pub fn cluster(operation: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Cluster {
            operation,
            source: source.into(),
        }
    }
}
