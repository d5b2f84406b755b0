//! Error types for the HTTP cluster client.

use thiserror::Error;

/// Result type alias for cluster client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed or returned an error status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Stats response had no primary store size for the index.
    #[error("no primary store size reported for index {0}")]
    MissingSize(String),

    /// Host/port did not form a usable URL.
    #[error("invalid cluster endpoint {0}")]
    InvalidEndpoint(String),
}

impl Error {
    /// Tag with the failing operation and hand over to the core error type
    pub fn into_core(self, operation: &'static str) -> reaper_core::Error {
        reaper_core::Error::cluster(operation, self)
    }
}
