//! Content fetch errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Error types for content fetching.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Article index is not valid JSON
    #[error("Failed to parse article index: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource URL could not be built from the content source
    #[error("Invalid content URL: {0}")]
    InvalidUrl(String),

    /// Slug would address a resource outside the article directory
    #[error("Invalid article slug: {0:?}")]
    InvalidSlug(String),
}
