//! Internal error types for `HuggingFace` operations.
//!
//! These errors are internal to `hfget-hf` and are mapped to
//! [`hfget_core::CatalogError`] at the port boundary.

use thiserror::Error;

/// Result type alias for `HuggingFace` operations.
pub type HfResult<T> = Result<T, HfError>;

/// Errors related to `HuggingFace` API operations.
#[derive(Debug, Error)]
pub enum HfError {
    /// API request failed with an HTTP error status.
    #[error("HuggingFace API request failed with status {status}: {url}")]
    ApiRequestFailed { status: u16, url: String },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from HuggingFace API: {message}")]
    InvalidResponse { message: String },

    /// The repository does not exist.
    #[error("Repository '{repo}' not found on HuggingFace")]
    RepoNotFound { repo: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
