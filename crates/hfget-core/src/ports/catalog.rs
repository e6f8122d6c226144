//! Model catalog port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{FileEntry, RepositorySummary};

/// Errors from catalog operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The repository does not exist (or is hidden from this token).
    #[error("Repository not found: {repo}")]
    NotFound { repo: String },

    /// Authentication required or rejected.
    #[error("Authentication required for {repo}")]
    AuthRequired { repo: String },

    /// API rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with something we could not parse.
    #[error("Invalid API response: {message}")]
    InvalidResponse { message: String },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Repository search, file listing and metadata pre-flight.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// Search repositories by free-text query, at most `limit` results.
    ///
    /// An empty result is not an error.
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<RepositorySummary>>;

    /// List the files of a repository (unfiltered).
    async fn list_files(&self, repo: &str) -> CatalogResult<Vec<FileEntry>>;

    /// Check that the repository exists and is readable with the current
    /// credentials.
    async fn fetch_metadata(&self, repo: &str) -> CatalogResult<()>;
}
