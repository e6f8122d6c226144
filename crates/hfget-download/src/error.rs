//! Download pipeline errors.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors for a single file transfer.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The final response was not a 2xx.
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// A 301/302 without a usable `Location` header.
    #[error("Redirect from {url} has no Location header")]
    MissingLocation { url: String },

    /// The redirect target redirected again.
    #[error("Too many redirects starting at {url}")]
    TooManyRedirects { url: String },

    /// A download or redirect URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent.
    #[error("Request failed: {0}")]
    Request(String),

    /// The body stream broke off.
    #[error("Stream error: {0}")]
    Stream(String),

    /// Writing or removing a local file failed.
    #[error("I/O error on {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Cancellation was requested (Ctrl+C).
    #[error("Download cancelled")]
    Cancelled,
}

impl DownloadError {
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}

impl From<url::ParseError> for DownloadError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
