//! Cross-crate error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

use crate::paths::PathError;
use crate::ports::CatalogError;

/// Semantic error kinds the wizard routes on.
///
/// Adapters map their own errors into this so the flow controller can decide
/// which step to return to, and the binary can pick an exit code.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A repository or file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No access token in the settings file or the environment.
    #[error("HF_TOKEN not set")]
    AuthMissing,

    /// Network-level failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Local filesystem failure.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The user left the wizard (closed input at a prompt).
    #[error("Cancelled by user")]
    UserCancelled,
}

impl CoreError {
    /// Whether the process has to stop, as opposed to returning to an
    /// earlier wizard step.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::AuthMissing)
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { repo } => Self::NotFound(repo),
            other => Self::Transport(other.to_string()),
        }
    }
}

impl From<PathError> for CoreError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::NotADirectory(path) => Self::Filesystem {
                reason: "not a directory".to_string(),
                path,
            },
            PathError::CreateFailed { path, reason } => Self::Filesystem { path, reason },
            PathError::EmptyPath => Self::Filesystem {
                path: PathBuf::new(),
                reason: "path cannot be empty".to_string(),
            },
        }
    }
}
