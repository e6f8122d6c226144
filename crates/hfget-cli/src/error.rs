//! CLI-specific error types and exit codes.

use hfget_core::{CoreError, SettingsError};
use thiserror::Error;

use crate::utils::input::PromptClosed;

/// Errors that end the process.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error (missing token, filesystem, user left).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Settings file could not be located, read or written.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A client could not be constructed.
    #[error("Setup failed: {0}")]
    Setup(String),

    /// Any other failure while prompting.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// Leaving the wizard at a prompt is treated like quitting it.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(CoreError::UserCancelled) => 0,
            Self::Core(_) | Self::Settings(_) | Self::Setup(_) | Self::Prompt(_) => 1,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        if err.is::<PromptClosed>() {
            Self::Core(CoreError::UserCancelled)
        } else {
            Self::Prompt(format!("{err:#}"))
        }
    }
}
