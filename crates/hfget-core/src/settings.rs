//! Settings domain types.
//!
//! The settings file is a flat, additive JSON object. Every field is
//! optional; accessors apply the documented defaults so callers never deal
//! with `None` directly.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base directory for downloaded models.
pub const DEFAULT_DOWNLOAD_DIR: &str = "/opt/llms/models";

/// Default number of repositories returned by a search.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// How downloaded files are laid out below the base directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStrategy {
    /// All files directly in the base directory.
    Flat,
    /// Files in `<base>/<owner>/<model>` sub-directories.
    #[default]
    Organized,
}

impl StorageStrategy {
    /// Human readable description used in the download step banner.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Organized => "Organized by owner/model",
        }
    }

    /// Value as written in the settings file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Organized => "organized",
        }
    }
}

impl fmt::Display for StorageStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted user settings.
///
/// Missing or unknown fields are tolerated; the schema is never migrated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// `HuggingFace` access token. An empty string counts as unset.
    #[serde(alias = "hfToken", skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Base directory offered at the output-directory prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_download_dir: Option<String>,

    /// Maximum number of search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_search_limit: Option<u32>,

    /// Directory layout strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_strategy: Option<StorageStrategy>,
}

impl Settings {
    /// The object written by `hfget init`: every field set, token left as an
    /// empty placeholder for the user to fill in.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            token: Some(String::new()),
            default_download_dir: Some(DEFAULT_DOWNLOAD_DIR.to_string()),
            default_search_limit: Some(DEFAULT_SEARCH_LIMIT),
            storage_strategy: Some(StorageStrategy::Organized),
        }
    }

    /// Token stored in the file, ignoring the empty placeholder.
    pub fn file_token(&self) -> Option<&str> {
        self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    /// Resolve the access token: file value first, then the given
    /// environment value. Empty values count as absent.
    pub fn resolve_token(&self, env_value: Option<String>) -> Option<String> {
        self.file_token().map(str::to_string).or_else(|| {
            env_value
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        })
    }

    /// Effective download directory (with default fallback).
    pub fn download_dir(&self) -> PathBuf {
        self.default_download_dir
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR), PathBuf::from)
    }

    /// Effective search limit (with default fallback; zero counts as unset).
    pub fn search_limit(&self) -> u32 {
        match self.default_search_limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Effective storage strategy (with default fallback).
    pub fn storage_strategy(&self) -> StorageStrategy {
        self.storage_strategy.unwrap_or_default()
    }
}

/// Settings persistence errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("Failed to save config to {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// `init` was asked to create a file that is already there.
    #[error("Config file already exists at {0}")]
    AlreadyExists(PathBuf),

    /// Home directory could not be determined.
    #[error("Cannot determine home directory")]
    NoHomeDir,

}
