//! Core domain types, settings persistence and port definitions for hfget.
//!
//! This crate has no network or terminal dependencies. Adapters
//! (`hfget-hf`, `hfget-download`, `hfget-cli`) depend on it, never the
//! other way around.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod paths;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{FileEntry, RepositorySummary, WEIGHT_FILE_EXTENSIONS, filter_weight_files};
pub use error::CoreError;
pub use paths::{
    CONFIG_DIR_ENV, PathError, SettingsStore, TOKEN_ENV, config_file_path, ensure_target_dir,
    remove_dir_if_empty, resolve_target_dir,
};
pub use ports::{CatalogError, CatalogPort, CatalogResult};
pub use settings::{
    DEFAULT_DOWNLOAD_DIR, DEFAULT_SEARCH_LIMIT, Settings, SettingsError, StorageStrategy,
};

// Silence unused dev-dependency warnings for crates only used by some test modules
#[cfg(test)]
use tempfile as _;
