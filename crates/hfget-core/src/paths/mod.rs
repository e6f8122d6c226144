//! Path utilities: the settings file location and download target layout.
//!
//! # Design
//!
//! - Returns `PathBuf` and typed errors for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod config;
mod error;
mod target;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Settings file location and persistence
pub use config::{CONFIG_DIR_ENV, SettingsStore, TOKEN_ENV, config_dir, config_file_path};

// Download target layout
pub use target::{ensure_target_dir, remove_dir_if_empty, resolve_target_dir};
