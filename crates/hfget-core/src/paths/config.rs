//! Settings file location and persistence.
//!
//! The settings live in a single pretty-printed JSON file at
//! `~/.config/hfget/config.json`. `HFGET_CONFIG_DIR` relocates the
//! directory (tests, packaging).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::{Settings, SettingsError};

/// Environment variable overriding the settings directory.
pub const CONFIG_DIR_ENV: &str = "HFGET_CONFIG_DIR";

/// Environment variable consulted for the access token when the settings
/// file has none.
pub const TOKEN_ENV: &str = "HF_TOKEN";

const CONFIG_FILE_NAME: &str = "config.json";

/// Directory holding the settings file.
///
/// Resolution order:
/// 1. `HFGET_CONFIG_DIR` environment variable
/// 2. `~/.config/hfget`
pub fn config_dir() -> Result<PathBuf, SettingsError> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let home = dirs::home_dir().ok_or(SettingsError::NoHomeDir)?;
    Ok(home.join(".config").join("hfget"))
}

/// Full path of the settings file.
pub fn config_file_path() -> Result<PathBuf, SettingsError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads and saves [`Settings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the standard per-user location.
    pub fn open_default() -> Result<Self, SettingsError> {
        Ok(Self::at(config_file_path()?))
    }

    /// Store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the settings file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the settings file.
    ///
    /// A missing file silently yields empty settings. An unreadable or
    /// malformed file yields empty settings and a warning; loading never
    /// fails.
    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }

        let parsed = fs::read_to_string(&self.path)
            .map_err(|e| e.to_string())
            .and_then(|content| serde_json::from_str::<Settings>(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(settings) => settings,
            Err(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "Failed to load config, using defaults"
                );
                Settings::default()
            }
        }
    }

    /// Write the settings file, creating its directory when needed.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let io_err = |reason: String| SettingsError::Io {
            path: self.path.clone(),
            reason,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| io_err(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(settings).map_err(|e| io_err(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| io_err(e.to_string()))?;

        tracing::debug!(path = %self.path.display(), "Saved config");
        Ok(())
    }

    /// Create the settings file with default values and an empty token.
    ///
    /// Refuses to touch an existing file.
    pub fn initialize(&self) -> Result<Settings, SettingsError> {
        if self.path.exists() {
            return Err(SettingsError::AlreadyExists(self.path.clone()));
        }

        let settings = Settings::with_defaults();
        self.save(&settings)?;
        Ok(settings)
    }
}
