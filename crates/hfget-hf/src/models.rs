//! Internal API types for the `HuggingFace` Hub.

use url::Url;

use crate::config::HfClientConfig;
use crate::error::HfResult;

/// Internal configuration, derived from [`HfClientConfig`].
#[derive(Debug, Clone)]
pub struct HfConfig {
    /// Hub host (default: <https://huggingface.co>)
    pub endpoint: Url,
}

impl HfConfig {
    pub fn from_public(config: &HfClientConfig) -> HfResult<Self> {
        Ok(Self {
            endpoint: Url::parse(&config.endpoint)?,
        })
    }
}

#[cfg(test)]
impl Default for HfConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(crate::config::DEFAULT_ENDPOINT).expect("default endpoint is valid"),
        }
    }
}

/// Kind of entry in a repository tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HfEntryType {
    File,
    Directory,
}

/// Entry in a repository file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HfTreeEntry {
    /// Path relative to repository root
    pub path: String,
    pub entry_type: HfEntryType,
    /// Size in bytes (absent for directories)
    pub size: Option<u64>,
}

impl HfTreeEntry {
    pub fn is_directory(&self) -> bool {
        self.entry_type == HfEntryType::Directory
    }
}
