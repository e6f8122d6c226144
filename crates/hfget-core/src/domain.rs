//! Catalog domain types.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// File extensions treated as model weights (compared case-insensitively).
pub const WEIGHT_FILE_EXTENSIONS: &[&str] = &["gguf", "safetensors", "bin"];

/// `q` or `f`, digits, then any run of `[_a-z0-9]`, ignoring case.
static QUANTIZATION_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[qf][0-9]+[_a-z0-9]*").ok());

/// A repository returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Full repository name (`owner/model`).
    pub name: String,
    /// Like count.
    pub likes: u64,
}

impl RepositorySummary {
    pub fn new(name: impl Into<String>, likes: u64) -> Self {
        Self {
            name: name.into(),
            likes,
        }
    }
}

/// A file in a repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the repository root.
    pub path: String,
    /// Size in bytes, when the catalog reports one.
    pub size: Option<u64>,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// File name without directories.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Whether the path ends in one of [`WEIGHT_FILE_EXTENSIONS`].
    pub fn is_weight_file(&self) -> bool {
        Path::new(&self.path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                WEIGHT_FILE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
    }

    /// First quantization-like token in the path (`Q4_K_M`, `f16`, ...),
    /// or `"unknown"`.
    pub fn quantization_label(&self) -> &str {
        QUANTIZATION_PATTERN
            .as_ref()
            .and_then(|pattern| pattern.find(&self.path))
            .map_or("unknown", |found| found.as_str())
    }
}

/// Keep only weight files, preserving order.
pub fn filter_weight_files(files: &[FileEntry]) -> Vec<FileEntry> {
    files.iter().filter(|f| f.is_weight_file()).cloned().collect()
}
