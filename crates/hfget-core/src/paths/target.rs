//! Download target directory layout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::PathError;
use crate::settings::StorageStrategy;

/// Compute the directory a repository's files are written to.
///
/// - `Flat` returns `base` unchanged.
/// - `Organized` splits `repo_name` on the first `/` and returns
///   `base/<owner>/<rest>`. A name without `/` degrades to
///   `base/<repo_name>`.
pub fn resolve_target_dir(base: &Path, strategy: StorageStrategy, repo_name: &str) -> PathBuf {
    match strategy {
        StorageStrategy::Flat => base.to_path_buf(),
        StorageStrategy::Organized => {
            let (owner, rest) = repo_name.split_once('/').unwrap_or((repo_name, ""));
            let dir = base.join(owner);
            if rest.is_empty() { dir } else { dir.join(rest) }
        }
    }
}

/// Create the target directory and all intermediate components.
pub fn ensure_target_dir(path: &Path) -> Result<(), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }

    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Remove `path` if it is an empty directory.
///
/// Returns `Ok(true)` when the directory was removed, `Ok(false)` when it
/// is missing or still has entries.
pub fn remove_dir_if_empty(path: &Path) -> io::Result<bool> {
    let mut entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };

    if entries.next().is_some() {
        return Ok(false);
    }

    fs::remove_dir(path)?;
    Ok(true)
}
