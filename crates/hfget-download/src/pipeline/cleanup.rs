//! Best-effort removal of partial downloads.

use std::io;
use std::path::{Path, PathBuf};

use hfget_core::{StorageStrategy, remove_dir_if_empty};

/// What interrupt cleanup removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed_file: Option<PathBuf>,
    pub removed_dirs: Vec<PathBuf>,
}

/// Delete `path` if it exists. Errors are logged and swallowed.
pub fn remove_partial_file(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not remove partial file");
            false
        }
    }
}

fn remove_empty_dir(path: &Path, report: &mut CleanupReport) -> bool {
    match remove_dir_if_empty(path) {
        Ok(true) => {
            report.removed_dirs.push(path.to_path_buf());
            true
        }
        Ok(false) => false,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not remove directory");
            false
        }
    }
}

/// Cleanup after Ctrl+C.
///
/// Removes the in-flight file, then `target_dir` if it is now empty. For the
/// organized layout the owner directory above it goes too when it is empty
/// and is not `base_dir` itself.
pub fn cleanup_after_interrupt(
    current_file: Option<&Path>,
    target_dir: &Path,
    base_dir: &Path,
    strategy: StorageStrategy,
) -> CleanupReport {
    let mut report = CleanupReport::default();

    if let Some(file) = current_file
        && remove_partial_file(file)
    {
        report.removed_file = Some(file.to_path_buf());
    }

    if remove_empty_dir(target_dir, &mut report)
        && strategy == StorageStrategy::Organized
        && let Some(parent) = target_dir.parent()
        && parent != base_dir
    {
        remove_empty_dir(parent, &mut report);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_organized_cleanup_removes_file_and_empty_dirs() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("models");
        let target = base.join("owner").join("model");
        fs::create_dir_all(&target).unwrap();
        let partial = target.join("model.gguf");
        fs::write(&partial, b"partial").unwrap();

        let report = cleanup_after_interrupt(Some(&partial), &target, &base, StorageStrategy::Organized);

        assert_eq!(report.removed_file, Some(partial.clone()));
        assert_eq!(report.removed_dirs, vec![target.clone(), base.join("owner")]);
        assert!(!partial.exists());
        assert!(base.exists());
    }

    #[test]
    fn test_non_empty_target_is_kept() {
        let temp = tempdir().unwrap();
        let base = temp.path().to_path_buf();
        let target = base.join("owner").join("model");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join("done.gguf"), b"complete").unwrap();
        let partial = target.join("partial.gguf");
        fs::write(&partial, b"x").unwrap();

        let report = cleanup_after_interrupt(Some(&partial), &target, &base, StorageStrategy::Organized);

        assert!(report.removed_dirs.is_empty());
        assert!(target.join("done.gguf").exists());
    }

    #[test]
    fn test_owner_dir_with_other_models_is_kept() {
        let temp = tempdir().unwrap();
        let base = temp.path().to_path_buf();
        let target = base.join("owner").join("model");
        fs::create_dir_all(&target).unwrap();
        fs::create_dir_all(base.join("owner").join("other-model")).unwrap();

        let report = cleanup_after_interrupt(None, &target, &base, StorageStrategy::Organized);

        assert_eq!(report.removed_dirs, vec![target]);
        assert!(base.join("owner").exists());
    }

    #[test]
    fn test_organized_without_owner_never_removes_base() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("models");
        let target = base.join("standalone");
        fs::create_dir_all(&target).unwrap();

        let report = cleanup_after_interrupt(None, &target, &base, StorageStrategy::Organized);

        assert_eq!(report.removed_dirs, vec![target]);
        assert!(base.exists());
    }

    #[test]
    fn test_missing_file_is_not_reported() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("never-created.gguf");
        assert!(!remove_partial_file(&missing));
    }
}
