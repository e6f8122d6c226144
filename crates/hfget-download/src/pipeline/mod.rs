//! Batch download pipeline.

mod cleanup;
mod interrupt;
mod runner;
mod writer;

use std::path::{Path, PathBuf};

use hfget_core::{FileEntry, StorageStrategy};

pub use cleanup::CleanupReport;
pub use interrupt::{BatchSession, INTERRUPT_GRACE, InterruptAction, Interrupts};
pub use runner::Downloader;

/// One file to fetch, built right before it is processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTask {
    pub source_repo: String,
    /// Path inside the repository.
    pub remote_path: String,
    pub target_dir: PathBuf,
    /// `target_dir` joined with the basename of `remote_path`.
    pub destination: PathBuf,
    /// Size from the listing, if known.
    pub expected_size: Option<u64>,
}

impl DownloadTask {
    pub fn new(source_repo: &str, file: &FileEntry, target_dir: &Path) -> Self {
        Self {
            source_repo: source_repo.to_string(),
            remote_path: file.path.clone(),
            target_dir: target_dir.to_path_buf(),
            destination: target_dir.join(file.file_name()),
            expected_size: file.size,
        }
    }

    pub fn file_name(&self) -> &str {
        self.remote_path.rsplit('/').next().unwrap_or(&self.remote_path)
    }
}

/// Everything a batch run needs to know about where files go.
#[derive(Debug, Clone)]
pub struct DownloadBatch {
    pub repo: String,
    /// Selected files in request order.
    pub files: Vec<FileEntry>,
    /// Directory the user typed at the output prompt.
    pub base_dir: PathBuf,
    /// Directory the files are written to (see `resolve_target_dir`).
    pub target_dir: PathBuf,
    pub strategy: StorageStrategy,
}

impl DownloadBatch {
    pub fn tasks(&self) -> impl Iterator<Item = DownloadTask> + '_ {
        self.files
            .iter()
            .map(|file| DownloadTask::new(&self.repo, file, &self.target_dir))
    }

    /// Same batch restricted to `remote_paths`, for the retry pass.
    #[must_use]
    pub fn retaining(&self, remote_paths: &[String]) -> Self {
        Self {
            files: self
                .files
                .iter()
                .filter(|f| remote_paths.contains(&f.path))
                .cloned()
                .collect(),
            ..self.clone()
        }
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success,
    /// An existing file was kept. Counts as a success.
    Skipped,
    Failed(String),
}

impl DownloadOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success | Self::Skipped)
    }
}

/// Outcome for one processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub remote_path: String,
    pub destination: PathBuf,
    pub outcome: DownloadOutcome,
}

/// Why a batch stopped before processing every file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStop {
    /// "Cancel all downloads" at an overwrite prompt.
    Cancelled,
    /// Ctrl+C.
    Interrupted,
}

/// Result of a batch run. Files after a stop have no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub requested: usize,
    pub files: Vec<FileReport>,
    pub stop: Option<BatchStop>,
}

impl BatchReport {
    pub const fn new(requested: usize) -> Self {
        Self {
            requested,
            files: Vec::new(),
            stop: None,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_success()).count()
    }

    /// Remote paths of failed files, in request order.
    pub fn failed_paths(&self) -> Vec<String> {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, DownloadOutcome::Failed(_)))
            .map(|f| f.remote_path.clone())
            .collect()
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Successfully downloaded {} of {} files",
            self.succeeded(),
            self.requested
        )
    }
}

/// Answer to "the destination already exists".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Skip,
    Overwrite,
    CancelAll,
}

/// Decides what to do with an existing destination file.
pub trait ConflictResolver {
    fn resolve(&mut self, destination: &Path, existing_size: u64) -> ConflictChoice;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_destination_uses_basename() {
        let file = FileEntry::new("Q8_0/model-Q8_0.gguf", Some(10));
        let task = DownloadTask::new("org/model", &file, Path::new("/out/org/model"));

        assert_eq!(task.destination, PathBuf::from("/out/org/model/model-Q8_0.gguf"));
        assert_eq!(task.file_name(), "model-Q8_0.gguf");
        assert_eq!(task.expected_size, Some(10));
    }

    #[test]
    fn test_retaining_keeps_order_and_layout() {
        let batch = DownloadBatch {
            repo: "org/model".to_string(),
            files: vec![
                FileEntry::new("a.gguf", None),
                FileEntry::new("b.gguf", None),
                FileEntry::new("c.gguf", None),
            ],
            base_dir: PathBuf::from("/out"),
            target_dir: PathBuf::from("/out/org/model"),
            strategy: StorageStrategy::Organized,
        };

        let retry = batch.retaining(&["c.gguf".to_string(), "a.gguf".to_string()]);
        let paths: Vec<_> = retry.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["a.gguf", "c.gguf"]);
        assert_eq!(retry.target_dir, batch.target_dir);
    }

    #[test]
    fn test_report_counts_skips_as_success() {
        let mut report = BatchReport::new(3);
        for (path, outcome) in [
            ("a", DownloadOutcome::Success),
            ("b", DownloadOutcome::Skipped),
            ("c", DownloadOutcome::Failed("HTTP 500".to_string())),
        ] {
            report.files.push(FileReport {
                remote_path: path.to_string(),
                destination: PathBuf::from(path),
                outcome,
            });
        }

        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed_paths(), vec!["c".to_string()]);
        assert_eq!(report.summary_line(), "Successfully downloaded 2 of 3 files");
    }
}
