//! Batch observer hooks.

use std::path::Path;

use super::eta::ProgressSnapshot;
use crate::pipeline::{CleanupReport, DownloadOutcome, DownloadTask};

/// Receives everything the batch runner has to say about a run.
///
/// All hooks default to doing nothing.
pub trait DownloadObserver {
    /// A file is about to be processed (`index` is 1-based).
    fn file_started(&mut self, _index: usize, _total: usize, _task: &DownloadTask) {}

    /// The destination already exists with `size` bytes.
    fn existing_file(&mut self, _path: &Path, _size: u64) {}

    /// The existing destination was removed for an overwrite.
    fn overwriting(&mut self, _path: &Path) {}

    /// Bytes are about to flow. `total_bytes` is the listed size, if any.
    fn transfer_started(&mut self, _total_bytes: Option<u64>) {}

    /// Throttled progress update (only for files with a known size).
    fn progress(&mut self, _snapshot: &ProgressSnapshot) {}

    /// The transfer ended, successfully or not.
    fn transfer_finished(&mut self) {}

    /// Final outcome for one file.
    fn file_finished(&mut self, _task: &DownloadTask, _outcome: &DownloadOutcome) {}

    /// The user chose to cancel all remaining downloads.
    fn batch_cancelled(&mut self) {}

    /// Ctrl+C stopped the batch; `cleanup` lists what was removed.
    fn interrupted(&mut self, _cleanup: &CleanupReport) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DownloadObserver for NoopObserver {}
