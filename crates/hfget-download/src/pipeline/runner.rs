//! Sequential batch runner.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use url::Url;

use super::cleanup::{cleanup_after_interrupt, remove_partial_file};
use super::interrupt::Interrupts;
use super::writer::stream_to_file;
use super::{
    BatchReport, BatchStop, ConflictChoice, ConflictResolver, DownloadBatch, DownloadOutcome,
    DownloadTask, FileReport,
};
use crate::error::DownloadError;
use crate::progress::{DownloadObserver, RedrawThrottle};
use crate::transport::{HttpTransport, get_following_redirect};
use crate::url::build_download_url;

/// Minimum time between two progress redraws.
const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Downloads batches of files one at a time.
pub struct Downloader<T: HttpTransport> {
    transport: T,
    endpoint: Url,
    token: Option<String>,
    interrupts: Interrupts,
}

impl<T: HttpTransport> Downloader<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
            token: None,
            interrupts: Interrupts::new(),
        }
    }

    /// Send `Authorization: Bearer <token>` to the Hub (never to the CDN).
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Registry the download step registers its batch with, shared with the
    /// Ctrl+C listener.
    pub const fn interrupts(&self) -> &Interrupts {
        &self.interrupts
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Process every file of `batch` in order.
    ///
    /// Failures are recorded and the batch moves on. "Cancel all" at an
    /// overwrite prompt stops immediately. A cancelled `cancel` token stops
    /// the batch after cleaning up the in-flight file and any directory it
    /// leaves empty.
    pub async fn run_batch(
        &self,
        batch: &DownloadBatch,
        resolver: &mut dyn ConflictResolver,
        observer: &mut dyn DownloadObserver,
        cancel: &CancellationToken,
    ) -> BatchReport {
        let total = batch.files.len();
        let mut report = BatchReport::new(total);

        for (index, task) in batch.tasks().enumerate() {
            if cancel.is_cancelled() {
                Self::stop_interrupted(batch, None, observer, &mut report);
                break;
            }

            observer.file_started(index + 1, total, &task);

            if let Ok(meta) = std::fs::metadata(&task.destination) {
                observer.existing_file(&task.destination, meta.len());
                let choice = resolver.resolve(&task.destination, meta.len());

                // Ctrl+C while the prompt was open; the existing file stays.
                if cancel.is_cancelled() {
                    Self::stop_interrupted(batch, None, observer, &mut report);
                    break;
                }

                match choice {
                    ConflictChoice::CancelAll => {
                        observer.batch_cancelled();
                        report.stop = Some(BatchStop::Cancelled);
                        break;
                    }
                    ConflictChoice::Skip => {
                        Self::record(&mut report, observer, &task, DownloadOutcome::Skipped);
                        continue;
                    }
                    ConflictChoice::Overwrite => {
                        if let Err(e) = std::fs::remove_file(&task.destination) {
                            let reason = format!("Failed to delete existing file: {e}");
                            Self::record(&mut report, observer, &task, DownloadOutcome::Failed(reason));
                            continue;
                        }
                        observer.overwriting(&task.destination);
                    }
                }
            }

            match self.download_one(&task, observer, cancel).await {
                Ok(bytes) => {
                    tracing::debug!(path = %task.destination.display(), bytes, "Download complete");
                    Self::record(&mut report, observer, &task, DownloadOutcome::Success);
                }
                Err(DownloadError::Cancelled) => {
                    Self::stop_interrupted(batch, Some(&task), observer, &mut report);
                    break;
                }
                Err(e) => {
                    remove_partial_file(&task.destination);
                    Self::record(&mut report, observer, &task, DownloadOutcome::Failed(e.to_string()));
                }
            }
        }

        report
    }

    async fn download_one(
        &self,
        task: &DownloadTask,
        observer: &mut dyn DownloadObserver,
        cancel: &CancellationToken,
    ) -> Result<u64, DownloadError> {
        let url = build_download_url(&self.endpoint, &task.source_repo, &task.remote_path)?;

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DownloadError::Cancelled),
            response = get_following_redirect(&self.transport, &url, self.token.as_deref()) => response?,
        };

        observer.transfer_started(task.expected_size);
        let result = stream_to_file(
            response.body,
            &task.destination,
            task.expected_size,
            observer,
            cancel,
            RedrawThrottle::new(REDRAW_INTERVAL),
        )
        .await;
        observer.transfer_finished();
        result
    }

    fn record(
        report: &mut BatchReport,
        observer: &mut dyn DownloadObserver,
        task: &DownloadTask,
        outcome: DownloadOutcome,
    ) {
        observer.file_finished(task, &outcome);
        report.files.push(FileReport {
            remote_path: task.remote_path.clone(),
            destination: task.destination.clone(),
            outcome,
        });
    }

    fn stop_interrupted(
        batch: &DownloadBatch,
        current: Option<&DownloadTask>,
        observer: &mut dyn DownloadObserver,
        report: &mut BatchReport,
    ) {
        let cleanup = cleanup_after_interrupt(
            current.map(|task| task.destination.as_path()),
            &batch.target_dir,
            &batch.base_dir,
            batch.strategy,
        );
        observer.interrupted(&cleanup);
        report.stop = Some(BatchStop::Interrupted);
    }
}
