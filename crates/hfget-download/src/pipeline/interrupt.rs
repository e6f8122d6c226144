//! Ctrl+C handling.
//!
//! One listener serves the whole process. While a batch is registered, a
//! Ctrl+C cancels the batch token and waits a grace period for the runner
//! to clean up and unregister. A runner parked at a blocking prompt never
//! sees the token, so after the grace period the handler removes the
//! batch's empty directories itself. Existing files are never touched from
//! here. Outside a batch the caller decides what Ctrl+C means.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use hfget_core::StorageStrategy;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::DownloadBatch;
use super::cleanup::{CleanupReport, cleanup_after_interrupt};

/// How long the runner gets to stop by itself after Ctrl+C.
pub const INTERRUPT_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
struct ActiveBatch {
    cancel: CancellationToken,
    finished: CancellationToken,
    target_dir: PathBuf,
    base_dir: PathBuf,
    strategy: StorageStrategy,
}

/// What a Ctrl+C did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterruptAction {
    /// No batch was registered.
    Idle,
    /// The runner stopped and cleaned up within the grace period.
    Handled,
    /// The runner did not react; its directories were cleaned up here.
    ForcedCleanup(CleanupReport),
}

/// Registry of the batch currently being downloaded. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct Interrupts {
    active: Arc<Mutex<Option<ActiveBatch>>>,
}

impl Interrupts {
    pub fn new() -> Self {
        Self::default()
    }

    fn active(&self) -> MutexGuard<'_, Option<ActiveBatch>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `batch` until the returned session is dropped.
    ///
    /// One batch at a time; a second registration replaces the first.
    pub fn begin(&self, batch: &DownloadBatch) -> BatchSession {
        let active = ActiveBatch {
            cancel: CancellationToken::new(),
            finished: CancellationToken::new(),
            target_dir: batch.target_dir.clone(),
            base_dir: batch.base_dir.clone(),
            strategy: batch.strategy,
        };
        let session = BatchSession {
            registry: self.clone(),
            cancel: active.cancel.clone(),
            finished: active.finished.clone(),
        };
        *self.active() = Some(active);
        session
    }

    /// Cancel the registered batch, if any.
    pub fn cancel_active(&self) -> bool {
        match self.active().as_ref() {
            Some(active) => {
                active.cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// React to one Ctrl+C.
    pub async fn interrupt(&self, grace: Duration) -> InterruptAction {
        let Some(active) = self.active().clone() else {
            return InterruptAction::Idle;
        };

        active.cancel.cancel();
        if tokio::time::timeout(grace, active.finished.cancelled())
            .await
            .is_ok()
        {
            return InterruptAction::Handled;
        }

        tracing::debug!(
            target_dir = %active.target_dir.display(),
            "Download step did not stop in time, cleaning up from the interrupt handler"
        );
        InterruptAction::ForcedCleanup(cleanup_after_interrupt(
            None,
            &active.target_dir,
            &active.base_dir,
            active.strategy,
        ))
    }

    /// Spawn the process-wide Ctrl+C listener.
    ///
    /// `on_interrupt` runs on the listener task for every Ctrl+C. Must be
    /// called inside a multi-threaded tokio runtime so the listener keeps
    /// running while the main thread blocks on a prompt.
    pub fn listen<F>(&self, grace: Duration, mut on_interrupt: F) -> JoinHandle<()>
    where
        F: FnMut(InterruptAction) + Send + 'static,
    {
        let registry = self.clone();
        tokio::spawn(async move {
            loop {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "Could not listen for Ctrl+C");
                    return;
                }
                tracing::debug!("Interrupt received");
                on_interrupt(registry.interrupt(grace).await);
            }
        })
    }
}

/// A registered batch. Dropping it unregisters the batch and tells a
/// waiting interrupt handler that the runner is done.
#[derive(Debug)]
pub struct BatchSession {
    registry: Interrupts,
    cancel: CancellationToken,
    finished: CancellationToken,
}

impl BatchSession {
    /// Token cancelled by Ctrl+C.
    pub const fn token(&self) -> &CancellationToken {
        &self.cancel
    }
}

impl Drop for BatchSession {
    fn drop(&mut self) {
        self.registry.active().take();
        self.finished.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn organized_batch(base: &std::path::Path) -> DownloadBatch {
        let target_dir = base.join("owner").join("model");
        fs::create_dir_all(&target_dir).unwrap();
        DownloadBatch {
            repo: "owner/model".to_string(),
            files: Vec::new(),
            base_dir: base.to_path_buf(),
            target_dir,
            strategy: StorageStrategy::Organized,
        }
    }

    #[tokio::test]
    async fn test_interrupt_without_batch_is_idle() {
        let interrupts = Interrupts::new();
        assert_eq!(interrupts.interrupt(Duration::from_millis(10)).await, InterruptAction::Idle);
        assert!(!interrupts.cancel_active());
    }

    #[tokio::test]
    async fn test_runner_that_stops_in_time_is_left_alone() {
        let temp = tempdir().unwrap();
        let batch = organized_batch(temp.path());
        let interrupts = Interrupts::new();
        let session = interrupts.begin(&batch);
        let token = session.token().clone();

        let runner = tokio::spawn(async move {
            token.cancelled().await;
            drop(session);
        });

        let action = interrupts.interrupt(Duration::from_secs(5)).await;
        runner.await.unwrap();

        assert_eq!(action, InterruptAction::Handled);
        assert!(batch.target_dir.exists());
    }

    #[tokio::test]
    async fn test_pending_prompt_is_cleaned_up_by_the_handler() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("models");
        let batch = organized_batch(&base);
        let interrupts = Interrupts::new();
        // Held but never polled, like a runner blocked in read_line.
        let session = interrupts.begin(&batch);

        let action = interrupts.interrupt(Duration::from_millis(20)).await;

        assert!(session.token().is_cancelled());
        assert_eq!(
            action,
            InterruptAction::ForcedCleanup(CleanupReport {
                removed_file: None,
                removed_dirs: vec![batch.target_dir.clone(), base.join("owner")],
            })
        );
        assert!(base.exists());
    }

    #[tokio::test]
    async fn test_forced_cleanup_keeps_existing_files() {
        let temp = tempdir().unwrap();
        let batch = organized_batch(temp.path());
        fs::write(batch.target_dir.join("a.gguf"), b"old").unwrap();
        let interrupts = Interrupts::new();
        let _session = interrupts.begin(&batch);

        let action = interrupts.interrupt(Duration::from_millis(20)).await;

        assert_eq!(action, InterruptAction::ForcedCleanup(CleanupReport::default()));
        assert_eq!(fs::read(batch.target_dir.join("a.gguf")).unwrap(), b"old");
    }

    #[tokio::test]
    async fn test_dropped_session_unregisters() {
        let temp = tempdir().unwrap();
        let batch = organized_batch(temp.path());
        let interrupts = Interrupts::new();

        let session = interrupts.begin(&batch);
        assert!(interrupts.cancel_active());
        assert!(session.token().is_cancelled());
        drop(session);

        assert_eq!(interrupts.interrupt(Duration::from_millis(10)).await, InterruptAction::Idle);
    }
}
