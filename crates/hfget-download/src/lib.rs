//! Sequential download pipeline.
//!
//! Given a repository and a list of selected files, the [`Downloader`]
//! resolves each file to a `resolve/main` URL, follows a single CDN
//! redirect, streams the body to disk and reports progress through a
//! [`DownloadObserver`]. Existing destinations go through a
//! [`ConflictResolver`]. Ctrl+C cancels the batch registered with
//! [`Interrupts`] through a [`CancellationToken`] and triggers partial-file
//! cleanup.
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken
#![deny(unused_crate_dependencies)]

mod error;
mod pipeline;
mod progress;
mod transport;
mod url;

pub use error::DownloadError;
pub use pipeline::{
    BatchReport, BatchStop, CleanupReport, ConflictChoice, ConflictResolver, DownloadBatch,
    BatchSession, DownloadOutcome, DownloadTask, Downloader, FileReport, INTERRUPT_GRACE,
    InterruptAction, Interrupts,
};
pub use progress::{
    DownloadObserver, NoopObserver, ProgressSnapshot, RedrawThrottle, TerminalObserver,
    format_bytes, print_interrupt_notice,
};
pub use transport::{ByteStream, HttpTransport, ReqwestTransport, TransportResponse};
pub use crate::url::build_download_url;
