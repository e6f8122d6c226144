//! Streaming a response body to disk.

use std::path::Path;
use std::time::Instant;

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;

use crate::error::DownloadError;
use crate::progress::{DownloadObserver, ProgressSnapshot, RedrawThrottle};
use crate::transport::ByteStream;

/// Write `body` to `destination`, reporting progress against
/// `expected_size`.
///
/// Every chunk read is raced against `cancel`. Progress is only reported
/// when the expected size is known and non-zero; redraws go through
/// `throttle` except for the final one. Returns the byte count.
pub async fn stream_to_file(
    mut body: ByteStream,
    destination: &Path,
    expected_size: Option<u64>,
    observer: &mut dyn DownloadObserver,
    cancel: &CancellationToken,
    mut throttle: RedrawThrottle,
) -> Result<u64, DownloadError> {
    let mut file = File::create(destination)
        .await
        .map_err(|e| DownloadError::io(destination, &e))?;

    let total = expected_size.filter(|size| *size > 0);
    let started = Instant::now();
    let mut downloaded: u64 = 0;

    loop {
        let next = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DownloadError::Cancelled),
            next = body.next() => next,
        };
        let Some(chunk) = next else { break };
        let chunk = chunk?;

        file.write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(destination, &e))?;
        downloaded += chunk.len() as u64;

        if let Some(total) = total
            && throttle.should_draw()
        {
            observer.progress(&ProgressSnapshot::compute(downloaded, total, started.elapsed()));
        }
    }

    file.flush()
        .await
        .map_err(|e| DownloadError::io(destination, &e))?;

    if let Some(total) = total {
        observer.progress(&ProgressSnapshot::compute(downloaded, total, started.elapsed()));
    }

    Ok(downloaded)
}
