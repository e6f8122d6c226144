//! Speed and ETA computation.
//!
//! Sizes are shown in MB of 1024 x 1024 bytes. The bar position is the
//! rounded-up MB count; speed and remaining time use the unrounded values.

use std::time::Duration;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Minimum elapsed time before a speed estimate is shown.
const WARMUP_SECS: f64 = 2.0;
/// Minimum MB transferred before a speed estimate is shown.
const WARMUP_MB: f64 = 5.0;
/// Remaining-time estimates at or above this are not shown.
const ETA_CEILING_SECS: f64 = 999_999.0;

pub const SPEED_PLACEHOLDER: &str = "0.0";
pub const ETA_PLACEHOLDER: &str = "calculating...";

#[allow(clippy::cast_precision_loss)]
fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_mb(mb: f64) -> u64 {
    mb.ceil().max(0.0) as u64
}

/// Rendered state of one transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Downloaded MB, rounded up.
    pub position_mb: u64,
    /// Expected MB, rounded up.
    pub total_mb: u64,
    /// MB/s with one decimal, or `"0.0"` while warming up.
    pub speed: String,
    /// `MM:SS`, or `"calculating..."` when no sensible estimate exists.
    pub eta: String,
}

impl ProgressSnapshot {
    /// State drawn before the first byte arrives.
    pub fn initial(total_bytes: u64) -> Self {
        Self {
            position_mb: 0,
            total_mb: ceil_mb(to_mb(total_bytes)),
            speed: SPEED_PLACEHOLDER.to_string(),
            eta: ETA_PLACEHOLDER.to_string(),
        }
    }

    /// Compute the snapshot after `downloaded_bytes` of `total_bytes` in
    /// `elapsed` wall-clock time.
    pub fn compute(downloaded_bytes: u64, total_bytes: u64, elapsed: Duration) -> Self {
        let downloaded_mb = to_mb(downloaded_bytes);
        let total_mb = to_mb(total_bytes);
        let elapsed_secs = elapsed.as_secs_f64();

        let mut speed = SPEED_PLACEHOLDER.to_string();
        let mut eta = ETA_PLACEHOLDER.to_string();

        if elapsed_secs > WARMUP_SECS && downloaded_mb > WARMUP_MB {
            let mb_per_sec = downloaded_mb / elapsed_secs;
            if mb_per_sec > 0.0 && mb_per_sec.is_finite() {
                speed = format!("{mb_per_sec:.1}");
                if let Some(formatted) = format_eta((total_mb - downloaded_mb) / mb_per_sec) {
                    eta = formatted;
                }
            }
        }

        Self {
            position_mb: ceil_mb(downloaded_mb),
            total_mb: ceil_mb(total_mb),
            speed,
            eta,
        }
    }

    /// Whole-number percentage of `position_mb` over `total_mb`.
    pub fn percentage(&self) -> u64 {
        if self.total_mb == 0 {
            return 0;
        }
        (self.position_mb.min(self.total_mb) * 100) / self.total_mb
    }

    /// `"<downloaded>/<total> MB | <speed> MB/s | ETA: <eta>"`.
    pub fn stats_line(&self) -> String {
        format!(
            "{}/{} MB | {} MB/s | ETA: {}",
            self.position_mb, self.total_mb, self.speed, self.eta
        )
    }
}

/// `MM:SS` for a remaining time in seconds; `None` when the value is not
/// finite, not positive or implausibly large.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_eta(remaining_secs: f64) -> Option<String> {
    if !remaining_secs.is_finite() || remaining_secs <= 0.0 || remaining_secs >= ETA_CEILING_SECS {
        return None;
    }
    let whole = remaining_secs.floor() as u64;
    Some(format!("{:02}:{:02}", whole / 60, whole % 60))
}

/// Human-readable size with 1024-based units and one decimal
/// (`"3.7 GB"`), or `"unknown"` for a missing or zero size.
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: Option<u64>) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let Some(bytes) = bytes.filter(|b| *b > 0) else {
        return "unknown".to_string();
    };

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
