//! Terminal rendering of a download batch.

use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::eta::{ProgressSnapshot, format_bytes};
use super::observer::DownloadObserver;
use crate::pipeline::{CleanupReport, DownloadOutcome, DownloadTask};

const BAR_TEMPLATE: &str = "{bar:40.cyan} {percent}% | {msg}";

/// Cancellation notice followed by whatever cleanup removed.
pub fn print_interrupt_notice(cleanup: &CleanupReport) {
    println!("{}", style("\n\nDownload cancelled by user.").yellow());
    if let Some(file) = &cleanup.removed_file {
        println!("{}", style(format!("Removed partial file: {}", file.display())).dim());
    }
    for dir in &cleanup.removed_dirs {
        println!("{}", style(format!("Removed empty directory: {}", dir.display())).dim());
    }
}

/// Prints per-file status lines and an indicatif bar in MB units.
#[derive(Default)]
pub struct TerminalObserver {
    bar: Option<ProgressBar>,
}

impl TerminalObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░")
    }

    fn clear_bar(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

impl DownloadObserver for TerminalObserver {
    fn file_started(&mut self, index: usize, total: usize, task: &DownloadTask) {
        println!(
            "{}",
            style(format!("\n[{index}/{total}] {}", task.file_name())).cyan()
        );
    }

    fn existing_file(&mut self, path: &Path, size: u64) {
        println!(
            "{}",
            style(format!("\n⚠ File already exists ({})", format_bytes(Some(size)))).yellow()
        );
        println!("{}", style(format!("  {}\n", path.display())).dim());
    }

    fn overwriting(&mut self, _path: &Path) {
        println!("{}", style("Overwriting existing file...\n").dim());
    }

    fn transfer_started(&mut self, total_bytes: Option<u64>) {
        let Some(total) = total_bytes.filter(|t| *t > 0) else {
            return;
        };
        let initial = ProgressSnapshot::initial(total);
        let bar = ProgressBar::with_draw_target(Some(initial.total_mb), ProgressDrawTarget::stdout());
        bar.set_style(Self::bar_style());
        bar.set_message(initial.stats_line());
        self.bar = Some(bar);
    }

    fn progress(&mut self, snapshot: &ProgressSnapshot) {
        if let Some(bar) = &self.bar {
            bar.set_position(snapshot.position_mb.min(snapshot.total_mb));
            bar.set_message(snapshot.stats_line());
        }
    }

    fn transfer_finished(&mut self) {
        self.clear_bar();
    }

    fn file_finished(&mut self, task: &DownloadTask, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Success => {
                println!(
                    "{}",
                    style(format!("✓ Saved → {}", task.destination.display())).green()
                );
            }
            DownloadOutcome::Skipped => println!("{}", style("Skipping file.\n").dim()),
            DownloadOutcome::Failed(reason) => {
                println!(
                    "{}",
                    style(format!("✗ Download failed: {}", task.remote_path)).red()
                );
                eprintln!("{reason}");
            }
        }
    }

    fn batch_cancelled(&mut self) {
        println!("{}", style("Downloads cancelled by user.").yellow());
    }

    fn interrupted(&mut self, cleanup: &CleanupReport) {
        self.clear_bar();
        print_interrupt_notice(cleanup);
    }
}
