//! Download step: directory layout, batch run, summary and retry.

use std::path::Path;

use console::style;
use hfget_core::{CoreError, FileEntry, ensure_target_dir, resolve_target_dir};
use hfget_download::{
    BatchStop, CleanupReport, ConflictChoice, ConflictResolver, DownloadBatch, HttpTransport,
    TerminalObserver, print_interrupt_notice,
};

use super::{Step, Wizard, WizardContext};
use crate::error::CliError;
use crate::utils::input::Prompter;

const CONFLICT_CHOICES: [&str; 3] = ["Skip this file", "Overwrite", "Cancel all downloads"];

/// Asks the user what to do with an existing destination file.
struct PromptResolver<'p> {
    prompter: &'p mut dyn Prompter,
}

impl ConflictResolver for PromptResolver<'_> {
    fn resolve(&mut self, _destination: &Path, _existing_size: u64) -> ConflictChoice {
        let choices = CONFLICT_CHOICES.map(String::from);
        match self.prompter.select("What would you like to do?", &choices) {
            Ok(0) => ConflictChoice::Skip,
            Ok(1) => ConflictChoice::Overwrite,
            Ok(_) => ConflictChoice::CancelAll,
            Err(e) => {
                tracing::debug!(error = %e, "Conflict prompt failed, cancelling batch");
                ConflictChoice::CancelAll
            }
        }
    }
}

/// Listing entries for the selected paths, keeping the selection order.
/// Paths missing from the listing are downloaded without a known size.
fn selected_entries(selected: &[String], listing: Option<&[FileEntry]>) -> Vec<FileEntry> {
    selected
        .iter()
        .map(|path| {
            listing
                .and_then(|files| files.iter().find(|f| &f.path == path))
                .cloned()
                .unwrap_or_else(|| FileEntry::new(path.clone(), None))
        })
        .collect()
}

impl<T: HttpTransport> Wizard<'_, T> {
    pub(super) async fn download(&mut self, context: &mut WizardContext) -> Result<Step, CliError> {
        let (Some(selected), Some(repo), Some(base_dir)) = (
            context.selected_files.clone(),
            context.selected_repo.clone(),
            context.output_dir.clone(),
        ) else {
            return Ok(Step::Search);
        };

        let strategy = self.settings.storage_strategy();
        let target_dir = resolve_target_dir(&base_dir, strategy, &repo);
        if let Err(e) = ensure_target_dir(&target_dir) {
            eprintln!(
                "{}",
                style(format!("Failed to create directory: {}", target_dir.display())).red()
            );
            eprintln!("{}", CoreError::from(e));
            return Ok(Step::OutputDir);
        }

        println!("{}", style(format!("\nStorage: {}", strategy.describe())).dim());
        println!("{}", style(format!("Target: {}\n", target_dir.display())).dim());

        let mut batch = DownloadBatch {
            files: selected_entries(&selected, context.weight_files.as_deref()),
            repo,
            base_dir,
            target_dir,
            strategy,
        };

        // Held across the retry prompt so Ctrl+C there still cleans up.
        let session = self.downloader.interrupts().begin(&batch);
        loop {
            let mut observer = TerminalObserver::new();
            let mut resolver = PromptResolver {
                prompter: &mut *self.prompter,
            };
            let report = self
                .downloader
                .run_batch(&batch, &mut resolver, &mut observer, session.token())
                .await;

            match report.stop {
                Some(BatchStop::Interrupted) => return Ok(Step::Interrupted),
                Some(BatchStop::Cancelled) => return Ok(Step::Quit),
                None => {}
            }

            println!("{}", style(format!("\n✓ {}", report.summary_line())).green());

            let failed = report.failed_paths();
            if failed.is_empty() {
                return Ok(Step::Quit);
            }

            println!(
                "{}",
                style(format!("\n✗ Failed to download {} files:", failed.len())).red()
            );
            for path in &failed {
                println!("{}", style(format!("  - {path}")).red());
            }

            let retry = self
                .prompter
                .confirm("Would you like to retry the failed downloads?", true)?;
            if session.token().is_cancelled() {
                print_interrupt_notice(&CleanupReport::default());
                return Ok(Step::Interrupted);
            }
            if !retry {
                return Ok(Step::Quit);
            }

            batch = batch.retaining(&failed);
            context.selected_files = Some(failed);
        }
    }
}
