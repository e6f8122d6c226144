//! Interactive download wizard.
//!
//! A finite-state flow: search → select repository → select files → output
//! directory → download → (quit | retry). Each step reads the accumulated
//! [`WizardContext`], talks to the user through a [`Prompter`] and returns
//! the next [`Step`]. A step that finds its input missing sends the user
//! back to the step that produces it instead of failing.

mod download;
mod steps;


use std::path::PathBuf;

use hfget_core::{CatalogPort, FileEntry, RepositorySummary, Settings};
use hfget_download::{Downloader, HttpTransport};

use crate::error::CliError;
use crate::utils::input::Prompter;

/// Wizard states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Search,
    SelectRepo,
    SelectFiles,
    OutputDir,
    Download,
    Quit,
    /// Ctrl+C during the download step. Ends the run without the farewell.
    Interrupted,
}

/// Answers and results collected so far.
#[derive(Debug, Clone, Default)]
pub struct WizardContext {
    pub query: Option<String>,
    pub results: Option<Vec<RepositorySummary>>,
    pub selected_repo: Option<String>,
    /// Complete listing of the selected repository.
    pub files: Option<Vec<FileEntry>>,
    /// Listing filtered to weight files.
    pub weight_files: Option<Vec<FileEntry>>,
    /// Remote paths to download, in selection order.
    pub selected_files: Option<Vec<String>>,
    /// Base directory typed at the output prompt.
    pub output_dir: Option<PathBuf>,
}

/// How the wizard ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Finished,
    Interrupted,
}

/// Drives the steps against the catalog, downloader and prompter.
pub struct Wizard<'a, T: HttpTransport> {
    catalog: &'a dyn CatalogPort,
    downloader: &'a Downloader<T>,
    settings: &'a Settings,
    prompter: &'a mut dyn Prompter,
}

impl<'a, T: HttpTransport> Wizard<'a, T> {
    pub fn new(
        catalog: &'a dyn CatalogPort,
        downloader: &'a Downloader<T>,
        settings: &'a Settings,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            catalog,
            downloader,
            settings,
            prompter,
        }
    }

    /// Run from the search prompt until the user quits or interrupts.
    pub async fn run(&mut self) -> Result<WizardOutcome, CliError> {
        let mut context = WizardContext::default();
        let mut step = Step::Search;

        loop {
            tracing::debug!(?step, "Wizard step");
            step = match step {
                Step::Search => self.search(&mut context).await?,
                Step::SelectRepo => self.select_repo(&mut context).await?,
                Step::SelectFiles => self.select_files(&mut context)?,
                Step::OutputDir => self.output_dir(&mut context)?,
                Step::Download => self.download(&mut context).await?,
                Step::Quit => return Ok(WizardOutcome::Finished),
                Step::Interrupted => return Ok(WizardOutcome::Interrupted),
            };
        }
    }
}
