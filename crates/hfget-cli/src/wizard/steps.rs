//! Search and selection steps.

use std::path::PathBuf;

use console::style;
use hfget_core::{CatalogError, CoreError, WEIGHT_FILE_EXTENSIONS, filter_weight_files};
use hfget_download::HttpTransport;

use super::{Step, Wizard, WizardContext};
use crate::error::CliError;
use crate::presentation::{file_choice_label, navigation_hint, repository_choice_label};

/// Print a failed catalog call. Only fatal errors leave the wizard.
pub(super) fn report_catalog_failure(label: &str, err: CatalogError) -> Result<(), CliError> {
    let err = CoreError::from(err);
    println!("{}", style(label).red());
    eprintln!("{err}");
    if err.is_fatal() {
        return Err(err.into());
    }
    Ok(())
}

fn no_weight_files_message() -> String {
    let extensions: Vec<String> = WEIGHT_FILE_EXTENSIONS.iter().map(|e| format!(".{e}")).collect();
    format!("No weight files found ({}).", extensions.join(", "))
}

impl<T: HttpTransport> Wizard<'_, T> {
    pub(super) async fn search(&mut self, context: &mut WizardContext) -> Result<Step, CliError> {
        println!("\n{}", navigation_hint(false));

        let query = loop {
            let answer = self.prompter.input("Search models on HuggingFace:", None)?;
            if !answer.is_empty() {
                break answer;
            }
            println!("{}", style(">> Enter a search query").red());
        };

        println!("{}", style(format!("Searching for \"{query}\"...")).dim());
        let results = self.catalog.search(&query, self.settings.search_limit()).await;
        context.query = Some(query);

        match results {
            Err(e) => {
                report_catalog_failure("✗ Search failed.", e)?;
                Ok(Step::Search)
            }
            Ok(models) if models.is_empty() => {
                println!("{}", style("No models found.").yellow());
                Ok(Step::Search)
            }
            Ok(models) => {
                println!("{}", style(format!("✓ Found {} models.", models.len())).green());
                context.results = Some(models);
                Ok(Step::SelectRepo)
            }
        }
    }

    pub(super) async fn select_repo(&mut self, context: &mut WizardContext) -> Result<Step, CliError> {
        let Some(results) = context.results.as_ref() else {
            return Ok(Step::Search);
        };

        println!("\n{}", navigation_hint(false));
        println!("{}", style(format!("Found {} models\n", results.len())).dim());

        let labels: Vec<String> = results.iter().map(repository_choice_label).collect();
        let index = self.prompter.select("Select a repository:", &labels)?;
        let Some(repo) = results.get(index).map(|r| r.name.clone()) else {
            return Ok(Step::SelectRepo);
        };

        context.selected_repo = Some(repo.clone());
        context.files = None;
        context.weight_files = None;
        context.selected_files = None;

        println!("{}", style(format!("Fetching files for {repo}...")).dim());
        if let Err(e) = self.catalog.fetch_metadata(&repo).await {
            report_catalog_failure("✗ Failed to fetch model info.", e)?;
            return Ok(Step::SelectRepo);
        }
        println!("{}", style("✓ Got model info.").green());

        let files = match self.catalog.list_files(&repo).await {
            Ok(files) => files,
            Err(e) => {
                report_catalog_failure("✗ Failed to list files.", e)?;
                return Ok(Step::SelectRepo);
            }
        };

        let weights = filter_weight_files(&files);
        if weights.is_empty() {
            println!("{}", style(no_weight_files_message()).yellow());
            return Ok(Step::SelectRepo);
        }

        context.files = Some(files);
        context.weight_files = Some(weights);
        Ok(Step::SelectFiles)
    }

    pub(super) fn select_files(&mut self, context: &mut WizardContext) -> Result<Step, CliError> {
        let Some(weights) = context.weight_files.as_ref() else {
            return Ok(Step::SelectRepo);
        };

        println!("\n{}", navigation_hint(true));
        println!("{}", style(format!("Found {} files\n", weights.len())).dim());

        let labels: Vec<String> = weights.iter().map(file_choice_label).collect();
        let indices = self.prompter.multi_select("Select files to download:", &labels)?;
        let selected: Vec<String> = indices
            .iter()
            .filter_map(|&i| weights.get(i))
            .map(|f| f.path.clone())
            .collect();

        if selected.is_empty() {
            return Ok(Step::SelectFiles);
        }
        context.selected_files = Some(selected);
        Ok(Step::OutputDir)
    }

    pub(super) fn output_dir(&mut self, context: &mut WizardContext) -> Result<Step, CliError> {
        println!("\n{}", navigation_hint(false));
        if let Some(selected) = &context.selected_files
            && selected.len() > 1
        {
            println!("{}", style(format!("Selected {} files\n", selected.len())).dim());
        }

        let default_dir = self.settings.download_dir();
        let answer = self
            .prompter
            .input("Download directory:", Some(&default_dir.to_string_lossy()))?;

        context.output_dir = Some(if answer.is_empty() {
            default_dir
        } else {
            PathBuf::from(answer)
        });
        Ok(Step::Download)
    }
}
