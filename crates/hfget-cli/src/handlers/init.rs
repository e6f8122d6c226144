//! `hfget init`: create the settings file.

use console::style;
use hfget_core::{Settings, SettingsStore, StorageStrategy};

use crate::error::CliError;

/// Settings shown to the user as a template after `init`.
fn example_settings() -> Settings {
    Settings {
        token: Some("hf_xxxxxxxxxxxxx".to_string()),
        ..Settings::with_defaults()
    }
}

fn strategies_help() -> String {
    format!(
        "\nStorage strategies:\n  - \"{}\" (default): Store in owner/model subdirectories\n  - \"{}\": Store all files directly in download directory",
        StorageStrategy::Organized,
        StorageStrategy::Flat,
    )
}

/// Write the default settings file. Refuses to overwrite an existing one.
pub fn execute(store: &SettingsStore) -> Result<(), CliError> {
    store.initialize()?;

    println!(
        "{}",
        style(format!("✓ Config file created at: {}", store.path().display())).green()
    );
    println!("{}", style("\nEdit this file to set your HF_TOKEN and preferences.").dim());
    println!("{}", style("Example config:").dim());
    let example = serde_json::to_string_pretty(&example_settings())
        .map_err(|e| CliError::Setup(e.to_string()))?;
    println!("{}", style(example).cyan());
    println!("{}", style(strategies_help()).dim());
    Ok(())
}
