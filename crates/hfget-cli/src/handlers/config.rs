//! `hfget config`: show where the settings live and what they contain.

use console::style;
use hfget_core::{CONFIG_DIR_ENV, SettingsError, SettingsStore};

/// Print the settings path and, when the file exists, its parsed contents.
pub fn execute(store: &SettingsStore) {
    println!(
        "{}",
        style(format!("Config file location: {}", store.path().display())).cyan()
    );

    if !store.exists() {
        println!("{}", style("⚠ Config file does not exist").yellow());
        println!("{}", style("Run 'hfget init' to create it").dim());
        return;
    }

    println!("{}", style("✓ Config file exists").green());
    println!("{}", style("\nCurrent config:").dim());
    match serde_json::to_string_pretty(&store.load()) {
        Ok(json) => println!("{}", style(json).cyan()),
        Err(e) => tracing::warn!(error = %e, "Could not render config"),
    }
}

/// Explain why no settings location could be shown.
pub fn report_unlocated(err: &SettingsError) {
    eprintln!("{}", style(format!("✗ {err}")).red());
    println!(
        "{}",
        style(format!("Set {CONFIG_DIR_ENV} to choose a config directory")).dim()
    );
}
