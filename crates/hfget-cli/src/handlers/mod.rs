//! Command handlers.

pub mod config;
pub mod init;

use hfget_core::{SettingsError, SettingsStore};

use crate::error::CliError;
use crate::parser::Commands;

/// Run a settings subcommand against the located settings file.
///
/// `config` never fails: when the location cannot be determined it says so
/// and returns normally.
pub fn execute(command: Commands, store: Result<SettingsStore, SettingsError>) -> Result<(), CliError> {
    match command {
        Commands::Init => init::execute(&store?),
        Commands::Config => {
            match store {
                Ok(store) => config::execute(&store),
                Err(e) => config::report_unlocated(&e),
            }
            Ok(())
        }
    }
}
