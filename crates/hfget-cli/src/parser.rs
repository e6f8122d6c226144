//! Command-line arguments.
//!
//! Only `init` and `config` are subcommands; everything else runs the
//! wizard. `main` falls back to the wizard when parsing fails for any reason
//! other than help or version output.

use clap::{ArgAction, Parser, Subcommand};

/// Interactive HuggingFace model downloader.
#[derive(Debug, Parser)]
#[command(name = "hfget")]
#[command(about = "Search HuggingFace and download model weight files")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Show version number
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Create a new config file
    Init,
    /// Show config location and settings
    Config,
}
