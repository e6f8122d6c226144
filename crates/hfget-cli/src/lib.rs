//! Interactive `HuggingFace` model downloader.
//!
//! Argument parsing, the `init`/`config` settings commands and the
//! search-select-download wizard. The `hfget` binary in `main.rs` is a thin
//! shell around [`bootstrap`] and [`Wizard`].
#![deny(unused_crate_dependencies)]

// Only used by the binary target
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;
pub mod wizard;

pub use bootstrap::{CliContext, bootstrap};
pub use error::CliError;
pub use parser::{Cli, Commands};
pub use wizard::{Wizard, WizardOutcome};
