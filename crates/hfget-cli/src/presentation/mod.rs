//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no I/O beyond printing, no domain decisions.

pub mod banner;
pub mod choices;

pub use banner::{print_banner, print_missing_token, usage};
pub use choices::{file_choice_label, navigation_hint, repository_choice_label};
