//! Utility modules for CLI operations.

pub mod input;
