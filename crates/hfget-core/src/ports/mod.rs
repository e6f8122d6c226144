//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the wizard expects from infrastructure.
//! They use only domain types; the `HuggingFace` implementation lives in
//! `hfget-hf`.

mod catalog;

pub use catalog::{CatalogError, CatalogPort, CatalogResult};
