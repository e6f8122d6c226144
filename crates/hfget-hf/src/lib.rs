//! `HuggingFace` Hub catalog client.
//!
//! Implements [`hfget_core::CatalogPort`] over the public Hub API:
//! repository search, file tree listing and the model-info pre-flight.
//! Consumers only see [`DefaultHfClient`] and [`HfClientConfig`]; response
//! types and HTTP plumbing stay internal.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultHfClient is meant to be used through the CatalogPort trait, not its
// internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;
mod url;

// Client
pub use client::DefaultHfClient;

// Configuration
pub use config::{DEFAULT_ENDPOINT, ENDPOINT_ENV, HfClientConfig};
