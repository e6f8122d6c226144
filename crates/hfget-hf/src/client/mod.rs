//! `HuggingFace` client for searching repositories and listing files.

mod repo_files;
mod search;

use hfget_core::{CatalogError, CatalogResult};

use crate::config::HfClientConfig;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::HfConfig;

/// Default `HuggingFace` client using the reqwest HTTP backend.
pub type DefaultHfClient = HfClient<ReqwestBackend>;

/// Client for the `HuggingFace` Hub API, generic over its HTTP backend.
///
/// Use [`DefaultHfClient`] in production code and talk to it through
/// [`hfget_core::CatalogPort`].
pub struct HfClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: HfConfig,
}

impl DefaultHfClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the endpoint is not a valid URL or the HTTP client cannot
    /// be initialised.
    pub fn new(config: &HfClientConfig) -> CatalogResult<Self> {
        let internal = HfConfig::from_public(config).map_err(|e| CatalogError::InvalidResponse {
            message: format!("invalid endpoint '{}': {e}", config.endpoint),
        })?;
        let backend = ReqwestBackend::new(config).map_err(|e| CatalogError::Network {
            message: e.to_string(),
        })?;

        Ok(Self {
            backend,
            config: internal,
        })
    }
}

impl<B: HttpBackend> HfClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: HfConfig, backend: B) -> Self {
        Self { backend, config }
    }
}
