//! CLI composition root.
//!
//! The only place where settings, the catalog client and the download
//! transport are wired together. Handlers receive a ready [`CliContext`].

use std::env;

use hfget_core::{CoreError, Settings, SettingsStore, TOKEN_ENV};
use hfget_download::{Downloader, ReqwestTransport};
use hfget_hf::{DEFAULT_ENDPOINT, DefaultHfClient, ENDPOINT_ENV, HfClientConfig};
use url::Url;

use crate::error::CliError;

/// Everything the wizard needs for one run.
pub struct CliContext {
    pub store: SettingsStore,
    pub settings: Settings,
    pub catalog: DefaultHfClient,
    pub downloader: Downloader<ReqwestTransport>,
}

/// Hub endpoint from `HF_ENDPOINT`, else the public Hub.
fn resolve_endpoint(env_value: Option<String>) -> Result<Url, CliError> {
    let raw = env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Url::parse(&raw).map_err(|e| CliError::Setup(format!("Invalid {ENDPOINT_ENV} '{raw}': {e}")))
}

/// Load settings once, resolve the token and build the clients.
///
/// Fails with [`CoreError::AuthMissing`] when neither the settings file nor
/// `HF_TOKEN` provides a token.
pub fn bootstrap(store: SettingsStore) -> Result<CliContext, CliError> {
    let settings = store.load();
    let token = settings
        .resolve_token(env::var(TOKEN_ENV).ok())
        .ok_or(CoreError::AuthMissing)?;
    let endpoint = resolve_endpoint(env::var(ENDPOINT_ENV).ok())?;

    let config = HfClientConfig::new()
        .with_endpoint(endpoint.as_str().trim_end_matches('/'))
        .with_token(token.clone());
    let catalog = DefaultHfClient::new(&config).map_err(|e| CliError::Setup(e.to_string()))?;

    let transport = ReqwestTransport::new().map_err(|e| CliError::Setup(e.to_string()))?;
    let downloader = Downloader::new(transport, endpoint).with_token(Some(token));

    tracing::debug!(
        config = %store.path().display(),
        strategy = %settings.storage_strategy(),
        "CLI context ready"
    );

    Ok(CliContext {
        store,
        settings,
        catalog,
        downloader,
    })
}
