//! Catalog client settings.

use std::time::Duration;

/// Hub host used for the API and for file downloads.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Environment variable overriding [`DEFAULT_ENDPOINT`] (mirrors, tests).
pub const ENDPOINT_ENV: &str = "HF_ENDPOINT";

/// Retries after a 5xx or connection failure.
pub(crate) const MAX_RETRIES: u8 = 3;

/// First backoff delay; doubled on every further retry.
pub(crate) const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

/// Where the catalog lives and how to authenticate against it.
///
/// ```
/// use hfget_hf::HfClientConfig;
///
/// let config = HfClientConfig::new()
///     .with_endpoint("https://hf-mirror.com")
///     .with_token("hf_xxx");
/// assert_eq!(config.endpoint(), "https://hf-mirror.com");
/// ```
#[derive(Debug, Clone)]
pub struct HfClientConfig {
    /// Hub host, without the `/api` suffix
    pub(crate) endpoint: String,
    pub(crate) user_agent: String,
    /// Bearer token; an empty string counts as none
    pub(crate) token: Option<String>,
}

impl Default for HfClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("hfget/", env!("CARGO_PKG_VERSION")).to_string(),
            token: None,
        }
    }
}

impl HfClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Token sent as `Authorization: Bearer` on every catalog request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_public_hub() {
        let config = HfClientConfig::new();
        assert_eq!(config.endpoint(), "https://huggingface.co");
        assert!(config.user_agent.starts_with("hfget/"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_endpoint_and_token_override() {
        let config = HfClientConfig::new()
            .with_endpoint("http://localhost:8080")
            .with_token("secret");

        assert_eq!(config.endpoint(), "http://localhost:8080");
        assert_eq!(config.token.as_deref(), Some("secret"));
    }
}
