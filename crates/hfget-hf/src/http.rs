//! HTTP backend abstraction for the `HuggingFace` API.
//!
//! The production backend retries transient failures with exponential
//! backoff; tests swap in [`testing::FakeBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use url::Url;

use crate::config::{HfClientConfig, MAX_RETRIES, RETRY_BASE_DELAY};
use crate::error::{HfError, HfResult};

/// Fetches JSON documents from the Hub.
///
/// This is an implementation detail - external code should use the
/// `CatalogPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch a URL and parse the body as JSON.
    async fn get_json(&self, url: &Url) -> HfResult<Value>;
}

/// Production HTTP backend using reqwest with retry logic.
///
/// Server errors (5xx) and connection failures are retried; everything else
/// fails on the first attempt.
pub struct ReqwestBackend {
    client: reqwest::Client,
    user_agent: String,
    max_retries: u8,
    retry_base_delay_ms: u64,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    pub fn new(config: &HfClientConfig) -> HfResult<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            user_agent: config.user_agent.clone(),
            max_retries: MAX_RETRIES,
            #[allow(clippy::cast_possible_truncation)]
            retry_base_delay_ms: RETRY_BASE_DELAY.as_millis() as u64,
            auth_token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, &self.user_agent);
        if let Some(ref token) = self.auth_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        request
    }

    /// Fetch a URL with automatic retry for transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> HfResult<reqwest::Response> {
        let mut last_error: Option<HfError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = Duration::from_millis(
                    self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1),
                );
                tracing::debug!(%url, attempt, ?delay, "Retrying catalog request");
                tokio::time::sleep(delay).await;
            }

            match self.build_request(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(HfError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    if status == StatusCode::NOT_FOUND
                        && let Some(repo) = extract_repo_from_path(url.path())
                    {
                        return Err(HfError::RepoNotFound { repo });
                    }

                    return Err(HfError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| HfError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// Extract `owner/name` from an `/api/models/owner/name/...` path.
pub fn extract_repo_from_path(path: &str) -> Option<String> {
    let rest = path.trim_start_matches('/').strip_prefix("api/models/")?;
    let mut parts = rest.splitn(3, '/');
    match (parts.next(), parts.next()) {
        (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
            Some(format!("{owner}/{name}"))
        }
        _ => None,
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json(&self, url: &Url) -> HfResult<Value> {
        tracing::debug!(%url, "GET");
        let response = self.fetch_with_retry(url).await?;
        let data: Value = response.json().await?;
        Ok(data)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_repo_from_path() {
        assert_eq!(
            extract_repo_from_path("/api/models/TheBloke/Llama-2-7B-GGUF"),
            Some("TheBloke/Llama-2-7B-GGUF".to_string())
        );
        assert_eq!(
            extract_repo_from_path("/api/models/TheBloke/Llama-2-7B-GGUF/tree/main/Q4_K_M"),
            Some("TheBloke/Llama-2-7B-GGUF".to_string())
        );
        assert_eq!(extract_repo_from_path("/api/models"), None);
        assert_eq!(extract_repo_from_path("/api/models/solo"), None);
        assert_eq!(extract_repo_from_path("/other/path"), None);
    }

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&HfClientConfig::default()).unwrap();
        assert_eq!(backend.max_retries, 3);
        assert_eq!(backend.retry_base_delay_ms, 500);
        assert!(backend.auth_token.is_none());
    }

    #[test]
    fn test_reqwest_backend_ignores_empty_token() {
        let backend = ReqwestBackend::new(&HfClientConfig::new().with_token("")).unwrap();
        assert!(backend.auth_token.is_none());

        let backend = ReqwestBackend::new(&HfClientConfig::new().with_token("hf_x")).unwrap();
        assert_eq!(backend.auth_token.as_deref(), Some("hf_x"));
    }

    #[tokio::test]
    async fn test_fake_backend_returns_canned_response() {
        let backend = FakeBackend::new()
            .with_response("test-model", CannedResponse::ok(json!({"id": "test-model"})));

        let url = Url::parse("https://example.com/api/test-model").unwrap();
        let result = backend.get_json(&url).await.unwrap();

        assert_eq!(result["id"], "test-model");
        assert_eq!(backend.requests(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_fake_backend_maps_unknown_repo_to_not_found() {
        let backend = FakeBackend::new();
        let url = Url::parse("https://example.com/api/models/owner/missing").unwrap();

        let result = backend.get_json(&url).await;
        assert!(matches!(result, Err(HfError::RepoNotFound { ref repo }) if repo == "owner/missing"));
    }

    #[tokio::test]
    async fn test_fake_backend_status_response() {
        let backend = FakeBackend::new().with_response("private", CannedResponse::status(401));
        let url = Url::parse("https://example.com/api/models/org/private").unwrap();

        let result = backend.get_json(&url).await;
        assert!(matches!(
            result,
            Err(HfError::ApiRequestFailed { status: 401, .. })
        ));
    }
}
