//! reqwest-backed transport.

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::header::{AUTHORIZATION, LOCATION, USER_AGENT};
use url::Url;

use super::{HttpTransport, TransportResponse};
use crate::error::DownloadError;

/// Production transport. Automatic redirects are disabled and no timeout is
/// set; large files may take hours.
pub struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, DownloadError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| DownloadError::Request(e.to_string()))?;

        Ok(Self {
            client,
            user_agent: concat!("hfget/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse, DownloadError> {
        let mut request = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, &self.user_agent);
        if let Some(token) = bearer {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        tracing::debug!(%url, auth = bearer.is_some(), "GET");
        let response = request
            .send()
            .await
            .map_err(|e| DownloadError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| DownloadError::Stream(e.to_string())));

        Ok(TransportResponse {
            status,
            location,
            body: Box::pin(body),
        })
    }
}
