//! HTTP transport for file downloads.
//!
//! [`HttpTransport`] issues exactly one GET and never follows redirects on
//! its own; [`get_following_redirect`] layers the single CDN hop on top.

mod client;
mod redirect;

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;
use url::Url;

use crate::error::DownloadError;

pub use client::ReqwestTransport;
pub(crate) use redirect::get_following_redirect;

/// Response body as a stream of chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, DownloadError>> + Send>>;

/// Status, redirect target and body of one GET.
pub struct TransportResponse {
    pub status: u16,
    /// Raw `Location` header, if present.
    pub location: Option<String>,
    pub body: ByteStream,
}

impl std::fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

/// Issues single, non-redirecting GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url`, sending `Authorization: Bearer <token>` when a token is
    /// given.
    async fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse, DownloadError>;
}
