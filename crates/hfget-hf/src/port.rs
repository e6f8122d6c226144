//! [`CatalogPort`] implementation for `HfClient`.

use async_trait::async_trait;
use hfget_core::{CatalogError, CatalogPort, CatalogResult, FileEntry, RepositorySummary};

use crate::client::HfClient;
use crate::error::HfError;
use crate::http::HttpBackend;

/// Convert internal `HfError` to [`CatalogError`].
fn map_error(err: HfError, repo: &str) -> CatalogError {
    match err {
        HfError::ApiRequestFailed { status, url } => match status {
            404 => CatalogError::NotFound {
                repo: repo.to_string(),
            },
            401 | 403 => CatalogError::AuthRequired {
                repo: repo.to_string(),
            },
            429 => CatalogError::RateLimited,
            _ => CatalogError::Network {
                message: format!("API request failed with status {status}: {url}"),
            },
        },
        HfError::RepoNotFound { repo } => CatalogError::NotFound { repo },
        HfError::InvalidResponse { message } => CatalogError::InvalidResponse { message },
        HfError::Network(e) => CatalogError::Network {
            message: e.to_string(),
        },
        HfError::InvalidUrl(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
        HfError::JsonParse(e) => CatalogError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend> CatalogPort for HfClient<B> {
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<RepositorySummary>> {
        self.search_repositories(query, limit)
            .await
            .map_err(|e| map_error(e, query))
    }

    async fn list_files(&self, repo: &str) -> CatalogResult<Vec<FileEntry>> {
        self.list_repository_files(repo)
            .await
            .map_err(|e| map_error(e, repo))
    }

    async fn fetch_metadata(&self, repo: &str) -> CatalogResult<()> {
        self.get_model_info(repo)
            .await
            .map(|_| ())
            .map_err(|e| map_error(e, repo))
    }
}
