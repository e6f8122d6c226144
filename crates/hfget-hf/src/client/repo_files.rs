//! Repository file listing and model-info pre-flight.

use hfget_core::FileEntry;
use serde_json::Value;

use crate::error::HfResult;
use crate::http::HttpBackend;
use crate::models::HfTreeEntry;
use crate::parsing::parse_tree_entries;
use crate::url::{build_model_info_url, build_tree_url};

use super::HfClient;

impl<B: HttpBackend> HfClient<B> {
    /// List one level of the repository tree.
    pub(crate) async fn list_tree(&self, repo: &str, path: Option<&str>) -> HfResult<Vec<HfTreeEntry>> {
        let url = build_tree_url(&self.config, repo, path);
        let json = self.backend.get_json(&url).await?;
        parse_tree_entries(&json)
    }

    /// List every file at the repository root and one directory level below.
    ///
    /// Quantized repositories often keep each variant in its own folder, so
    /// the immediate sub-directories are expanded. A sub-directory that fails
    /// to list is skipped.
    pub(crate) async fn list_repository_files(&self, repo: &str) -> HfResult<Vec<FileEntry>> {
        let mut files = Vec::new();

        for entry in self.list_tree(repo, None).await? {
            if !entry.is_directory() {
                files.push(FileEntry::new(entry.path, entry.size));
                continue;
            }

            match self.list_tree(repo, Some(&entry.path)).await {
                Ok(children) => files.extend(
                    children
                        .into_iter()
                        .filter(|child| !child.is_directory())
                        .map(|child| FileEntry::new(child.path, child.size)),
                ),
                Err(e) => {
                    tracing::debug!(repo, dir = %entry.path, error = %e, "Skipping unreadable directory");
                }
            }
        }

        Ok(files)
    }

    /// Fetch model info; used as an existence and access check.
    pub(crate) async fn get_model_info(&self, repo: &str) -> HfResult<Value> {
        let url = build_model_info_url(&self.config, repo);
        self.backend.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HfError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::models::HfConfig;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_repository_files_expands_subdirectories() {
        let backend = FakeBackend::new()
            .with_response(
                "tree/main/Q8_0",
                CannedResponse::ok(json!([
                    {"path": "Q8_0/model-Q8_0-00001-of-00002.gguf", "type": "file", "size": 5},
                    {"path": "Q8_0/model-Q8_0-00002-of-00002.gguf", "type": "file", "size": 6}
                ])),
            )
            .with_response(
                "tree/main",
                CannedResponse::ok(json!([
                    {"path": "README.md", "type": "file", "size": 1000},
                    {"path": "model.Q4_K_M.gguf", "type": "file", "size": 4_000_000_000_u64},
                    {"path": "Q8_0", "type": "directory"}
                ])),
            );
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let files = client.list_repository_files("TheBloke/Llama-2-7B-GGUF").await.unwrap();

        let paths: Vec<_> = files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "README.md",
                "model.Q4_K_M.gguf",
                "Q8_0/model-Q8_0-00001-of-00002.gguf",
                "Q8_0/model-Q8_0-00002-of-00002.gguf"
            ]
        );
        assert_eq!(files[1].size, Some(4_000_000_000));
    }

    #[tokio::test]
    async fn test_unreadable_subdirectory_is_skipped() {
        let backend = FakeBackend::new()
            .with_response("tree/main/locked", CannedResponse::status(403))
            .with_response(
                "tree/main",
                CannedResponse::ok(json!([
                    {"path": "model.gguf", "type": "file", "size": 1},
                    {"path": "locked", "type": "directory"}
                ])),
            );
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let files = client.list_repository_files("a/b").await.unwrap();
        assert_eq!(files, vec![FileEntry::new("model.gguf", Some(1))]);
    }

    #[tokio::test]
    async fn test_get_model_info_missing_repo() {
        let client = HfClient::with_backend(HfConfig::default(), FakeBackend::new());

        let result = client.get_model_info("owner/missing").await;
        assert!(matches!(result, Err(HfError::RepoNotFound { .. })));
    }
}
