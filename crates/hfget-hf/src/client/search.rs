//! Repository search.

use hfget_core::RepositorySummary;

use crate::error::HfResult;
use crate::http::HttpBackend;
use crate::parsing::parse_search_response;
use crate::url::build_search_url;

use super::HfClient;

impl<B: HttpBackend> HfClient<B> {
    /// Search repositories by free text, returning at most `limit` results
    /// in the order the Hub ranks them.
    pub(crate) async fn search_repositories(
        &self,
        query: &str,
        limit: u32,
    ) -> HfResult<Vec<RepositorySummary>> {
        let url = build_search_url(&self.config, query, limit);
        let json = self.backend.get_json(&url).await?;
        let mut repos = parse_search_response(&json)?;
        repos.truncate(limit.max(1) as usize);
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::models::HfConfig;
    use serde_json::json;
    use tokio_test::assert_ok;

    #[tokio::test]
    async fn test_search_returns_summaries() {
        let backend = FakeBackend::new().with_response(
            "search=llama",
            CannedResponse::ok(json!([
                {"id": "TheBloke/Llama-2-7B-GGUF", "likes": 10},
                {"id": "meta-llama/Llama-2-7b", "likes": 900}
            ])),
        );
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let repos = assert_ok!(client.search_repositories("llama", 20).await);

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "TheBloke/Llama-2-7B-GGUF");
        assert_eq!(repos[1].likes, 900);
        assert!(client.backend.requests()[0].contains("limit=20"));
    }

    #[tokio::test]
    async fn test_search_truncates_to_limit() {
        let backend = FakeBackend::new().with_response(
            "api/models?",
            CannedResponse::ok(json!([{"id": "a/1"}, {"id": "a/2"}, {"id": "a/3"}])),
        );
        let client = HfClient::with_backend(HfConfig::default(), backend);

        let repos = assert_ok!(client.search_repositories("a", 2).await);
        assert_eq!(repos.len(), 2);
    }

    #[tokio::test]
    async fn test_search_empty_result_is_not_an_error() {
        let backend =
            FakeBackend::new().with_response("search=", CannedResponse::ok(json!([])));
        let client = HfClient::with_backend(HfConfig::default(), backend);

        assert!(assert_ok!(client.search_repositories("nothing", 20).await).is_empty());
    }
}
