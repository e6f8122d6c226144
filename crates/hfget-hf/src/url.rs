//! URL construction helpers for the `HuggingFace` API.

use url::Url;

use crate::models::HfConfig;

/// Upper bound the Hub accepts for `limit`.
const MAX_SEARCH_LIMIT: u32 = 100;

/// `{endpoint}/api/models` with any base path on the endpoint preserved.
fn api_models_url(config: &HfConfig, suffix: &str) -> Url {
    let mut url = config.endpoint.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/api/models{suffix}"));
    url.set_query(None);
    url
}

/// Build a search URL: `?search=<query>&limit=<n>`.
pub fn build_search_url(config: &HfConfig, query: &str, limit: u32) -> Url {
    let mut url = api_models_url(config, "");
    url.set_query(Some(&format!(
        "search={}&limit={}",
        urlencoding::encode(query.trim()),
        limit.clamp(1, MAX_SEARCH_LIMIT)
    )));
    url
}

/// Build a URL for the repository tree endpoint.
pub fn build_tree_url(config: &HfConfig, repo: &str, path: Option<&str>) -> Url {
    let suffix = path.map_or_else(
        || format!("/{repo}/tree/main"),
        |p| format!("/{repo}/tree/main/{p}"),
    );
    api_models_url(config, &suffix)
}

/// Build a URL for the model info endpoint.
pub fn build_model_info_url(config: &HfConfig, repo: &str) -> Url {
    api_models_url(config, &format!("/{repo}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_at(endpoint: &str) -> HfConfig {
        HfConfig {
            endpoint: Url::parse(endpoint).unwrap(),
        }
    }

    #[test]
    fn test_build_search_url() {
        let url = build_search_url(&HfConfig::default(), "llama 2", 20);
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models?search=llama%202&limit=20"
        );
    }

    #[test]
    fn test_build_search_url_clamps_limit() {
        let config = HfConfig::default();
        assert!(build_search_url(&config, "x", 999).as_str().ends_with("limit=100"));
        assert!(build_search_url(&config, "x", 0).as_str().ends_with("limit=1"));
    }

    #[test]
    fn test_build_tree_url_root() {
        let url = build_tree_url(&HfConfig::default(), "TheBloke/Llama-2-7B-GGUF", None);
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models/TheBloke/Llama-2-7B-GGUF/tree/main"
        );
    }

    #[test]
    fn test_build_tree_url_subdir() {
        let url = build_tree_url(&HfConfig::default(), "TheBloke/Llama-2-7B-GGUF", Some("Q4_K_M"));
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models/TheBloke/Llama-2-7B-GGUF/tree/main/Q4_K_M"
        );
    }

    #[test]
    fn test_build_model_info_url() {
        let url = build_model_info_url(&HfConfig::default(), "TheBloke/Llama-2-7B-GGUF");
        assert_eq!(
            url.as_str(),
            "https://huggingface.co/api/models/TheBloke/Llama-2-7B-GGUF"
        );
    }

    #[test]
    fn test_endpoint_base_path_is_kept() {
        let config = config_at("http://localhost:9000/mirror/");
        let url = build_model_info_url(&config, "a/b");
        assert_eq!(url.as_str(), "http://localhost:9000/mirror/api/models/a/b");
    }
}
