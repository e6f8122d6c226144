//! Direct download URL construction.

use url::Url;

use crate::error::DownloadError;

/// Build `{endpoint}/{repo}/resolve/main/{path}`.
///
/// Every segment of the repository name and the file path is
/// percent-encoded on its own, so `/` keeps separating directories while
/// spaces, `#`, `?` and non-ASCII characters are escaped.
pub fn build_download_url(endpoint: &Url, repo: &str, file_path: &str) -> Result<Url, DownloadError> {
    if endpoint.cannot_be_a_base() {
        return Err(DownloadError::InvalidUrl(endpoint.to_string()));
    }

    let encoded: Vec<String> = repo
        .split('/')
        .chain(["resolve", "main"])
        .chain(file_path.split('/'))
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();

    let mut url = endpoint.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", encoded.join("/")));
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
