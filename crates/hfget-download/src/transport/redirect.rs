//! Single-hop redirect following.

use url::Url;

use super::{HttpTransport, TransportResponse};
use crate::error::DownloadError;

const fn is_followed_redirect(status: u16) -> bool {
    matches!(status, 301 | 302)
}

/// GET `url`, following one 301/302.
///
/// The redirect target is fetched without the bearer token; it is usually a
/// CDN on another host. A relative `Location` is resolved against `url`. A
/// second redirect, a redirect without `Location`, or a final non-2xx
/// status is an error.
pub async fn get_following_redirect<T>(
    transport: &T,
    url: &Url,
    bearer: Option<&str>,
) -> Result<TransportResponse, DownloadError>
where
    T: HttpTransport + ?Sized,
{
    let first = transport.get(url, bearer).await?;

    let (response, final_url) = if is_followed_redirect(first.status) {
        let location = first
            .location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| DownloadError::MissingLocation {
                url: url.to_string(),
            })?;
        let target = url.join(location.trim())?;
        tracing::debug!(from = %url, to = %target, "Following redirect");

        let second = transport.get(&target, None).await?;
        if is_followed_redirect(second.status) {
            return Err(DownloadError::TooManyRedirects {
                url: url.to_string(),
            });
        }
        (second, target)
    } else {
        (first, url.clone())
    };

    if !(200..300).contains(&response.status) {
        return Err(DownloadError::HttpStatus {
            status: response.status,
            url: final_url.to_string(),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::{Scripted, ScriptedTransport, SeenRequest};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_direct_success() {
        let transport = ScriptedTransport::new().route("/resolve/", Scripted::Body(vec![b"abc".to_vec()]));

        let response = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), Some("tok"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(transport.seen().len(), 1);
    }

    #[tokio::test]
    async fn test_redirect_is_followed_without_auth() {
        let transport = ScriptedTransport::new()
            .route("cdn.example", Scripted::Body(vec![b"abc".to_vec()]))
            .route(
                "/resolve/",
                Scripted::Redirect(302, Some("https://cdn.example/blob?sig=1".to_string())),
            );

        let response = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), Some("tok"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            transport.seen(),
            vec![
                SeenRequest {
                    url: "https://hub/a/b/resolve/main/f".to_string(),
                    bearer: Some("tok".to_string()),
                },
                SeenRequest {
                    url: "https://cdn.example/blob?sig=1".to_string(),
                    bearer: None,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_relative_location_is_resolved() {
        let transport = ScriptedTransport::new()
            .route("/blobs/", Scripted::Body(vec![]))
            .route("/resolve/", Scripted::Redirect(301, Some("/blobs/xyz".to_string())));

        get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), None)
            .await
            .unwrap();

        assert_eq!(transport.seen()[1].url, "https://hub/blobs/xyz");
    }

    #[tokio::test]
    async fn test_second_redirect_fails() {
        let transport = ScriptedTransport::new()
            .route("hop1", Scripted::Redirect(302, Some("https://hop2/".to_string())))
            .route("/resolve/", Scripted::Redirect(302, Some("https://hop1/".to_string())));

        let result = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), None).await;

        assert!(matches!(result, Err(DownloadError::TooManyRedirects { .. })));
        assert_eq!(transport.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_location_fails() {
        let transport = ScriptedTransport::new().route("/resolve/", Scripted::Redirect(302, None));

        let result = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), None).await;
        assert!(matches!(result, Err(DownloadError::MissingLocation { .. })));
    }

    #[tokio::test]
    async fn test_non_success_status_fails() {
        let transport = ScriptedTransport::new().route("/resolve/", Scripted::Status(401));

        let result = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), None).await;
        assert!(matches!(result, Err(DownloadError::HttpStatus { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_other_redirect_codes_are_not_followed() {
        let transport =
            ScriptedTransport::new().route("/resolve/", Scripted::Redirect(307, Some("https://x/".to_string())));

        let result = get_following_redirect(&transport, &url("https://hub/a/b/resolve/main/f"), None).await;
        assert!(matches!(result, Err(DownloadError::HttpStatus { status: 307, .. })));
        assert_eq!(transport.seen().len(), 1);
    }
}
