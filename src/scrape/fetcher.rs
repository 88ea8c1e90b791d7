//! HTTP fetching
//!
//! One client is built for the whole run. Fetches are strictly sequential
//! and any failure — connection error, timeout, or a non-success status — is
//! fatal for the run: this is a batch script, not a service, so there is no
//! retry and no skip.

use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("magpie-scrape/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client used for every fetch in a run
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as text
///
/// Non-2xx statuses are errors: a listing link that does not resolve to a
/// page aborts the run rather than being skipped. The textual URL
/// resolution can produce garbage from odd hrefs; an unparseable URL is a
/// fetch failure like any other.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let parsed: Url = url.parse().map_err(|source| ScrapeError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    tracing::debug!("Fetching {}", parsed);

    let response = client
        .get(parsed)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_page_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let body = fetch_page(&client, &format!("{}/page", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_page_error_status_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = format!("{}/missing", server.uri());
        let result = fetch_page(&client, &url).await;
        assert!(matches!(result, Err(ScrapeError::Http { .. })));
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_url_is_fatal() {
        let client = build_http_client().unwrap();
        let result = fetch_page(&client, "not a url").await;
        assert!(matches!(result, Err(ScrapeError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_fetch_page_connection_error_is_fatal() {
        let client = build_http_client().unwrap();
        // Nothing listens on this port
        let result = fetch_page(&client, "http://127.0.0.1:1/never").await;
        assert!(matches!(result, Err(ScrapeError::Http { .. })));
    }
}
