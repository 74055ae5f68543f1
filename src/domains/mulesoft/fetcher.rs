//! HTTP retrieval of documentation pages.
//!
//! [`Fetcher`] merges request headers, applies the timeout and parses the
//! body. The actual GET goes through a [`PageSource`], so scrapers can be
//! pointed at in-memory fixtures in tests.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::document::ParsedDocument;
use super::error::{FetchCause, FetchError};
use crate::core::config::MulesoftConfig;

/// Header name to value. Keys compare case-insensitively on merge.
pub type Headers = BTreeMap<String, String>;

/// Headers sent with every request unless overridden.
pub fn default_headers(user_agent: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert("User-Agent".to_string(), user_agent.to_string());
    headers
}

/// Merge `overrides` over `defaults`. An override replaces any default whose
/// name matches ignoring ASCII case.
pub fn merge_headers(defaults: &Headers, overrides: &Headers) -> Headers {
    let mut merged: Headers = defaults
        .iter()
        .filter(|(name, _)| {
            !overrides
                .keys()
                .any(|o| o.eq_ignore_ascii_case(name))
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// A single GET, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub url: String,
    pub headers: Headers,
    pub timeout: Duration,
}

/// Anything that can answer a GET with a page body.
pub trait PageSource: Send + Sync {
    fn get(&self, request: &PageRequest) -> Result<String, FetchError>;
}

/// Live source backed by a blocking `reqwest` client.
///
/// Must not be called from inside an async runtime worker; the tool layer
/// runs scrapes on their own thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpPageSource;

impl PageSource for HttpPageSource {
    fn get(&self, request: &PageRequest) -> Result<String, FetchError> {
        let url = request.url.as_str();

        let client = reqwest::blocking::Client::builder()
            .timeout(request.timeout)
            .build()
            .map_err(|e| FetchError::transport(url, e.to_string()))?;

        let mut builder = client.get(url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().map_err(|e| {
            let msg = if e.is_timeout() {
                format!("timed out after {}s", request.timeout.as_secs())
            } else {
                e.to_string()
            };
            FetchError::transport(url, msg)
        })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "Fetched page");
        if !status.is_success() {
            return Err(FetchError::status(url, status.as_u16()));
        }

        response
            .text()
            .map_err(|e| FetchError::new(url, FetchCause::Body(e.to_string())))
    }
}

/// Fetches and parses pages for a scraper.
#[derive(Clone)]
pub struct Fetcher {
    source: Arc<dyn PageSource>,
    headers: Headers,
    timeout: Duration,
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Fetcher {
    pub fn new(source: Arc<dyn PageSource>, config: &MulesoftConfig) -> Self {
        Self {
            source,
            headers: merge_headers(&default_headers(&config.user_agent), &config.extra_headers),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    /// Live fetcher for the given configuration.
    pub fn http(config: &MulesoftConfig) -> Self {
        Self::new(Arc::new(HttpPageSource), config)
    }

    /// GET `url` with the configured headers and timeout.
    pub fn fetch(&self, url: &str) -> Result<ParsedDocument, FetchError> {
        self.fetch_with(url, &Headers::new(), self.timeout)
    }

    /// GET `url` with extra header overrides and an explicit timeout.
    pub fn fetch_with(
        &self,
        url: &str,
        headers: &Headers,
        timeout: Duration,
    ) -> Result<ParsedDocument, FetchError> {
        let request = PageRequest {
            url: url.to_string(),
            headers: merge_headers(&self.headers, headers),
            timeout,
        };

        match self.source.get(&request) {
            Ok(body) => Ok(ParsedDocument::parse(&body)),
            Err(err) => {
                warn!(url, error = %err.cause, "Fetch failed");
                Err(err)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::FixtureSource;
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn headers(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_headers_override_wins() {
        let defaults = headers(&[("User-Agent", "browser"), ("Accept", "text/html")]);
        let overrides = headers(&[("user-agent", "custom")]);
        let merged = merge_headers(&defaults, &overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("user-agent").map(String::as_str), Some("custom"));
        assert!(!merged.contains_key("User-Agent"));
        assert_eq!(merged.get("Accept").map(String::as_str), Some("text/html"));
    }

    #[test]
    fn test_fetcher_sends_browser_user_agent() {
        let source = Arc::new(FixtureSource::new().page("https://d/p", "<p>hi</p>"));
        let fetcher = Fetcher::new(source.clone(), &MulesoftConfig::default());
        let doc = fetcher.fetch("https://d/p").unwrap();
        assert_eq!(doc.paragraphs().count(), 1);

        let sent = &source.requests()[0];
        assert!(sent.headers["User-Agent"].starts_with("Mozilla/5.0"));
        assert_eq!(sent.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_fetch_with_explicit_timeout() {
        let source = Arc::new(FixtureSource::new().page("https://d/p", ""));
        let fetcher = Fetcher::new(source.clone(), &MulesoftConfig::default());
        fetcher
            .fetch_with("https://d/p", &Headers::new(), Duration::from_secs(10))
            .unwrap();
        assert_eq!(source.requests()[0].timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_fixture_missing_page_is_status_error() {
        let fetcher = Fetcher::new(Arc::new(FixtureSource::new()), &MulesoftConfig::default());
        let err = fetcher.fetch("https://d/missing").unwrap_err();
        assert_eq!(err.cause, FetchCause::Status(404));
        assert_eq!(err.url, "https://d/missing");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_source_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/general/java-support"))
            .and(header("User-Agent", "test-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<table></table>"))
            .mount(&server)
            .await;

        let config = MulesoftConfig {
            user_agent: "test-agent".to_string(),
            ..MulesoftConfig::default()
        };
        let url = format!("{}/general/java-support", server.uri());
        // Parsed documents are not Send; count inside the blocking thread
        let tables = tokio::task::spawn_blocking(move || {
            Fetcher::http(&config).fetch(&url).map(|doc| doc.tables().count())
        })
        .await
        .unwrap()
        .unwrap();
        assert_eq!(tables, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_source_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let url = format!("{}/anything", server.uri());
        let err = tokio::task::spawn_blocking(move || {
            Fetcher::http(&MulesoftConfig::default()).fetch(&url).err()
        })
        .await
        .unwrap()
        .unwrap();
        assert_eq!(err.cause, FetchCause::Status(503));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_http_source_connection_refused() {
        let err = tokio::task::spawn_blocking(|| {
            Fetcher::http(&MulesoftConfig::default())
                .fetch("http://127.0.0.1:1/")
                .err()
        })
        .await
        .unwrap()
        .unwrap();
        assert!(matches!(err.cause, FetchCause::Transport(_)));
    }
}
