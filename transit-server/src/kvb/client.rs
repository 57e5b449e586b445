//! HTTP client for the KVB website.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::scrape::ScrapeError;

/// Default base URL of the KVB website.
const DEFAULT_BASE_URL: &str = "http://www.kvb-koeln.de";

/// Fixed browser-like User-Agent sent with every request.
///
/// The site serves different (or no) markup to clients it does not
/// recognize as a browser. Policy constant, not configurable per call.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_9_3) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/34.0.1847.137 Safari/537.36";

/// Configuration for the KVB client.
#[derive(Debug, Clone)]
pub struct KvbConfig {
    /// Base URL of the website (overridable for testing).
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for KvbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl KvbConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for fetching pages from the KVB website.
#[derive(Debug, Clone)]
pub struct KvbClient {
    http: reqwest::Client,
    base_url: String,
}

impl KvbClient {
    /// Create a new client with the given configuration.
    pub fn new(config: KvbConfig) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch a page by site-relative path and return its body text.
    ///
    /// Non-2xx responses are errors; redirects and connection handling
    /// are reqwest's concern. No retries: failures propagate to the
    /// caller, which decides what a failed scrape means.
    pub async fn fetch_page(&self, path: &str) -> Result<String, ScrapeError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::UpstreamStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
