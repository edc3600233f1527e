use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::retry::retry_with_fixed_delay;

/// Query parameter that defeats intermediate caches.
const NOCACHE_PARAM: &str = "_nocache";

/// HTTP client for the price pages.
///
/// Every request asks caches for a fresh copy: `Cache-Control` and `Pragma`
/// headers are set to `no-cache`, and a `_nocache=<unix seconds>` query
/// parameter is appended to the URL. Transport errors and non-2xx statuses
/// other than 404 are retried with a fixed delay.
pub struct PageClient {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Pause between attempts, in milliseconds.
    retry_delay_ms: u64,
}

impl PageClient {
    /// Creates a `PageClient` with configured timeout, `User-Agent`, and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, ScraperError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidUrl`]: `url` is not an absolute URL (not retried).
    /// - [`ScraperError::NotFound`]: HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status after
    ///   all retries are exhausted.
    /// - [`ScraperError::Http`]: network or TLS failure after all retries
    ///   are exhausted.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScraperError> {
        retry_with_fixed_delay(self.max_retries, self.retry_delay_ms, || async move {
            // Fresh timestamp per attempt.
            let request_url = nocache_url(url, chrono::Utc::now().timestamp())?;
            tracing::debug!(url = %request_url, "fetching page");

            let response = self.client.get(request_url).send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ScraperError::NotFound {
                    url: url.to_owned(),
                });
            }
            if !status.is_success() {
                return Err(ScraperError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_owned(),
                });
            }

            Ok(response.text().await?)
        })
        .await
    }
}

/// Appends the cache-busting parameter to `url`, keeping any existing query.
pub(crate) fn nocache_url(url: &str, unix_secs: i64) -> Result<Url, ScraperError> {
    let mut parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    parsed
        .query_pairs_mut()
        .append_pair(NOCACHE_PARAM, &unix_secs.to_string());
    Ok(parsed)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
