//! HTTP fetching with failure-as-empty semantics.
//!
//! A fetch failure (transport error or non-2xx status) is terminal for that
//! URL within a run: it is logged with the offending URL and reported as an
//! empty-content [`FetchResult`] instead of an error. There are no retries.

use crate::config::Config;
use crate::error::Result;
use std::time::Duration;
use tracing::{debug, error};

/// Outcome of a single fetch
///
/// Empty `content` means the fetch failed; the error has already been logged
/// and no output files should be written for this URL.
#[derive(Clone, Debug)]
pub struct FetchResult {
    /// The URL that was requested
    pub url: String,
    /// Response body, or empty on failure
    pub content: String,
}

impl FetchResult {
    /// Whether this fetch failed (empty body)
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// HTTP fetcher shared by all fetch tasks in a run
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher with the configured timeout and user agent
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a single URL, returning its body paired with the URL
    ///
    /// Never fails: any transport error or non-success status is logged and
    /// converted to empty content.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let content = match self.get_text(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched");
                body
            }
            Err(e) => {
                if e.is_timeout() {
                    error!(url, "fetch timed out: {}", e);
                } else if e.is_connect() {
                    error!(url, "connection failed: {}", e);
                } else {
                    error!(url, "failed to fetch: {}", e);
                }
                String::new()
            }
        };

        FetchResult {
            url: url.to_string(),
            content,
        }
    }

    async fn get_text(&self, url: &str) -> std::result::Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.text().await
    }
}
