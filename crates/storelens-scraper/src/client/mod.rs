//! HTTP fetcher for storefront pages and JSON endpoints.

mod origin;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ScraperError;

pub use origin::{extract_store_origin, is_same_origin, resolve_link, subpage_url};

/// Per-request timeout applied when no explicit value is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const MAX_CONNECT_TIMEOUT_SECS: u64 = 10;

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8";

/// Single-shot HTTP fetcher shared by every page of a scrape.
///
/// Non-2xx responses are typed errors. There are no retries: one failed
/// request forfeits that page.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(
                timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS),
            ))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS, or timeout failure.
    pub async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self.send(url, HTML_ACCEPT).await?;
        Ok(response.text().await?)
    }

    /// Fetches `url`, returning `None` on any failure.
    ///
    /// This is the contract the extraction pipeline relies on: a missing
    /// page is an expected outcome, not an error.
    pub async fn fetch_text(&self, url: &str) -> Option<String> {
        match self.get_text(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::debug!(url, error = %e, "page unavailable");
                None
            }
        }
    }

    /// Fetches `url` and deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Same as [`PageFetcher::get_text`], plus [`ScraperError::Deserialize`]
    /// when the body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ScraperError> {
        let response = self.send(url, "application/json").await?;
        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: url.to_owned(),
            source: e,
        })
    }

    async fn send(&self, url: &str, accept: &str) -> Result<reqwest::Response, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;
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

        Ok(response)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
