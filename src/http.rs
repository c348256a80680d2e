//! HTTP client for static page fetches.
//!
//! Not a browser — one plain GET per call, no retries. The category listing
//! page is served statically; everything dynamically loaded goes through
//! the renderer instead.

use crate::error::ScrapeError;
use std::time::Duration;

/// Response from an HTTP GET request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Original requested URL.
    pub url: String,
    /// Final URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

/// HTTP client with a standard Chrome user-agent and a bounded redirect chain.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(timeout_ms: u64) -> Self {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/131.0.0.0 Safari/537.36";

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// Perform a single GET request. Transport failures surface immediately;
    /// status handling is left to the caller.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError> {
        let r = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = r.status().as_u16();
        let final_url = r.url().to_string();
        let body = r.text().await.map_err(|source| ScrapeError::Fetch {
            url: url.to_string(),
            source,
        })?;

        Ok(HttpResponse {
            url: url.to_string(),
            final_url,
            status,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(10000);
        // Just verify it doesn't panic
        let _ = client;
    }
}
