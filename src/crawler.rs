//! Crawler: orchestrates the three-stage pipeline.
//!
//! Navigator → per-shop extractor loop → aggregated records, strictly in
//! discovery order on a single task. One render context is acquired up
//! front, reused for every shop, and released together with the browser
//! once the loop finishes. The loop never returns early, so the release
//! runs on every path that reaches context acquisition.

use crate::catalog;
use crate::error::ScrapeError;
use crate::extractor;
use crate::http::HttpClient;
use crate::model::FlyerRecord;
use crate::renderer::Renderer;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Request to crawl one category.
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Site base URL, e.g. "https://www.prospektmaschine.de".
    pub base_url: String,
    /// Category path, e.g. "/hypermarkte/".
    pub category: String,
    /// Gallery readiness budget per shop, in milliseconds.
    pub wait_ms: u64,
    /// Static fetch budget for the listing page, in milliseconds.
    pub fetch_timeout_ms: u64,
}

/// The Crawler drives the whole run against one renderer.
pub struct Crawler {
    renderer: Arc<dyn Renderer>,
}

impl Crawler {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer }
    }

    /// Crawl one category and return all extracted records in discovery
    /// order (listing order, then per-shop gallery order).
    pub async fn crawl(&self, request: &CrawlRequest) -> Result<Vec<FlyerRecord>, ScrapeError> {
        let base = Url::parse(&request.base_url).map_err(|source| ScrapeError::InvalidUrl {
            url: request.base_url.clone(),
            source,
        })?;
        let client = HttpClient::new(request.fetch_timeout_ms);

        let shops = match catalog::discover_shops(&client, &base, &request.category).await {
            Ok(shops) => shops,
            Err(ScrapeError::NoShopsFound { category }) => {
                warn!("no shops found in category {category}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        if shops.is_empty() {
            return Ok(Vec::new());
        }

        let mut ctx = self
            .renderer
            .new_context()
            .await
            .map_err(|e| ScrapeError::Session(format!("{e:#}")))?;

        let mut records = Vec::new();
        for shop in &shops {
            match extractor::extract_flyers(&mut *ctx, &base, shop, request.wait_ms).await {
                Ok(mut found) => records.append(&mut found),
                // Per-shop failures mean zero flyers for that shop, nothing more.
                Err(e) => warn!("skipping shop {}: {e}", shop.name),
            }
        }

        if let Err(e) = ctx.close().await {
            warn!("failed to close render context: {e:#}");
        }
        if let Err(e) = self.renderer.shutdown().await {
            warn!("failed to shut down renderer: {e:#}");
        }

        info!(
            "crawl complete, {} flyers from {} shops",
            records.len(),
            shops.len()
        );
        Ok(records)
    }
}
