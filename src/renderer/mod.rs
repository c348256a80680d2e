//! Renderer abstraction for browser-based page rendering.
//!
//! Defines the `Renderer` and `RenderContext` traits that abstract over
//! the browser engine (currently Chromium via chromiumoxide). The trait
//! seam is what lets the crawl pipeline run against a scripted fake in
//! tests, with no Chromium on the machine.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// A browser engine that can create rendering contexts.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Create a new browser context (tab).
    async fn new_context(&self) -> Result<Box<dyn RenderContext>>;
    /// Shut down the browser engine.
    async fn shutdown(&self) -> Result<()>;
}

/// A single browser context (tab) for rendering pages.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL with a timeout.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()>;
    /// Wait until `selector` matches at least one element in the live DOM.
    ///
    /// Returns `Ok(true)` once the selector matches, `Ok(false)` when the
    /// budget is exhausted without a match. `Err` is reserved for session
    /// failures, not for slow pages.
    async fn wait_for(&self, selector: &str, timeout_ms: u64) -> Result<bool>;
    /// Get the full rendered page HTML.
    async fn html(&self) -> Result<String>;
    /// Close this context.
    async fn close(self: Box<Self>) -> Result<()>;
}
