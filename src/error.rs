//! Error taxonomy for the crawl pipeline.
//!
//! Category-level failures (`Fetch`, `HttpStatus`) and output failures
//! (`Encode`, `Write`) are fatal to the run. `Navigation` and
//! `RenderTimeout` are contained at the shop-processing boundary: the shop
//! is skipped and the crawl continues. `NoShopsFound` is soft; the caller
//! logs it and carries on with an empty shop list.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("no shops found in category {category}")]
    NoShopsFound { category: String },

    #[error("failed to navigate to {url}: {reason}")]
    Navigation { url: String, reason: String },

    #[error("flyer gallery at {url} not ready after {waited_ms}ms")]
    RenderTimeout { url: String, waited_ms: u64 },

    #[error("browser session error: {0}")]
    Session(String),

    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to encode records as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
