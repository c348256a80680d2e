//! Result writer: serialize the full crawl output to a JSON file.
//!
//! One write at the end of the run, fully overwriting any existing file.
//! There is no intermediate persistence: a write failure loses the
//! collected work and is fatal.

use crate::error::ScrapeError;
use crate::model::FlyerRecord;
use std::path::Path;
use tracing::info;

/// Write all records to `path` as a pretty-printed JSON array.
pub fn write_records(records: &[FlyerRecord], path: &Path) -> Result<(), ScrapeError> {
    info!("writing {} flyers to {}", records.len(), path.display());
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(|source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
