use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Dataset;

/// The one real failure mode in the crate: the dataset document could
/// not be read or decoded. Everything past loading degrades to defaults
/// instead of erroring, so "load failed" stays distinguishable from
/// "loaded fine, zero matches".
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a dataset document from a JSON file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, CatalogError> {
    let contents = fs::read_to_string(path)?;
    parse_dataset(&contents)
}

/// Decode a dataset document from a JSON string.
pub fn parse_dataset(json: &str) -> Result<Dataset, CatalogError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    log::debug!("parsed dataset with {} items", dataset.items.len());
    Ok(dataset)
}
