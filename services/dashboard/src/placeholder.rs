//! Sample dataset used when no source is configured or every source failed.

use crate::dataset::Dataset;
use anyhow::{Context, Result};

const PLACEHOLDER_JSON: &str = include_str!("../data/placeholder.json");

pub fn placeholder_dataset() -> Result<Dataset> {
    serde_json::from_str(PLACEHOLDER_JSON).context("Failed to parse bundled placeholder dataset")
}
