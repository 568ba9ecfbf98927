//! Dataset snapshot loading: the external-state boundary of the dashboard.
//!
//! The aggregation core never touches files; this module reads one JSON
//! snapshot holding both platform datasets and hands immutable maps to the
//! aggregators.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use brandpulse_aggregate::{normalize_all, BrandDataset, NormalizedPost, Platform};
use brandpulse_core::BrandConfig;

/// One snapshot file: `{"instagram": {slug: [posts]}, "tiktok": {...}}`.
/// Either platform section may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct DatasetFile {
    #[serde(default)]
    pub instagram: BrandDataset,
    #[serde(default)]
    pub tiktok: BrandDataset,
}

impl DatasetFile {
    #[must_use]
    pub fn platform(&self, platform: Platform) -> &BrandDataset {
        match platform {
            Platform::Instagram => &self.instagram,
            Platform::Tiktok => &self.tiktok,
        }
    }
}

/// Load a dataset snapshot from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid dataset JSON.
pub fn load_dataset(path: &Path) -> anyhow::Result<DatasetFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file {}", path.display()))?;
    let dataset: DatasetFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse dataset file {}", path.display()))?;
    Ok(dataset)
}

/// Normalize one platform's posts for brands already in plot order.
///
/// Brands absent from the snapshot get an empty post list, so every selected
/// brand still appears in chart output.
#[must_use]
pub fn normalized_in_order(
    dataset: &BrandDataset,
    order: &[&BrandConfig],
    platform: Platform,
) -> Vec<(String, Vec<NormalizedPost>)> {
    order
        .iter()
        .map(|brand| {
            let slug = brand.slug();
            let posts = dataset.get(&slug).map(Vec::as_slice).unwrap_or_default();
            (slug, normalize_all(posts, platform))
        })
        .collect()
}
