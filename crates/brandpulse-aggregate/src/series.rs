//! The labeled-series output contract shared by every chart.
//!
//! The aggregation core generates these; the render layer just draws them.
//! `labels.is_empty()` is the empty-state signal the dashboard substitutes a
//! fallback message for.

use std::collections::BTreeMap;

use serde::Serialize;

/// One brand's numeric vector, aligned to the chart's label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSeries {
    /// Brand slug; plot order is the vector order in [`LabeledSeries`].
    pub name: String,
    /// Exactly one entry per label. `None` means "no observation at this
    /// label", which is distinct from `Some(0.0)`.
    pub values: Vec<Option<f64>>,
}

/// A shared label axis plus one aligned vector per brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSeries {
    pub labels: Vec<String>,
    pub series: Vec<BrandSeries>,
}

impl LabeledSeries {
    /// An empty chart: no labels, no series.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            labels: Vec::new(),
            series: Vec::new(),
        }
    }
}

/// Compose per-brand observation maps into a [`LabeledSeries`], filling
/// labels a brand has no observation for with `None`.
///
/// Used for measurement-style charts (daily mean sentiment, daily reach),
/// where a missing day means "nothing measured", not "measured zero".
#[must_use]
pub fn compose_nullable(
    labels: Vec<String>,
    brands: Vec<(String, BTreeMap<String, f64>)>,
) -> LabeledSeries {
    compose_with(labels, brands, |slot| slot)
}

/// Compose per-brand observation maps into a [`LabeledSeries`], filling
/// labels a brand has no observation for with `Some(0.0)`.
///
/// Used for usage-count charts (hashtag frequency), where every label is a
/// real item and absence means "used zero times".
#[must_use]
pub fn compose_zero_filled(
    labels: Vec<String>,
    brands: Vec<(String, BTreeMap<String, f64>)>,
) -> LabeledSeries {
    compose_with(labels, brands, |slot| slot.or(Some(0.0)))
}

/// Every output vector is built by walking the label axis, so the
/// one-entry-per-label invariant holds by construction.
fn compose_with<F>(
    labels: Vec<String>,
    brands: Vec<(String, BTreeMap<String, f64>)>,
    fill: F,
) -> LabeledSeries
where
    F: Fn(Option<f64>) -> Option<f64>,
{
    let series = brands
        .into_iter()
        .map(|(name, observations)| BrandSeries {
            name,
            values: labels
                .iter()
                .map(|label| fill(observations.get(label).copied()))
                .collect(),
        })
        .collect();

    LabeledSeries { labels, series }
}
