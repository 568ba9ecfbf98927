//! Hashtag frequency aggregation: pooled top-K selection across all
//! compared brands, then per-brand counts against that shared label set.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use crate::error::AggregateError;
use crate::post::NormalizedPost;
use crate::series::{compose_zero_filled, LabeledSeries};

/// Hashtags used by one post, lowercased and `#`-prefixed.
///
/// The explicit `hashtags` field wins when non-empty; otherwise tags are
/// parsed out of the free text. Matching is case-insensitive, so `#Sale`
/// and `#sale` tally together.
#[must_use]
pub fn hashtags_of(post: &NormalizedPost) -> Vec<String> {
    if !post.hashtags.is_empty() {
        return post
            .hashtags
            .iter()
            .map(|tag| {
                let tag = tag.to_lowercase();
                if tag.starts_with('#') {
                    tag
                } else {
                    format!("#{tag}")
                }
            })
            .collect();
    }

    let Some(text) = post.text.as_deref() else {
        return Vec::new();
    };
    let re = Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex");
    re.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Build the grouped hashtag-frequency chart for brands already in plot
/// order.
///
/// Occurrence counts are pooled across all brands to pick the global top-`k`
/// label set (count descending, ties broken by first-encountered order,
/// stable); each brand's vector then reports its own count per global label,
/// zero-filled. Fewer than `k` labels come out when the corpus is smaller;
/// no hashtags anywhere yields the empty series the render layer detects.
///
/// # Errors
///
/// Returns [`AggregateError::InvalidTopK`] when `k == 0` — a zero-width top
/// list is a caller bug, not an empty-data state.
pub fn top_hashtags(
    brands: &[(String, Vec<NormalizedPost>)],
    k: usize,
) -> Result<LabeledSeries, AggregateError> {
    if k == 0 {
        return Err(AggregateError::InvalidTopK(k));
    }

    // Pooled tally, remembering first-seen order for stable tie-breaks.
    let mut pooled: HashMap<String, u64> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();
    let mut per_brand: Vec<(String, HashMap<String, u64>)> = Vec::new();

    for (slug, posts) in brands {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for post in posts {
            for tag in hashtags_of(post) {
                if !pooled.contains_key(&tag) {
                    first_seen.push(tag.clone());
                }
                *pooled.entry(tag.clone()).or_insert(0) += 1;
                *counts.entry(tag).or_insert(0) += 1;
            }
        }
        per_brand.push((slug.clone(), counts));
    }

    if pooled.is_empty() {
        return Ok(LabeledSeries {
            labels: Vec::new(),
            series: brands
                .iter()
                .map(|(slug, _)| crate::series::BrandSeries {
                    name: slug.clone(),
                    values: Vec::new(),
                })
                .collect(),
        });
    }

    // first_seen already holds every tag once, in encounter order; a stable
    // sort by descending count keeps that order as the tie-break.
    let mut ranked = first_seen;
    ranked.sort_by_key(|tag| std::cmp::Reverse(pooled[tag]));
    ranked.truncate(k);

    let observations: Vec<(String, BTreeMap<String, f64>)> = per_brand
        .into_iter()
        .map(|(slug, counts)| {
            let map = ranked
                .iter()
                .filter_map(|tag| {
                    counts.get(tag).map(|&n| {
                        #[allow(clippy::cast_precision_loss)]
                        let n = n as f64;
                        (tag.clone(), n)
                    })
                })
                .collect();
            (slug, map)
        })
        .collect();

    Ok(compose_zero_filled(ranked, observations))
}
