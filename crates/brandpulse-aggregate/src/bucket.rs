//! Calendar-day bucketing, the primitive under every time-series chart.
//!
//! Parametrized by a numeric selector and a reducer rather than hardcoded to
//! one metric: daily mean sentiment, daily summed reach, and daily post
//! counts are all the same fold with different parameters.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::post::NormalizedPost;
use crate::series::{compose_nullable, LabeledSeries};

/// Folds one day's selected values into a single chart point.
pub type Reducer = fn(&[f64]) -> f64;

/// Group posts by UTC calendar day, collecting `select(post)` per bucket.
///
/// A selector returning `None` excludes the post from this metric; a post
/// without a parseable capture time contributes to no bucket at all (dropped
/// from day-bucketed aggregations only). BTreeMap keys come out in ascending
/// day order.
#[must_use]
pub fn bucket_by_day<F>(posts: &[NormalizedPost], select: F) -> BTreeMap<NaiveDate, Vec<f64>>
where
    F: Fn(&NormalizedPost) -> Option<f64>,
{
    let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for post in posts {
        let Some(captured_at) = post.captured_at else {
            continue;
        };
        if let Some(value) = select(post) {
            buckets
                .entry(captured_at.date_naive())
                .or_default()
                .push(value);
        }
    }
    buckets
}

/// Bucket by day, then reduce each bucket to one value.
///
/// Days with no qualifying posts simply have no entry; the composer turns
/// those into `null` chart slots.
#[must_use]
pub fn daily_series<F>(
    posts: &[NormalizedPost],
    select: F,
    reduce: Reducer,
) -> BTreeMap<NaiveDate, f64>
where
    F: Fn(&NormalizedPost) -> Option<f64>,
{
    bucket_by_day(posts, select)
        .into_iter()
        .map(|(day, values)| (day, reduce(&values)))
        .collect()
}

/// Arithmetic mean reducer.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    values.iter().sum::<f64>() / denom
}

/// Sum reducer.
#[must_use]
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Count reducer, for histogram-style charts.
#[must_use]
pub fn count(values: &[f64]) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    n
}

/// Render a day key the way the chart axis expects it.
#[must_use]
pub fn day_label(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Build a multi-brand daily timeline: the label axis is the ascending union
/// of days observed across all brands, and each brand's vector is
/// null-filled on days it has no qualifying posts.
///
/// `brands` must already be in plot order (primary brand first).
#[must_use]
pub fn timeline<F>(
    brands: &[(String, Vec<NormalizedPost>)],
    select: F,
    reduce: Reducer,
) -> LabeledSeries
where
    F: Fn(&NormalizedPost) -> Option<f64>,
{
    let per_brand: Vec<(String, BTreeMap<NaiveDate, f64>)> = brands
        .iter()
        .map(|(slug, posts)| (slug.clone(), daily_series(posts, &select, reduce)))
        .collect();

    let days: BTreeSet<NaiveDate> = per_brand
        .iter()
        .flat_map(|(_, series)| series.keys().copied())
        .collect();
    let labels: Vec<String> = days.iter().copied().map(day_label).collect();

    let observations = per_brand
        .into_iter()
        .map(|(slug, series)| {
            (
                slug,
                series
                    .into_iter()
                    .map(|(day, value)| (day_label(day), value))
                    .collect(),
            )
        })
        .collect();

    compose_nullable(labels, observations)
}

/// Daily post-count timeline per brand (every post with a valid capture time
/// counts, regardless of metrics carried).
#[must_use]
pub fn post_count_timeline(brands: &[(String, Vec<NormalizedPost>)]) -> LabeledSeries {
    timeline(brands, |_| Some(1.0), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{Platform, RawPost, TimestampValue};

    fn post_on(day: &str, score: Option<f64>) -> NormalizedPost {
        let raw = RawPost {
            timestamp: Some(TimestampValue::Text(day.to_string())),
            sentiment_score: score,
            ..RawPost::default()
        };
        crate::normalize(&raw, Platform::Instagram)
    }

    fn undated_post() -> NormalizedPost {
        let raw = RawPost {
            timestamp: Some(TimestampValue::Text("soon".to_string())),
            sentiment_score: Some(0.9),
            ..RawPost::default()
        };
        crate::normalize(&raw, Platform::Instagram)
    }

    #[test]
    fn buckets_group_by_calendar_day() {
        let posts = vec![
            post_on("2024-01-01", Some(0.5)),
            post_on("2024-01-01", Some(-0.5)),
            post_on("2024-01-03", Some(1.0)),
        ];
        let buckets = bucket_by_day(&posts, |p| p.sentiment_score);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()], vec![0.5, -0.5]);
    }

    #[test]
    fn unparseable_timestamp_contributes_to_no_bucket() {
        let posts = vec![post_on("2024-01-01", Some(0.5)), undated_post()];
        let buckets = bucket_by_day(&posts, |p| p.sentiment_score);
        let total: usize = buckets.values().map(Vec::len).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn selector_none_excludes_post_from_metric() {
        let posts = vec![post_on("2024-01-01", Some(0.5)), post_on("2024-01-01", None)];
        let buckets = bucket_by_day(&posts, |p| p.sentiment_score);
        assert_eq!(buckets[&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()].len(), 1);
    }

    #[test]
    fn daily_series_applies_reducer() {
        let posts = vec![
            post_on("2024-01-01", Some(0.5)),
            post_on("2024-01-01", Some(-0.5)),
        ];
        let series = daily_series(&posts, |p| p.sentiment_score, mean);
        assert_eq!(series[&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()], 0.0);
    }

    #[test]
    fn reducers() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(count(&[1.0, 2.0, 3.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn timeline_labels_are_sorted_union_across_brands() {
        let brands = vec![
            ("a".to_string(), vec![post_on("2024-01-03", Some(0.1))]),
            ("b".to_string(), vec![post_on("2024-01-01", Some(0.2))]),
        ];
        let out = timeline(&brands, |p| p.sentiment_score, mean);
        assert_eq!(out.labels, vec!["2024-01-01", "2024-01-03"]);
        // brand a has no observation on b's day and vice versa
        assert_eq!(out.series[0].values, vec![None, Some(0.1)]);
        assert_eq!(out.series[1].values, vec![Some(0.2), None]);
    }

    #[test]
    fn timeline_of_empty_brands_is_empty() {
        let brands = vec![("a".to_string(), Vec::new())];
        let out = timeline(&brands, |p| p.sentiment_score, mean);
        assert!(out.labels.is_empty());
        assert_eq!(out.series.len(), 1);
        assert!(out.series[0].values.is_empty());
    }

    #[test]
    fn post_count_timeline_counts_all_dated_posts() {
        let brands = vec![(
            "a".to_string(),
            vec![
                post_on("2024-01-01", None),
                post_on("2024-01-01", Some(0.3)),
                undated_post(),
            ],
        )];
        let out = post_count_timeline(&brands);
        assert_eq!(out.labels, vec!["2024-01-01"]);
        assert_eq!(out.series[0].values, vec![Some(2.0)]);
    }
}
