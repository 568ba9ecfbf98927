//! Reach totals: raw sums of the platform-appropriate metric.

use crate::bucket::{sum, timeline};
use crate::post::NormalizedPost;
use crate::series::LabeledSeries;

/// Total reach across a brand's posts. Empty list sums to 0; no outlier
/// filtering.
#[must_use]
pub fn total_reach(posts: &[NormalizedPost]) -> u64 {
    posts.iter().map(|p| p.reach).sum()
}

/// Per-brand reach totals in plot order.
#[must_use]
pub fn reach_by_brand(brands: &[(String, Vec<NormalizedPost>)]) -> Vec<(String, u64)> {
    brands
        .iter()
        .map(|(slug, posts)| (slug.clone(), total_reach(posts)))
        .collect()
}

/// Daily summed-reach timeline across brands already in plot order.
#[must_use]
pub fn reach_timeline(brands: &[(String, Vec<NormalizedPost>)]) -> LabeledSeries {
    timeline(
        brands,
        |p| {
            #[allow(clippy::cast_precision_loss)]
            let reach = p.reach as f64;
            Some(reach)
        },
        sum,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{Platform, RawPost, TimestampValue};

    fn insta_post(reach: u64) -> NormalizedPost {
        let raw = RawPost {
            reach: Some(reach),
            ..RawPost::default()
        };
        crate::normalize(&raw, Platform::Instagram)
    }

    #[test]
    fn empty_posts_sum_to_zero() {
        assert_eq!(total_reach(&[]), 0);
    }

    #[test]
    fn n_posts_with_reach_r_sum_to_n_times_r() {
        let posts: Vec<NormalizedPost> = (0..4).map(|_| insta_post(250)).collect();
        assert_eq!(total_reach(&posts), 1000);
    }

    #[test]
    fn posts_without_metric_count_as_zero() {
        let bare = crate::normalize(&RawPost::default(), Platform::Instagram);
        let posts = vec![insta_post(100), bare];
        assert_eq!(total_reach(&posts), 100);
    }

    #[test]
    fn reach_by_brand_keeps_plot_order_and_empty_brands() {
        let brands = vec![
            ("primary".to_string(), vec![insta_post(10), insta_post(20)]),
            ("rival".to_string(), Vec::new()),
        ];
        let out = reach_by_brand(&brands);
        assert_eq!(out, vec![("primary".to_string(), 30), ("rival".to_string(), 0)]);
    }

    #[test]
    fn reach_timeline_sums_per_day() {
        let dated = |day: &str, reach: u64| {
            let raw = RawPost {
                timestamp: Some(TimestampValue::Text(day.to_string())),
                reach: Some(reach),
                ..RawPost::default()
            };
            crate::normalize(&raw, Platform::Instagram)
        };
        let brands = vec![(
            "a".to_string(),
            vec![dated("2024-01-01", 10), dated("2024-01-01", 5), dated("2024-01-02", 7)],
        )];
        let out = reach_timeline(&brands);
        assert_eq!(out.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(out.series[0].values, vec![Some(15.0), Some(7.0)]);
    }
}
