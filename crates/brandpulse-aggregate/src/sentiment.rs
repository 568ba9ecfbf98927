//! Sentiment aggregation: bucket distribution and daily-mean timelines.

use serde::Serialize;

use crate::bucket::{mean, timeline};
use crate::post::{NormalizedPost, SentimentLabel};
use crate::series::LabeledSeries;

/// Positive/neutral/negative counts for one brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

impl SentimentBreakdown {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.positive + self.neutral + self.negative
    }

    /// Nothing to show: all three buckets are zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Classify one post's sentiment signal.
///
/// A numeric score wins: `> 0` positive, `< 0` negative, exactly `0`
/// neutral. Without a score, the categorical label is mapped directly.
/// Posts with neither carry no signal and return `None` — they are excluded
/// from sentiment aggregation, not counted as neutral.
#[must_use]
pub fn classify(post: &NormalizedPost) -> Option<SentimentLabel> {
    if let Some(score) = post.sentiment_score {
        if score > 0.0 {
            return Some(SentimentLabel::Positive);
        }
        if score < 0.0 {
            return Some(SentimentLabel::Negative);
        }
        return Some(SentimentLabel::Neutral);
    }
    post.sentiment_label
}

/// The numeric sentiment a post contributes to the daily-mean timeline:
/// its score when present, else the canonical score of its label.
#[must_use]
pub fn signal_score(post: &NormalizedPost) -> Option<f64> {
    post.sentiment_score
        .or_else(|| post.sentiment_label.map(SentimentLabel::canonical_score))
}

/// Count sentiment buckets for one brand's posts.
#[must_use]
pub fn distribution(posts: &[NormalizedPost]) -> SentimentBreakdown {
    let mut breakdown = SentimentBreakdown::default();
    for post in posts {
        match classify(post) {
            Some(SentimentLabel::Positive) => breakdown.positive += 1,
            Some(SentimentLabel::Neutral) => breakdown.neutral += 1,
            Some(SentimentLabel::Negative) => breakdown.negative += 1,
            None => {}
        }
    }
    breakdown
}

/// Per-brand sentiment distributions in plot order, omitting brands with
/// nothing to show (all three counts zero).
#[must_use]
pub fn sentiment_by_brand(
    brands: &[(String, Vec<NormalizedPost>)],
) -> Vec<(String, SentimentBreakdown)> {
    brands
        .iter()
        .map(|(slug, posts)| (slug.clone(), distribution(posts)))
        .filter(|(_, breakdown)| !breakdown.is_empty())
        .collect()
}

/// Daily mean-sentiment timeline across brands already in plot order.
///
/// Days where a brand has no post carrying a sentiment signal come out as
/// `null`, never `0` — "no measurement" and "neutral sentiment" stay
/// distinguishable.
#[must_use]
pub fn sentiment_timeline(brands: &[(String, Vec<NormalizedPost>)]) -> LabeledSeries {
    timeline(brands, signal_score, mean)
}
