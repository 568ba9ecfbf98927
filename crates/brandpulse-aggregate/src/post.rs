use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two post sources, with divergent field encodings.
///
/// Instagram posts carry `timestamp` and `reach`/`impressions`; TikTok posts
/// carry `createTime` and `views`. The normalizer resolves the divergence
/// once at the boundary so no aggregator branches on platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Tiktok,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Tiktok => write!(f, "tiktok"),
        }
    }
}

/// Categorical sentiment, used as a fallback when a numeric score is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Canonical score for a label-only post, keeping label-classified posts
    /// on the same [-1, 1] scale as scored ones.
    #[must_use]
    pub fn canonical_score(self) -> f64 {
        match self {
            SentimentLabel::Positive => 1.0,
            SentimentLabel::Neutral => 0.0,
            SentimentLabel::Negative => -1.0,
        }
    }
}

/// A capture time as it appears on the wire: either an epoch number
/// (seconds or milliseconds) or an ISO-8601 string, depending on platform
/// export version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    Epoch(f64),
    Text(String),
}

/// A raw post record as exported by either platform.
///
/// All platform-specific fields are optional; the normalizer decides which
/// ones apply and defaults the rest. Deserialization never rejects a post
/// for missing fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    /// Instagram capture time.
    pub timestamp: Option<TimestampValue>,
    /// TikTok capture time.
    pub create_time: Option<TimestampValue>,
    pub text: Option<String>,
    /// Explicit hashtag list; when absent, tags are parsed from `text`.
    pub hashtags: Option<Vec<String>>,
    /// Instagram reach.
    pub reach: Option<u64>,
    /// Instagram impressions, fallback when `reach` is absent.
    pub impressions: Option<u64>,
    /// TikTok view count.
    pub views: Option<u64>,
    /// Model-scored sentiment in [-1, 1].
    pub sentiment_score: Option<f64>,
    /// Categorical sentiment, fallback when no score is present.
    pub sentiment_label: Option<SentimentLabel>,
}

/// A post with platform divergence resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPost {
    /// None when the raw timestamp was absent or unparseable; such posts are
    /// dropped from day-bucketed aggregations only.
    pub captured_at: Option<DateTime<Utc>>,
    pub text: Option<String>,
    pub hashtags: Vec<String>,
    pub reach: u64,
    pub sentiment_score: Option<f64>,
    pub sentiment_label: Option<SentimentLabel>,
}

impl NormalizedPost {
    /// Whether the post carries any sentiment signal (score or label).
    #[must_use]
    pub fn has_sentiment_signal(&self) -> bool {
        self.sentiment_score.is_some() || self.sentiment_label.is_some()
    }
}

/// One platform's snapshot: brand slug to its ordered post list.
///
/// BTreeMap keeps brand iteration deterministic; chart plot order is applied
/// separately via an explicit ordering list.
pub type BrandDataset = BTreeMap<String, Vec<RawPost>>;
