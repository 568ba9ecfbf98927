//! Aggregation engine for BrandPulse.
//!
//! Pure, synchronous transforms from per-platform brand datasets to
//! chart-ready labeled series: day bucketing, hashtag frequency, sentiment
//! distribution and timelines, and reach totals. No I/O, no shared state;
//! every function is idempotent over an immutable dataset snapshot, so
//! callers may invoke aggregators concurrently and memoize freely.

pub mod bucket;
pub mod error;
pub mod hashtags;
pub mod normalize;
pub mod post;
pub mod reach;
pub mod sentiment;
pub mod series;

pub use bucket::{bucket_by_day, daily_series, post_count_timeline};
pub use error::AggregateError;
pub use hashtags::top_hashtags;
pub use normalize::{normalize, normalize_all};
pub use post::{BrandDataset, NormalizedPost, Platform, RawPost, SentimentLabel};
pub use reach::{reach_by_brand, reach_timeline, total_reach};
pub use sentiment::{distribution, sentiment_by_brand, sentiment_timeline, SentimentBreakdown};
pub use series::{compose_nullable, compose_zero_filled, BrandSeries, LabeledSeries};
