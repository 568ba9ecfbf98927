//! Normalization of raw platform posts into the uniform shape the
//! aggregators consume.
//!
//! This is the single place that knows Instagram says `timestamp` and
//! `reach`/`impressions` where TikTok says `createTime` and `views`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::post::{NormalizedPost, Platform, RawPost, TimestampValue};

/// Epoch values at or above this are milliseconds, below are seconds.
/// The cutover (~33,658 AD in seconds, ~2001 in milliseconds) sits far from
/// any plausible post date on either interpretation.
const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;

/// Parse a wire timestamp into a UTC instant.
///
/// Numeric values are epoch seconds or milliseconds, split at
/// [`EPOCH_MILLIS_THRESHOLD`]. Strings are RFC 3339, with a bare
/// `YYYY-MM-DD` fallback (midnight UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_captured_at(value: &TimestampValue) -> Option<DateTime<Utc>> {
    match value {
        TimestampValue::Epoch(n) => {
            if !n.is_finite() || *n < 0.0 {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)]
            let millis = if *n < EPOCH_MILLIS_THRESHOLD {
                (*n * 1000.0) as i64
            } else {
                *n as i64
            };
            DateTime::from_timestamp_millis(millis)
        }
        TimestampValue::Text(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|dt| dt.and_utc())
            }),
    }
}

/// Normalize one raw post for the given platform.
///
/// Resolves the capture time (`timestamp` for Instagram, `createTime` for
/// TikTok) and the reach metric (`reach` else `impressions` else 0 for
/// Instagram; `views` else 0 for TikTok). Sentiment, text, and explicit
/// hashtags pass through unchanged. Never fails: absent or malformed fields
/// degrade to `None`/0.
#[must_use]
pub fn normalize(post: &RawPost, platform: Platform) -> NormalizedPost {
    let raw_time = match platform {
        Platform::Instagram => post.timestamp.as_ref(),
        Platform::Tiktok => post.create_time.as_ref(),
    };
    let captured_at = raw_time.and_then(parse_captured_at);
    if let (None, Some(value)) = (captured_at, raw_time) {
        tracing::debug!(platform = %platform, value = ?value, "unparseable capture time");
    }

    let reach = match platform {
        Platform::Instagram => post.reach.or(post.impressions).unwrap_or(0),
        Platform::Tiktok => post.views.unwrap_or(0),
    };

    NormalizedPost {
        captured_at,
        text: post.text.clone(),
        hashtags: post.hashtags.clone().unwrap_or_default(),
        reach,
        sentiment_score: post.sentiment_score,
        sentiment_label: post.sentiment_label,
    }
}

/// Normalize an ordered post list for one platform.
#[must_use]
pub fn normalize_all(posts: &[RawPost], platform: Platform) -> Vec<NormalizedPost> {
    posts.iter().map(|p| normalize(p, platform)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parse_epoch_seconds() {
        let parsed = parse_captured_at(&TimestampValue::Epoch(1_704_067_200.0));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn parse_epoch_milliseconds() {
        let parsed = parse_captured_at(&TimestampValue::Epoch(1_704_067_200_000.0));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn parse_rfc3339_string() {
        let parsed = parse_captured_at(&TimestampValue::Text("2024-06-15T08:30:00Z".to_string()));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap()));
    }

    #[test]
    fn parse_rfc3339_with_offset_converts_to_utc() {
        let parsed =
            parse_captured_at(&TimestampValue::Text("2024-06-15T01:30:00-05:00".to_string()));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 6, 15, 6, 30, 0).unwrap()));
    }

    #[test]
    fn parse_bare_date_string() {
        let parsed = parse_captured_at(&TimestampValue::Text("2024-06-15".to_string()));
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap()));
    }

    #[test]
    fn parse_garbage_returns_none() {
        assert_eq!(parse_captured_at(&TimestampValue::Text("not-a-date".to_string())), None);
        assert_eq!(parse_captured_at(&TimestampValue::Text(String::new())), None);
        assert_eq!(parse_captured_at(&TimestampValue::Epoch(f64::NAN)), None);
        assert_eq!(parse_captured_at(&TimestampValue::Epoch(-5.0)), None);
    }

    #[test]
    fn normalize_instagram_prefers_reach_over_impressions() {
        let post = RawPost {
            reach: Some(120),
            impressions: Some(500),
            ..RawPost::default()
        };
        assert_eq!(normalize(&post, Platform::Instagram).reach, 120);
    }

    #[test]
    fn normalize_instagram_falls_back_to_impressions() {
        let post = RawPost {
            impressions: Some(500),
            ..RawPost::default()
        };
        assert_eq!(normalize(&post, Platform::Instagram).reach, 500);
    }

    #[test]
    fn normalize_instagram_defaults_reach_to_zero() {
        let post = RawPost::default();
        assert_eq!(normalize(&post, Platform::Instagram).reach, 0);
    }

    #[test]
    fn normalize_tiktok_uses_views() {
        let post = RawPost {
            views: Some(42),
            reach: Some(999),
            ..RawPost::default()
        };
        // reach/impressions are Instagram fields; TikTok only reads views
        assert_eq!(normalize(&post, Platform::Tiktok).reach, 42);
    }

    #[test]
    fn normalize_resolves_platform_timestamp_field() {
        let post = RawPost {
            timestamp: Some(TimestampValue::Epoch(1_704_067_200.0)),
            create_time: Some(TimestampValue::Text("2024-06-15".to_string())),
            ..RawPost::default()
        };
        let insta = normalize(&post, Platform::Instagram);
        let tiktok = normalize(&post, Platform::Tiktok);
        assert_eq!(insta.captured_at.unwrap().date_naive().to_string(), "2024-01-01");
        assert_eq!(tiktok.captured_at.unwrap().date_naive().to_string(), "2024-06-15");
    }

    #[test]
    fn normalize_never_fails_on_malformed_timestamp() {
        let post = RawPost {
            timestamp: Some(TimestampValue::Text("yesterday-ish".to_string())),
            reach: Some(10),
            ..RawPost::default()
        };
        let normalized = normalize(&post, Platform::Instagram);
        assert!(normalized.captured_at.is_none());
        assert_eq!(normalized.reach, 10);
    }

    #[test]
    fn normalize_passes_sentiment_and_hashtags_through() {
        let post = RawPost {
            hashtags: Some(vec!["#sale".to_string()]),
            sentiment_score: Some(0.4),
            text: Some("big #sale today".to_string()),
            ..RawPost::default()
        };
        let normalized = normalize(&post, Platform::Instagram);
        assert_eq!(normalized.hashtags, vec!["#sale"]);
        assert_eq!(normalized.sentiment_score, Some(0.4));
        assert_eq!(normalized.text.as_deref(), Some("big #sale today"));
        assert!(normalized.has_sentiment_signal());
    }
}
