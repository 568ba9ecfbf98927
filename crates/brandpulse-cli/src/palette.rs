//! Stateless, position-based color assignment for chart series.
//!
//! The aggregation core emits brand order as data; styling stays out here at
//! the presentation boundary. Position 0 is always the primary brand, so the
//! first palette entry doubles as the highlight color.

const PALETTE: &[&str] = &[
    "#e4572e", // primary brand highlight
    "#17bebb",
    "#ffc914",
    "#2e282a",
    "#76b041",
    "#9b5de5",
];

/// Color for the series at `position` in plot order; repeats when the brand
/// count exceeds the palette.
#[must_use]
pub fn color_for(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}
