//! JSON shaping for chart output: labeled series plus presentation color,
//! assigned by position at this boundary so palette concerns never reach the
//! aggregation core.

use serde::Serialize;

use brandpulse_aggregate::{LabeledSeries, SentimentBreakdown};

use crate::palette::color_for;

#[derive(Debug, Serialize)]
pub struct ChartReport {
    pub labels: Vec<String>,
    pub series: Vec<SeriesReport>,
}

#[derive(Debug, Serialize)]
pub struct SeriesReport {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
}

impl ChartReport {
    #[must_use]
    pub fn from_series(series: LabeledSeries) -> Self {
        Self {
            labels: series.labels,
            series: series
                .series
                .into_iter()
                .enumerate()
                .map(|(position, brand)| SeriesReport {
                    name: brand.name,
                    color: color_for(position),
                    values: brand.values,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReachReport {
    pub brand: String,
    pub color: &'static str,
    pub total_reach: u64,
}

#[must_use]
pub fn reach_report(totals: Vec<(String, u64)>) -> Vec<ReachReport> {
    totals
        .into_iter()
        .enumerate()
        .map(|(position, (brand, total_reach))| ReachReport {
            brand,
            color: color_for(position),
            total_reach,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct SentimentReport {
    pub brand: String,
    pub color: &'static str,
    pub positive: u64,
    pub neutral: u64,
    pub negative: u64,
}

#[must_use]
pub fn sentiment_report(breakdowns: Vec<(String, SentimentBreakdown)>) -> Vec<SentimentReport> {
    breakdowns
        .into_iter()
        .enumerate()
        .map(|(position, (brand, b))| SentimentReport {
            brand,
            color: color_for(position),
            positive: b.positive,
            neutral: b.neutral,
            negative: b.negative,
        })
        .collect()
}
