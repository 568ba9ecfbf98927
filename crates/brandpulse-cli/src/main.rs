use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use brandpulse_aggregate::{
    post_count_timeline, reach_by_brand, reach_timeline, sentiment_by_brand, sentiment_timeline,
    top_hashtags, Platform,
};
use brandpulse_core::{load_brands, plot_order};

mod dataset;
mod palette;
mod report;

use dataset::{load_dataset, normalized_in_order};
use report::{reach_report, sentiment_report, ChartReport};

#[derive(Debug, Parser)]
#[command(name = "brandpulse")]
#[command(about = "BrandPulse aggregation command line interface")]
struct Cli {
    /// Dataset snapshot JSON file ({"instagram": {...}, "tiktok": {...}}).
    #[arg(long, env = "BRANDPULSE_DATASET")]
    dataset: PathBuf,

    /// Brand roster YAML file.
    #[arg(long, env = "BRANDPULSE_BRANDS", default_value = "./config/brands.yaml")]
    brands: PathBuf,

    /// Platform to aggregate: instagram or tiktok.
    #[arg(long, default_value = "instagram")]
    platform: String,

    /// Brand slugs to compare (repeatable); default is the whole roster.
    #[arg(long = "brand")]
    selected: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Total reach per brand.
    Reach,
    /// Grouped top-K hashtag frequencies.
    Hashtags {
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
    /// Sentiment bucket counts per brand.
    Sentiment,
    /// Daily timeline chart for one metric.
    Timeline {
        /// One of: sentiment, reach, posts.
        #[arg(long, default_value = "sentiment")]
        metric: String,
    },
}

fn parse_platform(s: &str) -> anyhow::Result<Platform> {
    match s {
        "instagram" => Ok(Platform::Instagram),
        "tiktok" => Ok(Platform::Tiktok),
        other => anyhow::bail!("unknown platform '{other}' (expected instagram or tiktok)"),
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let platform = parse_platform(&cli.platform)?;

    let roster = load_brands(&cli.brands)
        .with_context(|| format!("failed to load brand roster {}", cli.brands.display()))?;
    let order = plot_order(&roster.brands, &cli.selected);
    if order.is_empty() {
        anyhow::bail!("no roster brands match the requested selection");
    }

    let snapshot = load_dataset(&cli.dataset)?;
    let brands = normalized_in_order(snapshot.platform(platform), &order, platform);
    tracing::debug!(
        platform = %platform,
        brands = brands.len(),
        "dataset normalized"
    );

    let json = match cli.command {
        Commands::Reach => serde_json::to_string_pretty(&reach_report(reach_by_brand(&brands)))?,
        Commands::Hashtags { top } => {
            let series = top_hashtags(&brands, top)?;
            serde_json::to_string_pretty(&ChartReport::from_series(series))?
        }
        Commands::Sentiment => {
            serde_json::to_string_pretty(&sentiment_report(sentiment_by_brand(&brands)))?
        }
        Commands::Timeline { metric } => {
            let series = match metric.as_str() {
                "sentiment" => sentiment_timeline(&brands),
                "reach" => reach_timeline(&brands),
                "posts" => post_count_timeline(&brands),
                other => anyhow::bail!("unknown timeline metric '{other}'"),
            };
            serde_json::to_string_pretty(&ChartReport::from_series(series))?
        }
    };

    println!("{json}");
    Ok(())
}
