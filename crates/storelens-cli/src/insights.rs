//! `storelens insights`, `scrape`, and `competitors` subcommands.
//!
//! Each prints its result to stdout as pretty JSON; logs go to stderr.

use storelens_core::AppConfig;
use storelens_insights::{ConfiguredSummarizer, InsightsOptions};
use storelens_scraper::PageFetcher;

fn build_fetcher(config: &AppConfig) -> anyhow::Result<PageFetcher> {
    PageFetcher::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build page fetcher: {e}"))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_insights(
    config: &AppConfig,
    url: &str,
    include_competitors: bool,
) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let pool = storelens_db::connect_pool_from_config(config).await?;
    let summarizer = ConfiguredSummarizer::from_app_config(config)?;
    let options = InsightsOptions {
        include_competitors,
        ..InsightsOptions::from_app_config(config)
    };

    let report =
        storelens_insights::fetch_insights(&fetcher, &pool, &summarizer, url, &options).await?;
    print_json(&report)
}

pub(crate) async fn run_scrape(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let record = storelens_scraper::scrape_store(&fetcher, url)
        .await
        .ok_or_else(|| anyhow::anyhow!("invalid or unreachable storefront: {url}"))?;
    print_json(&record)
}

pub(crate) async fn run_competitors(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let fetcher = build_fetcher(config)?;
    let candidates =
        storelens_scraper::discover_competitors(&fetcher, &config.competitor_listing_url, url)
            .await;
    print_json(&candidates)
}
