//! The insights request flow.

use sqlx::PgPool;
use storelens_core::{AppConfig, InsightsReport, StoreRecord};
use storelens_db::upsert_stores;
use storelens_scraper::{discover_competitors, scrape_store, PageFetcher};

use crate::error::InsightsError;
use crate::summary::Summarizer;

/// Per-request knobs for [`fetch_insights`].
#[derive(Debug, Clone)]
pub struct InsightsOptions {
    /// Third-party listing page competitor candidates are drawn from.
    pub listing_url: String,
    pub include_competitors: bool,
}

impl InsightsOptions {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            listing_url: config.competitor_listing_url.clone(),
            include_competitors: true,
        }
    }
}

/// Produce an insights report for one storefront.
///
/// 1. Scrape the target store. An unreachable home page is reported as
///    [`InsightsError::UnreachableStore`] and nothing is persisted.
/// 2. Discover and scrape competitors; unreachable ones are skipped.
/// 3. Upsert the brand and every competitor in one transaction.
/// 4. Summarize. Summary failures are carried in the summary text.
///
/// # Errors
///
/// Returns [`InsightsError::UnreachableStore`] when the target cannot be
/// fetched, or [`InsightsError::Db`] when persistence fails (in which case no
/// record from this request is stored).
pub async fn fetch_insights<S: Summarizer>(
    fetcher: &PageFetcher,
    pool: &PgPool,
    summarizer: &S,
    url: &str,
    options: &InsightsOptions,
) -> Result<InsightsReport, InsightsError> {
    let Some(brand) = scrape_store(fetcher, url).await else {
        return Err(InsightsError::UnreachableStore {
            url: url.to_string(),
        });
    };

    let competitors = if options.include_competitors {
        scrape_competitors(fetcher, &options.listing_url, url).await
    } else {
        Vec::new()
    };

    let mut records = Vec::with_capacity(1 + competitors.len());
    records.push(brand.clone());
    records.extend(competitors.iter().cloned());
    upsert_stores(pool, &records).await?;

    tracing::info!(
        url,
        competitors = competitors.len(),
        "store records persisted; generating summary"
    );
    let summary = summarizer.summarize(&brand, &competitors).await;

    Ok(InsightsReport {
        summary,
        brand,
        competitors,
    })
}

/// Scrape every discovered competitor, in discovery order, dropping the
/// ones whose home page is unreachable.
pub async fn scrape_competitors(
    fetcher: &PageFetcher,
    listing_url: &str,
    brand_url: &str,
) -> Vec<StoreRecord> {
    let candidates = discover_competitors(fetcher, listing_url, brand_url).await;
    let mut records = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        match scrape_store(fetcher, &candidate).await {
            Some(record) => records.push(record),
            None => tracing::info!(competitor = %candidate, "competitor unreachable; skipped"),
        }
    }

    records
}
