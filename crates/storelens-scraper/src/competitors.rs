//! Competitor discovery from a third-party storefront listing page.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::client::{extract_store_origin, PageFetcher};

/// Upper bound on competitor candidates returned per brand.
pub const MAX_COMPETITORS: usize = 3;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[\w.-]+(?::\d+)?").expect("valid url regex"));

/// Fetches the listing page and returns up to [`MAX_COMPETITORS`] candidate
/// storefront URLs. A failed fetch yields an empty list.
///
/// Which candidates are chosen depends on the listing's content; callers
/// must only rely on the brand exclusion and the cap.
pub async fn discover_competitors(
    fetcher: &PageFetcher,
    listing_url: &str,
    brand_url: &str,
) -> Vec<String> {
    let Some(listing) = fetcher.fetch_text(listing_url).await else {
        tracing::warn!(listing_url, "competitor listing unavailable");
        return Vec::new();
    };

    let candidates = competitor_candidates(&listing, listing_url, brand_url);
    tracing::debug!(
        brand_url,
        count = candidates.len(),
        "competitor candidates selected"
    );
    candidates
}

/// Extracts URL-shaped substrings from `listing`, dropping the brand's own
/// site and any URL on the listing's own origin, deduplicated in first-seen
/// order.
#[must_use]
pub fn competitor_candidates(listing: &str, listing_url: &str, brand_url: &str) -> Vec<String> {
    let brand = extract_store_origin(brand_url.trim());
    let brand = brand.trim_end_matches('/');
    let listing_origin = extract_store_origin(listing_url);
    let mut seen = HashSet::new();

    URL_RE
        .find_iter(listing)
        .map(|m| m.as_str().trim_end_matches('/'))
        .filter(|url| brand.is_empty() || !url.contains(brand))
        .filter(|url| extract_store_origin(url) != listing_origin)
        .filter(|url| seen.insert(*url))
        .take(MAX_COMPETITORS)
        .map(str::to_owned)
        .collect()
}
