use crate::client::{extract_store_origin, subpage_url, PageFetcher};
use crate::types::CatalogResponse;

/// Fetches `{origin}/products.json` and returns product titles in order.
///
/// Network errors, non-2xx statuses, and malformed bodies all produce an
/// empty catalog.
pub async fn extract_product_catalog(fetcher: &PageFetcher, shop_url: &str) -> Vec<String> {
    let url = subpage_url(&extract_store_origin(shop_url), "/products.json");
    match fetcher.get_json::<CatalogResponse>(&url).await {
        Ok(catalog) => catalog.products.into_iter().map(|p| p.title).collect(),
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "product catalog unavailable");
            Vec::new()
        }
    }
}
