//! Response types for Shopify's public `products.json` endpoint.
//!
//! Only the product title is read. Every other field in the payload is
//! ignored, so stores that add or omit fields still deserialize.

use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    pub products: Vec<CatalogProduct>,
}

/// A single product entry. `title` is required; an entry without one makes
/// the whole body malformed.
#[derive(Debug, Deserialize)]
pub struct CatalogProduct {
    pub title: String,
}
