//! Storefront scraping: page fetching, field extraction, store extraction,
//! and competitor discovery.

pub mod client;
pub mod competitors;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod page;
pub mod store;
pub mod types;

pub use client::{PageFetcher, DEFAULT_TIMEOUT_SECS};
pub use competitors::{competitor_candidates, discover_competitors, MAX_COMPETITORS};
pub use error::ScraperError;
pub use page::Page;
pub use store::{build_store_record, scrape_store, StorePages};
