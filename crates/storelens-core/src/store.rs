//! The normalized storefront record and the report built around it.
//!
//! Every field of [`StoreRecord`] is always serialized, even when empty, so
//! persistence and API consumers can rely on a fixed shape. Sets and maps use
//! ordered collections to keep serialization deterministic.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Brand name used when a storefront has no usable `<title>`.
pub const UNKNOWN_BRAND_NAME: &str = "Unknown";

/// Platform name (`instagram`, `facebook`, `tiktok`) to profile URL.
pub type SocialHandles = BTreeMap<String, String>;

/// Structured brand information extracted from one storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Storefront URL as requested; the record's identity.
    pub url: String,
    pub brand_name: String,
    /// Product titles in catalog order.
    pub product_catalog: Vec<String>,
    /// Reserved; always empty.
    pub hero_products: Vec<String>,
    pub policies: Policies,
    pub faqs: Vec<Faq>,
    pub social_handles: SocialHandles,
    pub contact_details: ContactDetails,
    pub brand_about: String,
    pub important_links: ImportantLinks,
}

impl StoreRecord {
    /// A record for `url` with every field at its default value.
    #[must_use]
    pub fn empty(url: impl Into<String>) -> Self {
        let url = url.into();
        let important_links = ImportantLinks::for_url(&url);
        Self {
            url,
            brand_name: UNKNOWN_BRAND_NAME.to_string(),
            product_catalog: Vec::new(),
            hero_products: Vec::new(),
            policies: Policies::default(),
            faqs: Vec::new(),
            social_handles: SocialHandles::new(),
            contact_details: ContactDetails::default(),
            brand_about: String::new(),
            important_links,
        }
    }
}

/// Normalized policy page text. Empty string when the page was unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policies {
    pub privacy_policy: String,
    pub return_policy: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Deduplicated contact points. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub emails: BTreeSet<String>,
    pub phones: BTreeSet<String>,
}

/// Conventional storefront links derived from the origin. Not verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantLinks {
    pub blogs: String,
    pub order_tracking: String,
    pub contact_us: String,
}

impl ImportantLinks {
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        let base = origin.trim_end_matches('/');
        Self {
            blogs: format!("{base}/blogs"),
            order_tracking: format!("{base}/apps/track-order"),
            contact_us: format!("{base}/pages/contact"),
        }
    }

    /// Links for the origin of `url`; any path, query, or fragment is dropped.
    #[must_use]
    pub fn for_url(url: &str) -> Self {
        Self::for_origin(origin_prefix(url))
    }
}

/// `scheme://host[:port]` prefix of a URL, found by splitting on the first
/// `/`, `?`, or `#` after the authority.
fn origin_prefix(url: &str) -> &str {
    let url = url.trim();
    let authority_start = url.find("://").map_or(0, |i| i + 3);
    let end = url[authority_start..]
        .find(['/', '?', '#'])
        .map_or(url.len(), |i| authority_start + i);
    &url[..end]
}

/// Result of a full insights request: the summary text plus the records it
/// was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    pub summary: String,
    pub brand: StoreRecord,
    pub competitors: Vec<StoreRecord>,
}
