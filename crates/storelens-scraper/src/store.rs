//! Store extraction: fetch the fixed page set for one storefront and merge
//! extractor output into a single [`StoreRecord`].

use storelens_core::{ImportantLinks, Policies, StoreRecord};

use crate::client::{extract_store_origin, is_same_origin, resolve_link, subpage_url, PageFetcher};
use crate::extract::{
    extract_brand_about, extract_brand_name, extract_contact_info, extract_faqs,
    extract_policy_links, extract_product_catalog, extract_social_links, PolicyLinks,
};
use crate::normalize::normalize_text_block;
use crate::Page;

pub const ABOUT_PATH: &str = "/pages/about";
pub const CONTACT_PATH: &str = "/pages/contact";
pub const PRIVACY_POLICY_PATH: &str = "/policies/privacy-policy";
pub const REFUND_POLICY_PATH: &str = "/policies/refund-policy";
pub const FAQ_PATH: &str = "/pages/faq";

/// Paths a linked policy page may live under to be used as a fallback.
const POLICY_LINK_PREFIXES: [&str; 2] = ["/policies/", "/pages/"];

/// Raw HTML of every page a store extraction reads. Only `home` is required;
/// each subpage is `None` when it could not be fetched.
#[derive(Debug, Clone, Default)]
pub struct StorePages {
    pub home: String,
    pub about: Option<String>,
    pub contact: Option<String>,
    pub privacy_policy: Option<String>,
    pub refund_policy: Option<String>,
    pub faq: Option<String>,
}

/// Scrapes one storefront into a normalized record.
///
/// Returns `None` only when the home page cannot be fetched. Every other
/// page is optional and contributes empty defaults when missing.
///
/// When a fixed policy page is missing, the last matching policy anchor on
/// the home page is fetched once in its place, but only if it stays on the
/// store's origin under `/policies/` or `/pages/`.
pub async fn scrape_store(fetcher: &PageFetcher, shop_url: &str) -> Option<StoreRecord> {
    let shop_url = shop_url.trim();
    let origin = extract_store_origin(shop_url);

    let Some(home) = fetcher.fetch_text(&origin).await else {
        tracing::warn!(shop_url, "home page unreachable; store cannot be assessed");
        return None;
    };

    let mut pages = StorePages {
        home,
        about: fetcher.fetch_text(&subpage_url(&origin, ABOUT_PATH)).await,
        contact: fetcher.fetch_text(&subpage_url(&origin, CONTACT_PATH)).await,
        privacy_policy: fetcher
            .fetch_text(&subpage_url(&origin, PRIVACY_POLICY_PATH))
            .await,
        refund_policy: fetcher
            .fetch_text(&subpage_url(&origin, REFUND_POLICY_PATH))
            .await,
        faq: fetcher.fetch_text(&subpage_url(&origin, FAQ_PATH)).await,
    };

    if pages.privacy_policy.is_none() || pages.refund_policy.is_none() {
        let fallback = fallback_policy_urls(&origin, &pages.home);
        if pages.privacy_policy.is_none() {
            if let Some(url) = fallback.privacy {
                tracing::debug!(shop_url, url = %url, "using linked privacy policy page");
                pages.privacy_policy = fetcher.fetch_text(&url).await;
            }
        }
        if pages.refund_policy.is_none() {
            if let Some(url) = fallback.returns {
                tracing::debug!(shop_url, url = %url, "using linked return policy page");
                pages.refund_policy = fetcher.fetch_text(&url).await;
            }
        }
    }

    let product_catalog = extract_product_catalog(fetcher, shop_url).await;
    let record = build_store_record(shop_url, &pages, product_catalog);

    tracing::info!(
        shop_url,
        brand = %record.brand_name,
        products = record.product_catalog.len(),
        faqs = record.faqs.len(),
        "store extracted"
    );
    Some(record)
}

/// Runs every page extractor over already-fetched HTML.
///
/// Pure: the same pages and catalog always produce the same record.
#[must_use]
pub fn build_store_record(
    shop_url: &str,
    pages: &StorePages,
    product_catalog: Vec<String>,
) -> StoreRecord {
    let origin = extract_store_origin(shop_url);
    let home = Page::parse(&pages.home);
    let about = pages.about.as_deref().map(Page::parse);

    let faqs = match pages.faq.as_deref() {
        Some(html) => extract_faqs(&Page::parse(html)),
        None => extract_faqs(&home),
    };

    let contact_text = pages
        .contact
        .as_deref()
        .map(|html| Page::parse(html).text())
        .unwrap_or_default();
    let contact_details = extract_contact_info(&format!("{}\n{contact_text}", home.text()));

    StoreRecord {
        url: shop_url.to_string(),
        brand_name: extract_brand_name(&home),
        product_catalog,
        hero_products: Vec::new(),
        policies: Policies {
            privacy_policy: policy_text(pages.privacy_policy.as_deref()),
            return_policy: policy_text(pages.refund_policy.as_deref()),
        },
        faqs,
        social_handles: extract_social_links(&home),
        contact_details,
        brand_about: extract_brand_about(about.as_ref(), &home),
        important_links: ImportantLinks::for_origin(&origin),
    }
}

fn policy_text(html: Option<&str>) -> String {
    html.map(|h| normalize_text_block(&Page::parse(h).text()))
        .unwrap_or_default()
}

/// Absolute policy URLs linked from the home page. Links off the store's
/// origin, outside the policy path prefixes, or equal to the fixed paths
/// already tried are dropped.
fn fallback_policy_urls(origin: &str, home_html: &str) -> PolicyLinks {
    let links = extract_policy_links(&Page::parse(home_html));
    let resolve = |href: Option<String>, tried_path: &str| {
        let tried = subpage_url(origin, tried_path);
        href.and_then(|h| resolve_link(origin, &h))
            .filter(|url| is_store_policy_url(origin, url))
            .filter(|url| url.trim_end_matches('/') != tried)
    };
    PolicyLinks {
        privacy: resolve(links.privacy, PRIVACY_POLICY_PATH),
        returns: resolve(links.returns, REFUND_POLICY_PATH),
    }
}

fn is_store_policy_url(origin: &str, url: &str) -> bool {
    is_same_origin(origin, url)
        && reqwest::Url::parse(url).is_ok_and(|u| {
            POLICY_LINK_PREFIXES
                .iter()
                .any(|prefix| u.path().starts_with(prefix))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_store_record_fills_every_field_from_home_only() {
        let pages = StorePages {
            home: "<html><head><title>Acme Co</title></head><body>Hi</body></html>".to_string(),
            ..StorePages::default()
        };
        let record = build_store_record("https://acme.example.com", &pages, Vec::new());

        assert_eq!(record.url, "https://acme.example.com");
        assert_eq!(record.brand_name, "Acme Co");
        assert!(record.product_catalog.is_empty());
        assert!(record.hero_products.is_empty());
        assert_eq!(record.policies, Policies::default());
        assert!(record.faqs.is_empty());
        assert!(record.social_handles.is_empty());
        assert!(record.contact_details.emails.is_empty());
        assert_eq!(record.brand_about, "");
        assert_eq!(
            record.important_links.contact_us,
            "https://acme.example.com/pages/contact"
        );
    }

    #[test]
    fn important_links_match_empty_record_for_path_urls() {
        let url = "https://acme.example.com/collections/all";
        let pages = StorePages {
            home: "<body></body>".to_string(),
            ..StorePages::default()
        };
        let record = build_store_record(url, &pages, Vec::new());
        assert_eq!(
            record.important_links,
            StoreRecord::empty(url).important_links
        );
    }

    #[test]
    fn faq_page_takes_precedence_over_home() {
        let pages = StorePages {
            home: "<body><div>Home question?\nHome answer</div></body>".to_string(),
            faq: Some("<body><div>FAQ question?\nFAQ answer</div></body>".to_string()),
            ..StorePages::default()
        };
        let record = build_store_record("https://acme.example.com", &pages, Vec::new());
        assert_eq!(record.faqs.len(), 1);
        assert_eq!(record.faqs[0].question, "FAQ question?");
    }

    #[test]
    fn faqs_fall_back_to_home_page() {
        let pages = StorePages {
            home: "<body><div>Home question?\nHome answer</div></body>".to_string(),
            ..StorePages::default()
        };
        let record = build_store_record("https://acme.example.com", &pages, Vec::new());
        assert_eq!(record.faqs[0].answer, "Home answer");
    }

    #[test]
    fn contact_details_merge_home_and_contact_pages() {
        let pages = StorePages {
            home: "<body>sales@acme.example.com</body>".to_string(),
            contact: Some(
                "<body>support@acme.example.com sales@acme.example.com</body>".to_string(),
            ),
            ..StorePages::default()
        };
        let record = build_store_record("https://acme.example.com", &pages, Vec::new());
        assert_eq!(record.contact_details.emails.len(), 2);
    }

    #[test]
    fn policy_text_is_normalized() {
        let pages = StorePages {
            home: "<body></body>".to_string(),
            privacy_policy: Some("<body><h1>Privacy</h1>\n\n\n<p>We keep little.</p></body>".to_string()),
            ..StorePages::default()
        };
        let record = build_store_record("https://acme.example.com", &pages, Vec::new());
        assert_eq!(record.policies.privacy_policy, "Privacy\nWe keep little.");
        assert_eq!(record.policies.return_policy, "");
    }

    #[test]
    fn same_pages_produce_same_record() {
        let pages = StorePages {
            home: r#"<head><title>Acme</title></head><body><a href="https://tiktok.com/@acme">t</a>
                     Call +1 555 123 4567</body>"#
                .to_string(),
            ..StorePages::default()
        };
        let a = build_store_record("https://acme.example.com", &pages, vec!["Widget".into()]);
        let b = build_store_record("https://acme.example.com", &pages, vec!["Widget".into()]);
        assert_eq!(a, b);
    }

    #[test]
    fn fallback_policy_urls_skip_already_tried_paths() {
        let home = r#"<a href="/policies/privacy-policy">p</a><a href="/pages/returns">r</a>"#;
        let links = fallback_policy_urls("https://acme.example.com", home);
        assert!(links.privacy.is_none());
        assert_eq!(
            links.returns.as_deref(),
            Some("https://acme.example.com/pages/returns")
        );
    }

    #[test]
    fn fallback_policy_urls_stay_on_store_origin() {
        let home = r#"<a href="https://legal.example.com/pages/privacy">p</a>
                      <a href="https://cdn.example.com/policies/returns">r</a>"#;
        let links = fallback_policy_urls("https://acme.example.com", home);
        assert_eq!(links, PolicyLinks::default());
    }

    #[test]
    fn fallback_policy_urls_require_policy_path_prefix() {
        let home = r#"<a href="/blogs/news/return-of-the-king">r</a>
                      <a href="/legal/privacy">p</a>"#;
        let links = fallback_policy_urls("https://acme.example.com", home);
        assert_eq!(links, PolicyLinks::default());
    }
}
