//! URL origin, domain, and link resolution helpers.

/// Extracts the scheme+host origin from a storefront URL.
///
/// Given `"https://acme.example.com/collections/all"`, returns
/// `"https://acme.example.com"`. Subpages and `products.json` are always
/// fetched from the store root, whatever path the caller supplied.
#[must_use]
pub fn extract_store_origin(shop_url: &str) -> String {
    reqwest::Url::parse(shop_url).map_or_else(
        |e| {
            tracing::warn!(
                shop_url,
                error = %e,
                "could not parse storefront URL; falling back to string split for origin extraction"
            );
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            shop_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}

/// Returns `true` when `url` parses and has exactly the given origin
/// (scheme, host, and port).
#[must_use]
pub fn is_same_origin(origin: &str, url: &str) -> bool {
    reqwest::Url::parse(url).is_ok_and(|u| u.origin().ascii_serialization() == origin)
}

/// Joins a root-relative `path` onto a storefront origin.
#[must_use]
pub fn subpage_url(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

/// Resolves an anchor `href` against `base`, returning an absolute URL.
///
/// Returns `None` for hrefs that cannot be resolved to an http(s) URL.
#[must_use]
pub fn resolve_link(base: &str, href: &str) -> Option<String> {
    let href = href.trim().replace("&amp;", "&");
    let base = reqwest::Url::parse(base).ok()?;
    let joined = base.join(&href).ok()?;
    matches!(joined.scheme(), "http" | "https").then(|| joined.to_string())
}
