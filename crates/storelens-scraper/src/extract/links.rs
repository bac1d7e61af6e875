use storelens_core::SocialHandles;

use crate::Page;

/// Platforms recognized in anchor targets, matched by substring.
pub const SOCIAL_PLATFORMS: [&str; 3] = ["instagram", "facebook", "tiktok"];

/// Policy page links found on a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyLinks {
    pub privacy: Option<String>,
    pub returns: Option<String>,
}

/// Maps each recognized platform to the *last* anchor whose target contains
/// the platform name. Later anchors overwrite earlier ones.
#[must_use]
pub fn extract_social_links(page: &Page) -> SocialHandles {
    let mut socials = SocialHandles::new();
    for href in page.hrefs() {
        for platform in SOCIAL_PLATFORMS {
            if href.contains(platform) {
                socials.insert(platform.to_string(), href.clone());
            }
        }
    }
    socials
}

/// Finds privacy (`privacy`) and return (`return` or `refund`) policy links.
/// Last match wins per category.
#[must_use]
pub fn extract_policy_links(page: &Page) -> PolicyLinks {
    let mut links = PolicyLinks::default();
    for href in page.hrefs() {
        if href.contains("privacy") {
            links.privacy = Some(href.clone());
        }
        if href.contains("return") || href.contains("refund") {
            links.returns = Some(href);
        }
    }
    links
}
