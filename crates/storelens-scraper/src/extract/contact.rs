use std::sync::LazyLock;

use regex::Regex;
use storelens_core::ContactDetails;

use crate::normalize::collapse_whitespace;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?[\d\s()-]{8,}").expect("valid phone regex"));

/// Collects email addresses and phone numbers from raw page text.
///
/// Phone matches have whitespace runs collapsed to a single space. The phone
/// pattern also matches layout whitespace and punctuation runs, so matches
/// without a single digit are discarded.
#[must_use]
pub fn extract_contact_info(text: &str) -> ContactDetails {
    let emails = EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();

    let phones = PHONE_RE
        .find_iter(text)
        .map(|m| collapse_whitespace(m.as_str()))
        .filter(|p| p.bytes().any(|b| b.is_ascii_digit()))
        .collect();

    ContactDetails { emails, phones }
}
