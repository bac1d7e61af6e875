//! Field extractors.
//!
//! Each extractor is a free function over a parsed [`Page`](crate::Page) or
//! raw text and holds no state. The only one that performs I/O is
//! [`extract_product_catalog`], which reads the storefront's catalog endpoint
//! itself and swallows every failure.

mod brand;
mod catalog;
mod contact;
mod faqs;
mod links;

pub use brand::{extract_brand_about, extract_brand_name};
pub use catalog::extract_product_catalog;
pub use contact::extract_contact_info;
pub use faqs::{extract_faqs, MAX_FAQS, MAX_QUESTION_LEN};
pub use links::{extract_policy_links, extract_social_links, PolicyLinks, SOCIAL_PLATFORMS};
