use storelens_core::UNKNOWN_BRAND_NAME;

use crate::normalize::normalize_text_block;
use crate::Page;

/// Brand name from the home page `<title>`, or the `"Unknown"` sentinel.
#[must_use]
pub fn extract_brand_name(home: &Page) -> String {
    home.title()
        .unwrap_or_else(|| UNKNOWN_BRAND_NAME.to_string())
}

/// About-page text when the page was fetched and has content, otherwise the
/// home page meta description, otherwise empty.
#[must_use]
pub fn extract_brand_about(about: Option<&Page>, home: &Page) -> String {
    about
        .map(|page| normalize_text_block(&page.text()))
        .filter(|text| !text.is_empty())
        .or_else(|| home.meta_description())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_name_defaults_to_unknown() {
        let home = Page::parse("<body>no title</body>");
        assert_eq!(extract_brand_name(&home), "Unknown");
    }

    #[test]
    fn brand_name_from_title() {
        let home = Page::parse("<head><title>Acme Co</title></head>");
        assert_eq!(extract_brand_name(&home), "Acme Co");
    }

    #[test]
    fn about_prefers_about_page() {
        let home = Page::parse(r#"<meta name="description" content="Meta blurb">"#);
        let about = Page::parse("<body><h1>Our story</h1>\n\n\n<p>Founded in a garage.</p></body>");
        assert_eq!(
            extract_brand_about(Some(&about), &home),
            "Our story\nFounded in a garage."
        );
    }

    #[test]
    fn about_falls_back_to_meta_description() {
        let home = Page::parse(r#"<meta name="description" content="Meta blurb">"#);
        assert_eq!(extract_brand_about(None, &home), "Meta blurb");
    }

    #[test]
    fn blank_about_page_falls_back_to_meta_description() {
        let home = Page::parse(r#"<meta name="description" content="Meta blurb">"#);
        let about = Page::parse("<body>  \n </body>");
        assert_eq!(extract_brand_about(Some(&about), &home), "Meta blurb");
    }

    #[test]
    fn about_empty_without_sources() {
        let home = Page::parse("<body></body>");
        assert_eq!(extract_brand_about(None, &home), "");
    }
}
