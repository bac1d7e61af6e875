//! Parsed HTML document wrapper used by the field extractors.
//!
//! `scraper::Html` is not `Send`, so a `Page` must never be held across an
//! `.await`; parse after all fetches for a store have completed.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));
static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("valid meta selector")
});

/// Elements whose text content is never visible page copy.
const NON_CONTENT_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

pub struct Page {
    document: Html,
}

impl Page {
    /// Parses `html` leniently; malformed markup yields a best-effort tree.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All text nodes of the document concatenated in order, excluding
    /// script and style content. Source line breaks are preserved.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in self.document.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node
                .parent()
                .and_then(|p| p.value().as_element())
                .is_some_and(|el| NON_CONTENT_ELEMENTS.contains(&el.name()));
            if !hidden {
                out.push_str(text);
            }
        }
        out
    }

    /// `href` attribute values of every anchor, in document order.
    #[must_use]
    pub fn hrefs(&self) -> Vec<String> {
        self.document
            .select(&ANCHOR_SELECTOR)
            .filter_map(|a| a.value().attr("href"))
            .map(str::to_owned)
            .collect()
    }

    /// Trimmed `<title>` text, or `None` when missing or blank.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        let title = self.document.select(&TITLE_SELECTOR).next()?;
        let text = title.text().collect::<String>();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Content of `<meta name="description">`, if present.
    #[must_use]
    pub fn meta_description(&self) -> Option<String> {
        self.document
            .select(&META_DESCRIPTION_SELECTOR)
            .find_map(|m| m.value().attr("content"))
            .map(str::to_owned)
    }
}
