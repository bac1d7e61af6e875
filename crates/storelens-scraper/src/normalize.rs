//! Text normalization for extracted page content.

use std::sync::LazyLock;

use regex::Regex;

static BLANK_LINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[ \t\r]*\n)+").expect("valid blank-lines regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Collapses runs of blank lines into a single newline and trims the result.
///
/// Used for policy and about-page text, where the raw document text is
/// dominated by layout whitespace.
#[must_use]
pub fn normalize_text_block(text: &str) -> String {
    BLANK_LINES_RE.replace_all(text, "\n").trim().to_string()
}

/// Collapses every whitespace run (including newlines) to one space and trims.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
