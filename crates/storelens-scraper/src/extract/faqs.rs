use storelens_core::Faq;

use crate::Page;

/// Maximum number of question/answer pairs kept per store.
pub const MAX_FAQS: usize = 10;

/// Lines at or above this many characters are never treated as questions.
pub const MAX_QUESTION_LEN: usize = 100;

/// Pairs every short line containing `?` with the line that follows it.
///
/// The line after a question is taken verbatim as the answer, even if it is
/// blank or itself a question. Pairs keep encounter order; at most
/// [`MAX_FAQS`] are returned.
#[must_use]
pub fn extract_faqs(page: &Page) -> Vec<Faq> {
    let text = page.text();
    let lines: Vec<&str> = text.split('\n').collect();

    lines
        .windows(2)
        .filter(|pair| pair[0].contains('?') && pair[0].chars().count() < MAX_QUESTION_LEN)
        .take(MAX_FAQS)
        .map(|pair| Faq {
            question: pair[0].trim().to_string(),
            answer: pair[1].trim().to_string(),
        })
        .collect()
}
