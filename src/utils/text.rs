//! Element text normalization.

use scraper::ElementRef;

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the element's text content with whitespace collapsed.
///
/// Text nodes of nested elements are concatenated, so markup such as
/// `<h1>Acme <span>Show</span> 12</h1>` yields `"Acme Show 12"`.
pub fn element_text(element: &ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
