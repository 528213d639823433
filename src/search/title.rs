//! Result title resolution.
//!
//! Result cards are inconsistent: some carry a heading, some only attributes, some
//! nothing but the link. Each strategy below is tried in order and the first non-empty
//! title wins.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::utils::{collapse_whitespace, element_text, last_path_segment};

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("h3", "result heading"));

static TITLED_DESCENDANT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("*[title]", "titled descendant"));

/// Path prefix of detail pages; only those links yield a title from their URL.
const DETAIL_PATH_MARKER: &str = "/videos/";

type TitleStrategy = fn(&ElementRef) -> Option<String>;

const TITLE_STRATEGIES: &[(&str, TitleStrategy)] = &[
    ("heading", heading_text),
    ("title attribute", title_attr),
    ("alt attribute", alt_attr),
    ("titled descendant", titled_descendant),
    ("url", href_title),
];

/// Resolves the display title of a result anchor, or `None` if no strategy finds one.
pub fn resolve_title(anchor: &ElementRef) -> Option<String> {
    TITLE_STRATEGIES.iter().find_map(|(name, strategy)| {
        let title = strategy(anchor)?;
        log::trace!("Resolved title '{title}' from {name}");
        Some(title)
    })
}

fn non_empty(text: String) -> Option<String> {
    (!text.is_empty()).then_some(text)
}

fn heading_text(anchor: &ElementRef) -> Option<String> {
    let text = anchor
        .select(&HEADING_SELECTOR)
        .map(|heading| element_text(&heading))
        .collect::<Vec<_>>()
        .join(" ");
    non_empty(collapse_whitespace(&text))
}

fn attr_text(element: &ElementRef, name: &str) -> Option<String> {
    element
        .value()
        .attr(name)
        .and_then(|value| non_empty(collapse_whitespace(value)))
}

fn title_attr(anchor: &ElementRef) -> Option<String> {
    attr_text(anchor, "title")
}

fn alt_attr(anchor: &ElementRef) -> Option<String> {
    attr_text(anchor, "alt")
}

fn href_title(anchor: &ElementRef) -> Option<String> {
    anchor.value().attr("href").and_then(title_from_url)
}

fn titled_descendant(anchor: &ElementRef) -> Option<String> {
    anchor
        .select(&TITLED_DESCENDANT_SELECTOR)
        .next()
        .and_then(|element| attr_text(&element, "title"))
}

/// Synthesizes a readable title from a detail link's last path segment.
///
/// `/videos/a-night-out` becomes `"A night out"`. Links outside `/videos/` and links
/// without a final segment yield `None`.
pub fn title_from_url(href: &str) -> Option<String> {
    let start = href.find(DETAIL_PATH_MARKER)? + DETAIL_PATH_MARKER.len();
    let words = last_path_segment(&href[start..]).replace('-', " ");
    let words = collapse_whitespace(&words);
    let mut chars = words.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
