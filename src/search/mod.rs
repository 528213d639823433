//! Search result parsing and ranking.
//!
//! This module turns a query into a normalized search term and a search URL, and turns
//! the fetched result page into a deduplicated, relevance-ranked candidate list:
//! - Anchor discovery with a primary and a broader secondary link pattern
//! - Title resolution through an ordered chain of strategies (see `title`)
//! - Relevance scoring against the search term (see `scoring`)
//!
//! Fetching is done by the provider; everything here is pure.

mod scoring;
mod title;

use std::collections::HashSet;
use std::sync::LazyLock;

use log::debug;
use scraper::{Html, Selector};

use crate::config::{SEARCH_PATH, SEARCH_QUERY_PARAM};
use crate::keyword::extract_keyword;
use crate::models::{Candidate, SearchQuery};
use crate::utils::{absolute_url, collapse_whitespace, last_path_segment};

pub use scoring::score_candidate;
pub use title::{resolve_title, title_from_url};

// CSS selector strings
const PRIMARY_RESULT_SELECTOR_STR: &str = "a[href^='/videos/']";
const SECONDARY_RESULT_SELECTOR_STR: &str = "a[href*='/video/']";

static PRIMARY_RESULT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(PRIMARY_RESULT_SELECTOR_STR, "primary result links")
});

static SECONDARY_RESULT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(SECONDARY_RESULT_SELECTOR_STR, "secondary result links")
});

/// Picks the raw search term for a query.
///
/// The keyword extracted from the query wins; when the query is blank the host's title
/// is used. Returns `None` when neither yields any text.
pub fn resolve_search_term(query: &SearchQuery) -> Option<String> {
    let keyword = extract_keyword(query.query.trim());
    if !keyword.trim().is_empty() {
        debug!("Extracted search term from query: {keyword}");
        return Some(keyword);
    }
    query
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
}

/// Normalizes a search term for the site's search endpoint.
///
/// Every character other than ASCII letters, digits, and whitespace becomes a space,
/// then whitespace runs are collapsed and the ends trimmed.
///
/// # Examples
///
/// ```
/// use vixen_scraper::search::normalize_search_term;
///
/// assert_eq!(normalize_search_term("  Jane_Doe & Friends! "), "Jane Doe Friends");
/// ```
pub fn normalize_search_term(term: &str) -> String {
    let replaced: String = term
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    collapse_whitespace(&replaced)
}

/// Builds the search endpoint URL for a normalized term.
pub fn build_search_url(base_url: &str, term: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
    format!(
        "{}{}?{}={}",
        base_url.trim_end_matches('/'),
        SEARCH_PATH,
        SEARCH_QUERY_PARAM,
        encoded
    )
}

/// Parses a search result page into ranked candidates.
///
/// See [`parse_search_results`].
pub fn parse_search_page(html: &str, base_url: &str, term: &str) -> Vec<Candidate> {
    let document = Html::parse_document(html);
    parse_search_results(&document, base_url, term)
}

/// Extracts ranked candidates from a search result document.
///
/// Anchors without a resolvable title, anchors whose URL was already accepted, and
/// anchors scoring zero are skipped. The result is sorted by descending score, ties
/// keeping page order.
pub fn parse_search_results(document: &Html, base_url: &str, term: &str) -> Vec<Candidate> {
    let mut anchors: Vec<_> = document.select(&PRIMARY_RESULT_SELECTOR).collect();
    if anchors.is_empty() {
        anchors = document.select(&SECONDARY_RESULT_SELECTOR).collect();
    }
    debug!("Found {} potential results", anchors.len());

    let mut seen_urls = HashSet::new();
    let mut candidates = Vec::new();

    for anchor in anchors {
        let href = anchor.value().attr("href").unwrap_or_default();

        let Some(title) = resolve_title(&anchor) else {
            debug!("Skipping result without title: {href}");
            continue;
        };

        let url = absolute_url(base_url, href);
        if seen_urls.contains(&url) {
            continue;
        }

        let score = score_candidate(term, &title, &url);
        if score <= 0.0 {
            debug!("Discarding '{title}': no match for '{term}'");
            continue;
        }

        let segment = last_path_segment(&url);
        let external_id = if segment.is_empty() {
            url.clone()
        } else {
            segment
        };

        debug!("Found search result: '{title}' with score: {score}");
        seen_urls.insert(url.clone());
        candidates.push(Candidate::new(title, url, external_id, score));
    }

    rank_candidates(&mut candidates);
    candidates
}

/// Sorts candidates by descending score. The sort is stable, so ties keep their order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
}
