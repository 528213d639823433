//! Search keyword extraction from release filenames.
//!
//! Releases are commonly named `Site.YY.MM.DD.Name.Resolution...`. The word run after
//! the date is the performer or scene name and makes a far better search term than
//! the whole filename.

use regex::Regex;
use std::sync::LazyLock;

/// `YY.MM.DD.<word>.` anywhere in the input; the word run is captured.
static DATED_RELEASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2}\.\d{2}\.\d{2}\.(\w+)\.").unwrap_or_else(|e| {
        panic!("Failed to compile dated release pattern: {e}. This is a programming error.")
    })
});

/// Extracts a search keyword from a filename or query.
///
/// Returns the word run following the first `YY.MM.DD.` date when the input follows
/// the dated-release convention, and the input unchanged otherwise. Callers must treat
/// a non-matching input as already clean.
///
/// # Examples
///
/// ```
/// use vixen_scraper::extract_keyword;
///
/// assert_eq!(extract_keyword("Vixen.24.01.05.SampleName.1080p"), "SampleName");
/// assert_eq!(extract_keyword("Sample Name"), "Sample Name");
/// ```
pub fn extract_keyword(text: &str) -> String {
    match DATED_RELEASE_PATTERN.captures(text) {
        Some(captures) => captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        None => text.to_string(),
    }
}
