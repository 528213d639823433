//! Per-field parsers for detail page text.
//!
//! Each parser is independent and reports malformed input as a `FieldParseError`;
//! the caller decides whether the field is omitted or defaulted.

use chrono::NaiveDate;
use scraper::ElementRef;

use crate::config::RUNTIME_ROUND_UP_SECONDS;
use crate::error_handling::FieldParseError;
use crate::utils::srcset::last_candidate_url;

/// Release date format, e.g. "January 05, 2024". Abbreviated months are accepted too.
const RELEASE_DATE_FORMAT: &str = "%B %d, %Y";

/// Splits a numbered episode title into its series name.
///
/// When the title ends in digits the trailing digit run is dropped and the trimmed
/// remainder is returned. Titles without a trailing number, or consisting only of
/// digits, have no collection.
///
/// # Examples
///
/// ```
/// use vixen_scraper::detail::split_collection_name;
///
/// assert_eq!(split_collection_name("Acme Show 12").as_deref(), Some("Acme Show"));
/// assert_eq!(split_collection_name("Acme Show"), None);
/// ```
pub fn split_collection_name(title: &str) -> Option<String> {
    let stripped = title.trim_end_matches(|c: char| c.is_ascii_digit());
    if stripped.len() == title.len() {
        return None;
    }
    let name = stripped.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Parses a "Month DD, YYYY" release date.
pub fn parse_release_date(text: &str) -> Result<NaiveDate, FieldParseError> {
    NaiveDate::parse_from_str(text.trim(), RELEASE_DATE_FORMAT)
        .map_err(|_| FieldParseError::ReleaseDate(text.to_string()))
}

/// Parses a "minutes:seconds" run length into whole minutes.
///
/// Seconds of 30 or more round the minute count up.
///
/// # Examples
///
/// ```
/// use vixen_scraper::detail::parse_runtime;
///
/// assert_eq!(parse_runtime("32:45"), Ok(33));
/// assert_eq!(parse_runtime("32:10"), Ok(32));
/// assert!(parse_runtime("32").is_err());
/// ```
pub fn parse_runtime(text: &str) -> Result<u32, FieldParseError> {
    let err = || FieldParseError::Runtime(text.to_string());

    let mut parts = text.trim().split(':');
    let minutes = parts.next().ok_or_else(err)?;
    let seconds = parts.next().ok_or_else(err)?;

    let minutes: u32 = minutes.trim().parse().map_err(|_| err())?;
    let seconds: u32 = seconds.trim().parse().map_err(|_| err())?;

    if seconds >= RUNTIME_ROUND_UP_SECONDS {
        minutes.checked_add(1).ok_or_else(err)
    } else {
        Ok(minutes)
    }
}

/// Parses a decimal rating such as "8.4".
pub fn parse_rating(text: &str) -> Result<f32, FieldParseError> {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| FieldParseError::Rating(text.to_string()))
}

/// Picks the best URL of a poster image.
///
/// The last (highest-resolution) `srcset` candidate wins; the plain `src` attribute is
/// the fallback.
pub fn select_artwork_url(image: &ElementRef) -> Option<String> {
    let element = image.value();
    element
        .attr("srcset")
        .and_then(last_candidate_url)
        .or_else(|| element.attr("src").map(str::trim).map(str::to_string))
        .filter(|url| !url.is_empty())
}
