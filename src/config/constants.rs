//! Configuration constants.
//!
//! This module defines the fixed values the provider uses as defaults: the site
//! endpoints, request timeouts, and the values substituted for metadata fields the
//! detail page does not carry.

use std::time::Duration;

/// Provider identifier attached to every candidate and record.
pub const PROVIDER_ID: &str = "vixen";

/// Media type reported for every candidate.
pub const MEDIA_TYPE: &str = "movie";

/// Site base URL. Relative links found on result and detail pages are resolved against it.
pub const BASE_URL: &str = "https://www.vixen.com";

/// Path of the keyword search endpoint (relative to `BASE_URL`).
pub const SEARCH_PATH: &str = "/search";

/// Query parameter carrying the percent-encoded search term.
pub const SEARCH_QUERY_PARAM: &str = "q";

/// Default User-Agent string for HTTP requests.
///
/// The site serves a stripped-down page to clients that do not look like a browser,
/// so every request presents a desktop Chrome identity.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Network operation timeouts
/// Search page request timeout. Result pages are heavy and render slowly.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
/// Detail page and actor profile request timeout
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(10);

// Field defaults
/// Runtime used when the detail page has no parseable "minutes:seconds" run length
pub const DEFAULT_RUNTIME_MINUTES: u32 = 35;
/// Rating used when the detail page has no parseable rating
pub const DEFAULT_RATING: f32 = 7.5;
/// Upper bound of the site's rating scale
pub const RATING_MAX_VALUE: u32 = 10;
/// Vote count attached to every rating (the site does not publish one)
pub const DEFAULT_VOTE_COUNT: u32 = 1;

// Fixed classification tags
/// Free-text genre label, used when the host accepts arbitrary genre strings
pub const GENRE_LABEL: &str = "Porn";
/// Enumerated genre used when the host only accepts its own genre list
pub const GENRE_FALLBACK: &str = "Erotic";
/// Content language tag
pub const LANGUAGE_TAG: &str = "en";
/// Content certification tag
pub const CERTIFICATION_TAG: &str = "US_NC17";

// Search ranking
/// Multiplier applied to results found by the single-word fallback search
pub const FALLBACK_SCORE_FACTOR: f32 = 0.7;

/// Seconds at or above which the runtime minute count is rounded up
pub const RUNTIME_ROUND_UP_SECONDS: u32 = 30;
