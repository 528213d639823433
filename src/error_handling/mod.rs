//! Error handling.
//!
//! This module provides:
//! - Error type definitions for the provider's two hard failures
//! - Field-level parse errors, which are always caught and never reach the caller
//! - Categorization of `reqwest` failures into transport error kinds
//!
//! Error types are split into:
//! - **Hard failures** (`ScrapeError`): transport failures and a missing detail URL
//! - **Field failures** (`FieldParseError`): malformed optional data that is defaulted or omitted

mod categorization;
mod types;

// Re-export public API
pub use categorization::transport_error;
pub use types::{
    FieldParseError, InitializationError, ScrapeError, TransportError, TransportErrorKind,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_transport_error_kinds_have_descriptions() {
        for kind in TransportErrorKind::iter() {
            assert!(!kind.as_str().is_empty(), "{kind:?} has no description");
        }
    }

    #[test]
    fn test_scrape_error_display_transport() {
        let err = ScrapeError::from(TransportError {
            url: "https://www.vixen.com/search?q=x".to_string(),
            kind: TransportErrorKind::Timeout,
            message: "operation timed out".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("https://www.vixen.com/search?q=x"));
        assert!(msg.contains("timeout"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_scrape_error_display_missing_url() {
        let err = ScrapeError::MissingUrl;
        assert_eq!(err.to_string(), "No URL for metadata scraping");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_field_parse_error_display() {
        let err = FieldParseError::Runtime("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
