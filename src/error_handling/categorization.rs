//! Transport error categorization.
//!
//! This module maps `reqwest` failures onto `TransportErrorKind`.

use super::types::{TransportError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// HTTP status errors are checked first so a non-2xx response keeps its code.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if let Some(status) = error.status() {
        return TransportErrorKind::Status(status.as_u16());
    }

    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Wraps a `reqwest::Error` raised while fetching `url`.
pub fn transport_error(url: &str, error: &reqwest::Error) -> TransportError {
    TransportError {
        url: url.to_string(),
        kind: categorize_reqwest_error(error),
        message: error.to_string(),
    }
}
