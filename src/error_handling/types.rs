//! Error type definitions.
//!
//! This module defines all error types used throughout the provider.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Hard failures surfaced by `search` and `get_metadata`.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// A page could not be fetched.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// `get_metadata` was called without a usable URL.
    #[error("No URL for metadata scraping")]
    MissingUrl,
}

impl ScrapeError {
    /// Returns true for fetch failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, ScrapeError::Transport(_))
    }
}

/// A failed HTTP fetch: network failure, non-2xx status, or timeout.
#[derive(Error, Debug, Clone)]
#[error("Failed to fetch {url} ({kind}): {message}")]
pub struct TransportError {
    /// URL that was requested
    pub url: String,
    /// What went wrong
    pub kind: TransportErrorKind,
    /// Human-readable cause
    pub message: String,
}

/// Categories of transport failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TransportErrorKind {
    /// Request could not be built (bad URL)
    Builder,
    /// Redirect policy failure
    Redirect,
    /// Request exceeded its timeout
    Timeout,
    /// Connection could not be established
    Connect,
    /// Failure while sending the request
    Request,
    /// Failure while reading the response body
    Body,
    /// Response body could not be decoded
    Decode,
    /// Server answered with a non-2xx status
    Status(u16),
    /// Anything reqwest does not classify
    Other,
}

impl std::fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportErrorKind::Status(code) => write!(f, "{} {}", self.as_str(), code),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl TransportErrorKind {
    /// Short lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportErrorKind::Builder => "HTTP request builder error",
            TransportErrorKind::Redirect => "HTTP request redirect error",
            TransportErrorKind::Timeout => "HTTP request timeout",
            TransportErrorKind::Connect => "HTTP connect error",
            TransportErrorKind::Request => "HTTP request error",
            TransportErrorKind::Body => "HTTP body error",
            TransportErrorKind::Decode => "HTTP decode error",
            TransportErrorKind::Status(_) => "HTTP status",
            TransportErrorKind::Other => "HTTP error",
        }
    }
}

/// Malformed optional field on a detail page.
///
/// Returned by the field parsers and always caught by the extractor, which logs it and
/// omits or defaults the field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldParseError {
    /// Release date text not in "Month DD, YYYY" form
    #[error("Could not parse release date: '{0}'")]
    ReleaseDate(String),

    /// Run length text not in "minutes:seconds" form
    #[error("Could not parse runtime: '{0}'")]
    Runtime(String),

    /// Rating text that is not a finite number
    #[error("Could not parse rating: '{0}'")]
    Rating(String),
}
