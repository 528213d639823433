//! vixen_scraper library: movie metadata from vixen.com
//!
//! This library searches the site for a release filename or title, ranks the result
//! links against the search term, and scrapes a chosen detail page into a complete
//! metadata record (title, cast with photos, release date, plot, runtime, poster,
//! rating).
//!
//! # Example
//!
//! ```no_run
//! use vixen_scraper::{MetadataRequest, ProviderConfig, SearchQuery, VixenProvider};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = VixenProvider::new(ProviderConfig::default())?;
//!
//! let candidates = provider.search(&SearchQuery::new("Jane Doe")).await?;
//! for candidate in &candidates {
//!     println!("{:.2} {} {}", candidate.score, candidate.title, candidate.url);
//! }
//!
//! if let Some(best) = candidates.first() {
//!     let record = provider
//!         .get_metadata(&MetadataRequest::for_candidate(best))
//!         .await?;
//!     println!("{} ({:?})", record.title, record.release_date);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod detail;
mod error_handling;
mod fetch;
pub mod initialization;
mod keyword;
mod models;
pub mod photo;
mod provider;
pub mod search;
mod utils;

// Re-export public API
pub use config::{HostCapabilities, LogFormat, LogLevel, ProviderConfig};
pub use error_handling::{
    FieldParseError, InitializationError, ScrapeError, TransportError, TransportErrorKind,
};
pub use keyword::extract_keyword;
pub use models::{
    ArtworkKind, ArtworkRef, Candidate, CastMember, CastRole, MetadataRecord, MetadataRequest,
    RatingValue, SearchQuery,
};
pub use provider::VixenProvider;
