//! Search and metadata records produced by the provider.
//!
//! Every value here is built and owned by the call that returns it.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{MEDIA_TYPE, PROVIDER_ID, RATING_MAX_VALUE};

/// Input of a search: a release filename or a free-form title.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Raw query text
    pub query: String,
    /// Title supplied by the host, used when the query yields no search term
    pub title: Option<String>,
}

impl SearchQuery {
    /// Query with no fallback title.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            title: None,
        }
    }

    /// Sets the fallback title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// One ranked search-result match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    /// Always `"vixen"`
    pub provider_id: &'static str,
    /// Always `"movie"`
    pub media_type: &'static str,
    /// Display title resolved from the result card
    pub title: String,
    /// Absolute detail page URL, unique within one result set
    pub url: String,
    /// Last path segment of `url`
    pub external_id: String,
    /// Heuristic match quality, always above zero
    pub score: f32,
}

impl Candidate {
    pub(crate) fn new(title: String, url: String, external_id: String, score: f32) -> Self {
        Self {
            provider_id: PROVIDER_ID,
            media_type: MEDIA_TYPE,
            title,
            url,
            external_id,
            score,
        }
    }
}

/// Input of a metadata fetch.
#[derive(Debug, Clone, Default)]
pub struct MetadataRequest {
    /// Detail page URL
    pub url: Option<String>,
    /// Language the host is scraping for; tags the poster artwork
    pub language: Option<String>,
}

impl MetadataRequest {
    /// Request for a detail page URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            language: None,
        }
    }

    /// Request for the detail page of a search result.
    pub fn for_candidate(candidate: &Candidate) -> Self {
        Self::new(candidate.url.clone())
    }

    /// Sets the artwork language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Role of a cast member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CastRole {
    /// Listed in the models block
    Performer,
    /// Taken from the director line
    Director,
}

/// A performer or the director of a movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastMember {
    /// Name as shown on the page
    pub name: String,
    /// Performer or director
    pub role: CastRole,
    /// Absolute profile page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    /// Portrait URL, absent when none could be resolved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Ask the host to refresh this person's portrait itself
    pub auto_update_photo: bool,
}

impl CastMember {
    /// Director entry; directors have no profile link or photo.
    pub fn director(name: String) -> Self {
        Self {
            name,
            role: CastRole::Director,
            profile_url: None,
            photo_url: None,
            auto_update_photo: false,
        }
    }
}

/// Kind of artwork image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArtworkKind {
    /// Main cover image
    Poster,
}

/// Reference to a remote artwork image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtworkRef {
    /// Image URL
    pub preview_url: String,
    /// What the image depicts
    pub kind: ArtworkKind,
    /// Request language, when one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// A rating on a 0-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingValue {
    /// Rating value
    pub value: f32,
    /// Top of the scale, always 10
    pub max_value: u32,
    /// Number of votes behind the value
    pub vote_count: u32,
}

impl RatingValue {
    /// Rating on the site's 10-point scale with the given vote count.
    pub fn new(value: f32, vote_count: u32) -> Self {
        Self {
            value,
            max_value: RATING_MAX_VALUE,
            vote_count,
        }
    }
}

/// Full metadata of one movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    /// Always `"vixen"`
    pub provider_id: &'static str,
    /// Last path segment of the detail URL
    pub external_id: String,
    /// Page title, empty when the page has none
    pub title: String,
    /// Same as `title`
    pub original_title: String,
    /// Series name of numbered episodes ("Acme Show 12" belongs to "Acme Show")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_name: Option<String>,
    /// Performers in page order, followed by the director when known
    pub cast: Vec<CastMember>,
    /// The director, also present at the end of `cast`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<CastMember>,
    /// Parsed release date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Year of `release_date`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Description paragraph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Whole minutes, defaulted when the page has none
    pub runtime_minutes: u32,
    /// Poster artwork, at most one entry
    pub artwork: Vec<ArtworkRef>,
    /// Genre tag chosen by the host's capabilities
    pub genre: String,
    /// Fixed language tag
    pub language: String,
    /// Fixed certification tag
    pub certification: String,
    /// Page rating or the configured default
    pub rating: RatingValue,
}
