//! The metadata provider: search and detail scraping against the site.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::config::{ProviderConfig, FALLBACK_SCORE_FACTOR};
use crate::detail::{assemble_record, parse_detail_page, performer};
use crate::error_handling::{InitializationError, ScrapeError, TransportError};
use crate::fetch::fetch_html;
use crate::initialization::init_client;
use crate::models::{Candidate, MetadataRecord, MetadataRequest, SearchQuery};
use crate::photo::parse_photo_page;
use crate::search::{
    build_search_url, normalize_search_term, parse_search_page, rank_candidates,
    resolve_search_term,
};

/// Words shorter than this are not tried on their own by the fallback search.
const FALLBACK_WORD_MIN_LEN: usize = 4;

/// Searches the site and scrapes detail pages into metadata records.
///
/// Holds the read-only configuration and the HTTP client. Calls share no mutable
/// state, so a provider can be cloned or shared across tasks freely.
///
/// # Example
///
/// ```no_run
/// use vixen_scraper::{MetadataRequest, ProviderConfig, SearchQuery, VixenProvider};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = VixenProvider::new(ProviderConfig::default())?;
/// let candidates = provider
///     .search(&SearchQuery::new("Vixen.24.01.05.SampleName.1080p"))
///     .await?;
/// if let Some(best) = candidates.first() {
///     let record = provider
///         .get_metadata(&MetadataRequest::for_candidate(best))
///         .await?;
///     println!("{} ({} min)", record.title, record.runtime_minutes);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VixenProvider {
    config: Arc<ProviderConfig>,
    client: reqwest::Client,
}

impl VixenProvider {
    /// Creates a provider with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, InitializationError> {
        let client = init_client(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    /// The configuration this provider was built with.
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Searches for candidates matching a query.
    ///
    /// Returns candidates sorted by descending score, unique by URL. The list is empty
    /// when no search term can be derived or nothing on the result page matches. When a
    /// multi-word term finds nothing, each word of four or more characters is searched
    /// alone until one yields results; those results are scored down by 0.7.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Transport` if the result page cannot be fetched. Failures
    /// of the single-word fallback searches are logged and ignored.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Candidate>, ScrapeError> {
        debug!("searching for: {query:?}");

        let term = resolve_search_term(query)
            .map(|term| normalize_search_term(&term))
            .unwrap_or_default();
        if term.is_empty() {
            warn!("Cannot search without search term");
            return Ok(Vec::new());
        }

        let mut candidates = self.search_term(&term).await.map_err(|e| {
            error!("Error searching for '{term}': {e}");
            e
        })?;

        if candidates.is_empty() && term.contains(' ') {
            candidates = self.fallback_search(&term).await;
        }

        rank_candidates(&mut candidates);
        info!(
            "Returning {} result{} for '{term}'",
            candidates.len(),
            if candidates.len() == 1 { "" } else { "s" }
        );
        Ok(candidates)
    }

    /// Fetches and parses the result page of one normalized term.
    async fn search_term(&self, term: &str) -> Result<Vec<Candidate>, TransportError> {
        let url = build_search_url(&self.config.base_url, term);
        debug!("Searching with URL: {url}");
        let body = fetch_html(&self.client, &url, self.config.search_timeout).await?;
        Ok(parse_search_page(&body, &self.config.base_url, term))
    }

    /// Retries a multi-word term one long word at a time.
    async fn fallback_search(&self, term: &str) -> Vec<Candidate> {
        let words = term
            .split_whitespace()
            .filter(|word| word.chars().count() >= FALLBACK_WORD_MIN_LEN);

        for word in words {
            match self.search_term(word).await {
                Ok(mut results) if !results.is_empty() => {
                    for candidate in &mut results {
                        candidate.score *= FALLBACK_SCORE_FACTOR;
                        debug!(
                            "Added fallback result: '{}' with adjusted score: {}",
                            candidate.title, candidate.score
                        );
                    }
                    return results;
                }
                Ok(_) => debug!("Fallback search with word '{word}' found nothing"),
                Err(e) => debug!("Error during fallback search with word '{word}': {e}"),
            }
        }
        Vec::new()
    }

    /// Scrapes the full metadata record of a detail page.
    ///
    /// Every optional field the page lacks is omitted; runtime and rating are always
    /// present, defaulted when missing or malformed. Each performer's profile page is
    /// fetched, one after another, to resolve a photo.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::MissingUrl` if the request has no URL and
    /// `ScrapeError::Transport` if the detail page cannot be fetched.
    pub async fn get_metadata(
        &self,
        request: &MetadataRequest,
    ) -> Result<MetadataRecord, ScrapeError> {
        debug!("getMetadata() - {request:?}");

        let url = request
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ScrapeError::MissingUrl)?;

        let body = fetch_html(&self.client, url, self.config.detail_timeout)
            .await
            .map_err(|e| {
                error!("Error getting metadata: {e}");
                e
            })?;
        let mut page = parse_detail_page(&body, &self.config.base_url);

        let mut performers = Vec::with_capacity(page.performers.len());
        for link in std::mem::take(&mut page.performers) {
            let photo = match &link.profile_url {
                Some(profile_url) => Some(self.resolve_photo(profile_url).await),
                None => None,
            };
            if let Some(photo) = photo.as_deref().filter(|p| !p.is_empty()) {
                debug!("Set thumb URL for actor {}: {photo}", link.name);
            }
            performers.push(performer(link, photo, &self.config));
        }

        Ok(assemble_record(
            page,
            performers,
            url,
            request.language.as_deref(),
            &self.config,
        ))
    }

    /// Resolves the photo URL of a performer from their profile page.
    ///
    /// Never fails: any fetch or parse problem yields an empty string, meaning "no
    /// photo available".
    pub async fn resolve_photo(&self, profile_url: &str) -> String {
        if profile_url.trim().is_empty() {
            return String::new();
        }
        debug!("Getting actor photo from: {profile_url}");

        match fetch_html(&self.client, profile_url, self.config.detail_timeout).await {
            Ok(body) => parse_photo_page(&body, profile_url).unwrap_or_else(|| {
                debug!("Could not find actor photo on {profile_url}");
                String::new()
            }),
            Err(e) => {
                warn!("Error getting actor photo: {e}");
                String::new()
            }
        }
    }
}
