//! Detail page extraction.
//!
//! A detail page is read in two steps. `parse_detail_page` copies the raw field text
//! out of the document into a `DetailPage`; `assemble_record` then applies the field
//! parsers and the fallback policy (omit or default) to produce a `MetadataRecord`.
//! Performer photos are resolved by the provider between the two steps, since they
//! need one more fetch per performer.

mod fields;

use std::sync::LazyLock;

use chrono::Datelike;
use log::{debug, warn};
use scraper::{Html, Selector};

use crate::config::{ProviderConfig, DEFAULT_VOTE_COUNT, PROVIDER_ID};
use crate::models::{ArtworkKind, ArtworkRef, CastMember, CastRole, MetadataRecord, RatingValue};
use crate::utils::{absolute_url, element_text, last_path_segment};

pub use fields::{
    parse_rating, parse_release_date, parse_runtime, select_artwork_url, split_collection_name,
};

// CSS selector strings
const TITLE_SELECTOR_STR: &str = "h1[data-test-component='VideoTitle']";
const MODELS_SELECTOR_STR: &str = "div[data-test-component='VideoModels']";
const RELEASE_DATE_SELECTOR_STR: &str = "span[data-test-component='ReleaseDateFormatted']";
const DIRECTOR_SELECTOR_STR: &str = "span[data-test-component='DirectorText']";
const PLOT_SELECTOR_STR: &str = "div.PlaybackContent__StyledDescription-sc-56y4pr-15 p";
const RUNTIME_SELECTOR_STR: &str = "span[data-test-component='RunLengthFormatted']";
const RATING_SELECTOR_STR: &str = "span[data-test-component='RatingNumber']";
pub(crate) const POSTER_IMAGE_SELECTOR_STR: &str = "img.ProgressiveImage__StyledImg-ptxr6s-2";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(TITLE_SELECTOR_STR, "video title"));
static MODELS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(MODELS_SELECTOR_STR, "video models"));
static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe("a", "model links"));
static RELEASE_DATE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(RELEASE_DATE_SELECTOR_STR, "release date")
});
static DIRECTOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(DIRECTOR_SELECTOR_STR, "director"));
static PLOT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(PLOT_SELECTOR_STR, "description"));
static RUNTIME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(RUNTIME_SELECTOR_STR, "run length"));
static RATING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(RATING_SELECTOR_STR, "rating"));
pub(crate) static POSTER_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(POSTER_IMAGE_SELECTOR_STR, "poster image")
});

/// A performer link from the models block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformerLink {
    /// Link text
    pub name: String,
    /// Absolute profile page URL, when the link has a target
    pub profile_url: Option<String>,
}

/// Raw field text of a detail page, owned and detached from the document.
///
/// `None` means the element was absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPage {
    /// Heading text
    pub title: Option<String>,
    /// Links of the models block, in page order
    pub performers: Vec<PerformerLink>,
    /// Director line, when non-empty
    pub director: Option<String>,
    /// First description paragraph, when non-empty
    pub plot: Option<String>,
    /// Release date text, e.g. "January 05, 2024"
    pub release_date: Option<String>,
    /// Run length text, e.g. "32:45"
    pub runtime: Option<String>,
    /// Best poster image URL
    pub artwork_url: Option<String>,
    /// Rating text, e.g. "8.4"
    pub rating: Option<String>,
}

/// Parses a detail page. See [`extract_detail_page`].
pub fn parse_detail_page(html: &str, base_url: &str) -> DetailPage {
    let document = Html::parse_document(html);
    extract_detail_page(&document, base_url)
}

/// Copies the raw field text out of a detail page document.
///
/// Relative performer links are resolved against `base_url`.
pub fn extract_detail_page(document: &Html, base_url: &str) -> DetailPage {
    let first_text = |selector: &Selector| {
        document
            .select(selector)
            .next()
            .map(|element| element_text(&element))
    };

    let performers = document
        .select(&MODELS_SELECTOR)
        .next()
        .map(|models| {
            models
                .select(&LINK_SELECTOR)
                .filter_map(|link| {
                    let name = element_text(&link);
                    if name.is_empty() {
                        debug!("Skipping performer link without a name");
                        return None;
                    }
                    let profile_url = link
                        .value()
                        .attr("href")
                        .map(str::trim)
                        .filter(|href| !href.is_empty())
                        .map(|href| absolute_url(base_url, href));
                    Some(PerformerLink { name, profile_url })
                })
                .collect()
        })
        .unwrap_or_default();

    DetailPage {
        title: first_text(&TITLE_SELECTOR),
        performers,
        director: first_text(&DIRECTOR_SELECTOR).filter(|name| !name.is_empty()),
        plot: first_text(&PLOT_SELECTOR).filter(|plot| !plot.is_empty()),
        release_date: first_text(&RELEASE_DATE_SELECTOR),
        runtime: first_text(&RUNTIME_SELECTOR),
        artwork_url: document
            .select(&POSTER_IMAGE_SELECTOR)
            .next()
            .and_then(|image| select_artwork_url(&image)),
        rating: first_text(&RATING_SELECTOR),
    }
}

/// Builds the cast entry of a performer.
pub fn performer(
    link: PerformerLink,
    photo_url: Option<String>,
    config: &ProviderConfig,
) -> CastMember {
    CastMember {
        name: link.name,
        role: CastRole::Performer,
        profile_url: link.profile_url,
        photo_url: photo_url.filter(|url| !url.is_empty()),
        auto_update_photo: config.capabilities.actor_photo_auto_update,
    }
}

/// Applies the field parsers and fallback policy to a parsed detail page.
///
/// `performers` is the page's performer list with photos already resolved. Missing or
/// malformed optional fields are omitted; runtime and rating fall back to the
/// configured defaults so they are always present.
///
/// # Arguments
///
/// * `page` - Raw field text of the detail page
/// * `performers` - Performer cast entries, in page order
/// * `url` - The detail page URL (source of the external id)
/// * `language` - Request language, tags the poster artwork
/// * `config` - Provider configuration (defaults and fixed tags)
pub fn assemble_record(
    page: DetailPage,
    performers: Vec<CastMember>,
    url: &str,
    language: Option<&str>,
    config: &ProviderConfig,
) -> MetadataRecord {
    let title = page.title.unwrap_or_default();
    let collection_name = split_collection_name(&title);
    if let Some(name) = &collection_name {
        debug!("Added movie to set: {name}");
    }

    let release_date = page
        .release_date
        .and_then(|text| match parse_release_date(&text) {
            Ok(date) => Some(date),
            Err(e) => {
                warn!("{e}");
                None
            }
        });
    let year = release_date.map(|date| date.year());

    let runtime_minutes = match page.runtime.as_deref().map(parse_runtime) {
        Some(Ok(minutes)) => minutes,
        Some(Err(e)) => {
            warn!("{e}; using default of {} minutes", config.default_runtime_minutes);
            config.default_runtime_minutes
        }
        None => config.default_runtime_minutes,
    };

    let rating_value = match page.rating.as_deref().map(parse_rating) {
        Some(Ok(value)) => value,
        Some(Err(e)) => {
            warn!("{e}; using default rating {}", config.default_rating);
            config.default_rating
        }
        None => config.default_rating,
    };

    let artwork = page
        .artwork_url
        .map(|preview_url| ArtworkRef {
            preview_url,
            kind: ArtworkKind::Poster,
            language: language.map(str::to_string),
        })
        .into_iter()
        .collect();

    let director = page.director.map(CastMember::director);
    let mut cast = performers;
    cast.extend(director.clone());

    MetadataRecord {
        provider_id: PROVIDER_ID,
        external_id: last_path_segment(url),
        original_title: title.clone(),
        title,
        collection_name,
        cast,
        director,
        release_date,
        year,
        plot: page.plot,
        runtime_minutes,
        artwork,
        genre: config.genre().to_string(),
        language: config.language.clone(),
        certification: config.certification.clone(),
        rating: RatingValue::new(rating_value, DEFAULT_VOTE_COUNT),
    }
}
