//! Actor photo resolution from profile pages.
//!
//! The profile image is located by trying, in order:
//! 1. the structural selector of the profile sidebar picture,
//! 2. an image whose alt text contains the performer name derived from the URL,
//! 3. the generic poster image selector.
//!
//! From the located image the `2x` `srcset` candidate is preferred, then the last
//! `srcset` candidate, then `src`.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::detail::POSTER_IMAGE_SELECTOR;
use crate::utils::srcset::{decode_ampersands, density_2x_url, last_candidate_url};
use crate::utils::{last_path_segment, parse_selector_with_fallback};

const PROFILE_IMAGE_SELECTOR_STR: &str = "#__next > main > section > section > aside > div > picture > img";

static PROFILE_IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    crate::utils::parse_selector_unsafe(PROFILE_IMAGE_SELECTOR_STR, "profile image")
});

/// Performer name as written in image alt text, derived from the profile URL.
///
/// `https://www.vixen.com/models/jane-doe` gives `"jane doe"`.
pub fn name_from_profile_url(profile_url: &str) -> String {
    last_path_segment(profile_url).replace('-', " ")
}

/// Parses a profile page. See [`select_photo_url`].
pub fn parse_photo_page(html: &str, profile_url: &str) -> Option<String> {
    let document = Html::parse_document(html);
    select_photo_url(&document, profile_url)
}

/// Finds the best photo URL on a profile page, or `None` when there is no usable image.
pub fn select_photo_url(document: &Html, profile_url: &str) -> Option<String> {
    let image = find_profile_image(document, profile_url)?;
    log::trace!("Found image element: {}", image.html());
    photo_url_from_image(&image)
}

fn find_profile_image<'a>(document: &'a Html, profile_url: &str) -> Option<ElementRef<'a>> {
    if let Some(image) = document.select(&PROFILE_IMAGE_SELECTOR).next() {
        return Some(image);
    }

    let name = name_from_profile_url(profile_url);
    if !name.is_empty() {
        let by_alt = parse_selector_with_fallback(
            &format!("img[alt*='{name}']"),
            "actor photo lookup",
        );
        if let Some(image) = document.select(&by_alt).next() {
            return Some(image);
        }
    }

    document.select(&POSTER_IMAGE_SELECTOR).next()
}

/// Picks the photo URL of an image element.
pub fn photo_url_from_image(image: &ElementRef) -> Option<String> {
    let element = image.value();

    if let Some(srcset) = element.attr("srcset").filter(|s| !s.trim().is_empty()) {
        if let Some(url) = density_2x_url(srcset) {
            log::debug!("Extracted high-res (2x) photo URL: {url}");
            return Some(decode_ampersands(&url));
        }
        if let Some(url) = last_candidate_url(srcset) {
            log::debug!("Extracted highest-res photo URL from srcset: {url}");
            return Some(decode_ampersands(&url));
        }
    }

    element
        .attr("src")
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(decode_ampersands)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_URL: &str = "https://www.vixen.com/models/jane-doe";

    fn photo(html: &str) -> Option<String> {
        parse_photo_page(html, PROFILE_URL)
    }

    #[test]
    fn test_structural_selector_with_2x_candidate() {
        let html = r#"
            <div id="__next"><main><section><section><aside><div><picture>
              <img src="https://cdn/s.jpg"
                   srcset="https://cdn/a.jpg?w=1&amp;h=1 1x, https://cdn/b.jpg?w=2&amp;h=2 2x">
            </picture></div></aside></section></section></main></div>
            <img class="ProgressiveImage__StyledImg-ptxr6s-2" src="https://cdn/poster.jpg">
        "#;
        assert_eq!(photo(html).as_deref(), Some("https://cdn/b.jpg?w=2&h=2"));
    }

    #[test]
    fn test_alt_text_fallback() {
        let html = r#"
            <img alt="someone else" src="https://cdn/other.jpg">
            <img alt="Portrait of jane doe" src="https://cdn/jane.jpg">
        "#;
        assert_eq!(photo(html).as_deref(), Some("https://cdn/jane.jpg"));
    }

    #[test]
    fn test_poster_selector_fallback_uses_last_candidate() {
        let html = r#"
            <img class="ProgressiveImage__StyledImg-ptxr6s-2"
                 srcset="https://cdn/p-320.jpg 320w, https://cdn/p-1280.jpg 1280w">
        "#;
        assert_eq!(photo(html).as_deref(), Some("https://cdn/p-1280.jpg"));
    }

    #[test]
    fn test_src_fallback_decodes_ampersands() {
        let html = r#"<img alt="jane doe" src="https://cdn/j.jpg?a=1&amp;amp;b=2">"#;
        // The parser decodes one level of escaping, the resolver decodes the second
        assert_eq!(photo(html).as_deref(), Some("https://cdn/j.jpg?a=1&b=2"));
    }

    #[test]
    fn test_no_image() {
        assert_eq!(photo("<html><body><p>Profile</p></body></html>"), None);
        assert_eq!(photo(r#"<img alt="jane doe">"#), None);
    }

    #[test]
    fn test_name_with_quote_does_not_panic() {
        let html = r#"<img alt="x" src="https://cdn/x.jpg">"#;
        assert_eq!(parse_photo_page(html, "https://www.vixen.com/models/o'neil"), None);
    }

    #[test]
    fn test_name_from_profile_url() {
        assert_eq!(name_from_profile_url(PROFILE_URL), "jane doe");
        assert_eq!(name_from_profile_url("https://www.vixen.com/"), "");
    }
}
