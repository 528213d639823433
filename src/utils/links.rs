//! URL resolution helpers.

use url::Url;

/// Resolves a link target found on a page against the site base URL.
///
/// Absolute `http(s)` links are returned unchanged. Relative links are joined onto
/// `base_url`; if the base does not parse, the two are concatenated.
pub fn absolute_url(base_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match Url::parse(base_url).and_then(|base| base.join(href)) {
        Ok(joined) => joined.to_string(),
        Err(e) => {
            log::debug!("Could not join '{href}' onto '{base_url}': {e}");
            format!("{}{}", base_url.trim_end_matches('/'), href)
        }
    }
}

/// Returns the last non-empty path segment of a URL or path.
///
/// Query strings and fragments are ignored. Returns an empty string when the path
/// has no segments.
pub fn last_path_segment(url: &str) -> String {
    if let Ok(parsed) = Url::parse(url) {
        return parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).next_back())
            .unwrap_or_default()
            .to_string();
    }
    let path = url.split(['?', '#']).next().unwrap_or_default();
    path.split('/')
        .filter(|s| !s.is_empty())
        .next_back()
        .unwrap_or_default()
        .to_string()
}
