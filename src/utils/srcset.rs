//! Responsive-image candidate list (`srcset`) parsing.
//!
//! A `srcset` value is a comma-separated list of `url descriptor` pairs, e.g.
//! `a.jpg 1x, b.jpg 2x` or `small.jpg 320w, large.jpg 1280w`. The site lists
//! candidates in ascending resolution order.

/// Separator between candidates.
const CANDIDATE_SEPARATOR: &str = ", ";

/// Density descriptor of the high-resolution candidate.
const DENSITY_2X_MARKER: &str = " 2x";

/// Returns the URL of the last (highest-resolution) candidate.
pub fn last_candidate_url(srcset: &str) -> Option<String> {
    let last = srcset.trim().rsplit(CANDIDATE_SEPARATOR).next()?;
    let url = last.split_whitespace().next()?;
    Some(url.to_string())
}

/// Returns the URL of the candidate carrying the `2x` density descriptor.
///
/// Locates the last ` 2x` marker and takes the text between it and the preceding
/// comma (or the start of the list). Descriptor-free URLs containing commas are
/// not supported, which matches how the site writes its lists.
pub fn density_2x_url(srcset: &str) -> Option<String> {
    let marker = srcset.rfind(DENSITY_2X_MARKER).filter(|&i| i > 0)?;
    let head = &srcset[..marker];
    let url = match head.rfind(',').filter(|&i| i > 0) {
        Some(comma) => head[comma + 1..].trim(),
        None => {
            // Single entry: drop any descriptor left in front of the marker
            let head = head.trim();
            match head.rfind(' ') {
                Some(space) if space > 0 => head[..space].trim(),
                _ => head,
            }
        }
    };
    (!url.is_empty()).then(|| url.to_string())
}

/// Decodes HTML-escaped ampersands left in attribute values.
pub fn decode_ampersands(url: &str) -> String {
    url.replace("&amp;", "&")
}
