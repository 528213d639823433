//! Page fetching.
//!
//! Issues a GET with the provider's client and returns the response body. Parsing is
//! left to the caller so that no `scraper::Html` is held across an await point.

use std::time::Duration;

use log::debug;

use crate::error_handling::{transport_error, TransportError};

/// Fetches a page and returns its body as text.
///
/// The request carries the client's user agent and the given timeout. A timeout,
/// network failure, or non-2xx status is a `TransportError`.
///
/// # Arguments
///
/// * `client` - The provider's HTTP client
/// * `url` - Absolute URL to fetch
/// * `timeout` - Upper bound for the whole request, body included
pub async fn fetch_html(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String, TransportError> {
    debug!("Fetching {url} (timeout {}s)", timeout.as_secs());

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| transport_error(url, &e))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(url, &e))?;

    debug!("Fetched {url}: {} ({} bytes)", status, body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
