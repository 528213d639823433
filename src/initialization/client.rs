//! HTTP client initialization.
//!
//! This module provides the function that builds the HTTP client shared by every
//! request a provider makes.

use reqwest::ClientBuilder;

use crate::config::ProviderConfig;

/// Initializes the HTTP client with the provider's settings.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - The longer of the two configured timeouts as a ceiling; each request
///   sets its own tighter timeout on top
/// - Redirect following enabled (reqwest default, up to 10 hops)
///
/// # Arguments
///
/// * `config` - Provider configuration containing user-agent and timeout settings
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &ProviderConfig) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.search_timeout.max(config.detail_timeout))
        .user_agent(config.user_agent.clone())
        .build()
}
