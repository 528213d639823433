// Shared test helpers for provider setup against a mock site.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use httptest::Server;
use vixen_scraper::{ProviderConfig, VixenProvider};

/// Base URL of a mock server, without the trailing slash.
pub fn base_url(server: &Server) -> String {
    server.url_str("/").trim_end_matches('/').to_string()
}

/// Creates a provider that talks to the mock server with short timeouts.
pub fn provider_for(server: &Server) -> VixenProvider {
    provider_with(server, ProviderConfig::default())
}

/// Creates a provider from `config`, pointed at the mock server.
#[allow(dead_code)] // Used by the metadata tests only
pub fn provider_with(server: &Server, config: ProviderConfig) -> VixenProvider {
    let config = ProviderConfig {
        base_url: base_url(server),
        search_timeout: Duration::from_secs(2),
        detail_timeout: Duration::from_secs(2),
        ..config
    };
    VixenProvider::new(config).expect("Failed to create provider")
}

/// Wraps result anchors in a minimal search page.
#[allow(dead_code)] // Used by the search tests only
pub fn results_page(anchors: &str) -> String {
    format!("<html><body><div class=\"results\">{anchors}</div></body></html>")
}
