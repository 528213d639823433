//! Configuration types and CLI options.
//!
//! This module defines the provider configuration record and the structs used for
//! command-line argument parsing.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    BASE_URL, CERTIFICATION_TAG, DEFAULT_RATING, DEFAULT_RUNTIME_MINUTES, DEFAULT_USER_AGENT,
    DETAIL_TIMEOUT, GENRE_FALLBACK, GENRE_LABEL, LANGUAGE_TAG, SEARCH_TIMEOUT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Optional host features the provider may rely on.
///
/// The host declares these once, up front. The provider never probes the host at
/// runtime to find out what it supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Host accepts arbitrary genre strings rather than only its own enumeration
    pub free_text_genres: bool,
    /// Host refreshes performer portraits on its own when asked to
    pub actor_photo_auto_update: bool,
}

/// Read-only provider configuration.
///
/// Built once (from defaults or CLI options) and passed into `VixenProvider::new`.
/// Nothing in the provider mutates it after construction.
///
/// # Examples
///
/// ```no_run
/// use vixen_scraper::config::ProviderConfig;
///
/// let config = ProviderConfig {
///     base_url: "http://127.0.0.1:8080".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Site base URL, without a trailing slash
    pub base_url: String,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Timeout for search page requests
    pub search_timeout: Duration,

    /// Timeout for detail page and actor profile requests
    pub detail_timeout: Duration,

    /// Runtime reported when the page has none
    pub default_runtime_minutes: u32,

    /// Rating reported when the page has none
    pub default_rating: f32,

    /// Genre label used when the host accepts free-text genres
    pub genre_label: String,

    /// Genre used when the host only accepts enumerated genres
    pub genre_fallback: String,

    /// Language tag attached to every record
    pub language: String,

    /// Certification tag attached to every record
    pub certification: String,

    /// Features the host declared support for
    pub capabilities: HostCapabilities,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            search_timeout: SEARCH_TIMEOUT,
            detail_timeout: DETAIL_TIMEOUT,
            default_runtime_minutes: DEFAULT_RUNTIME_MINUTES,
            default_rating: DEFAULT_RATING,
            genre_label: GENRE_LABEL.to_string(),
            genre_fallback: GENRE_FALLBACK.to_string(),
            language: LANGUAGE_TAG.to_string(),
            certification: CERTIFICATION_TAG.to_string(),
            capabilities: HostCapabilities::default(),
        }
    }
}

impl ProviderConfig {
    /// Genre tag for records, chosen by the host's declared genre capability.
    pub fn genre(&self) -> &str {
        if self.capabilities.free_text_genres {
            &self.genre_label
        } else {
            &self.genre_fallback
        }
    }
}

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "vixen_scraper",
    version,
    about = "Search vixen.com and scrape movie metadata"
)]
pub struct Opt {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Site base URL
    #[arg(long, default_value = BASE_URL, global = true)]
    pub base_url: String,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,

    /// Override both request timeouts (seconds)
    #[arg(long, global = true)]
    pub timeout_seconds: Option<u64>,

    /// Host accepts free-text genres
    #[arg(long, global = true)]
    pub free_text_genres: bool,

    /// Ask the host to refresh performer portraits on its own
    #[arg(long, global = true)]
    pub actor_photo_auto_update: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for candidates matching a filename or title
    Search {
        /// Raw query, e.g. a release filename
        query: String,

        /// Title to fall back on when the query yields no search term
        #[arg(long)]
        title: Option<String>,
    },
    /// Scrape the full metadata record of a detail page
    Metadata {
        /// Detail page URL, as returned by `search`
        url: String,

        /// Language to tag artwork with
        #[arg(long)]
        language: Option<String>,
    },
}

impl Opt {
    /// Builds the provider configuration these options describe.
    pub fn provider_config(&self) -> ProviderConfig {
        let defaults = ProviderConfig::default();
        let (search_timeout, detail_timeout) = match self.timeout_seconds {
            Some(secs) => (Duration::from_secs(secs), Duration::from_secs(secs)),
            None => (defaults.search_timeout, defaults.detail_timeout),
        };
        ProviderConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            user_agent: self.user_agent.clone(),
            search_timeout,
            detail_timeout,
            capabilities: HostCapabilities {
                free_text_genres: self.free_text_genres,
                actor_photo_auto_update: self.actor_photo_auto_update,
            },
            ..defaults
        }
    }
}
