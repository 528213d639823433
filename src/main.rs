//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `vixen_scraper` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output of search results and metadata records
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use vixen_scraper::config::{Command, Opt};
use vixen_scraper::initialization::init_logger_with;
use vixen_scraper::{MetadataRequest, SearchQuery, VixenProvider};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let provider =
        VixenProvider::new(opt.provider_config()).context("Failed to initialize provider")?;

    let output = match opt.command {
        Command::Search { query, title } => {
            let mut query = SearchQuery::new(query);
            query.title = title;
            provider
                .search(&query)
                .await
                .map(|candidates| serde_json::to_string_pretty(&candidates))
        }
        Command::Metadata { url, language } => {
            let mut request = MetadataRequest::new(url);
            request.language = language;
            provider
                .get_metadata(&request)
                .await
                .map(|record| serde_json::to_string_pretty(&record))
        }
    };

    match output {
        Ok(json) => {
            println!("{}", json.context("Failed to serialize output")?);
            Ok(())
        }
        Err(e) => {
            eprintln!("vixen_scraper error: {e}");
            process::exit(1);
        }
    }
}
