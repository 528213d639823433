//! Provider configuration and constants.
//!
//! This module provides:
//! - Configuration constants (site endpoints, timeouts, field defaults)
//! - The read-only `ProviderConfig` record handed to the provider at construction
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, HostCapabilities, LogFormat, LogLevel, Opt, ProviderConfig};
