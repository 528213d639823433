//! Utility functions shared by the extractors.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Element text normalization
//! - URL resolution and path segment helpers
//! - `srcset` (responsive-image candidate list) parsing

mod selector;
pub mod srcset;
pub mod text;
mod links;

pub use links::{absolute_url, last_path_segment};
pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
pub use text::{collapse_whitespace, element_text};
