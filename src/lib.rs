//! Magpie-Scrape: product-listing scraper for the magpiehq developer challenge
//!
//! This crate crawls the smartphone listing, extracts structured product data
//! (title, price, capacity, colour, availability, shipping) from each product
//! card, fans records out by colour variant, suppresses exact duplicates, and
//! writes the result as a pretty-printed JSON array.

pub mod extract;
pub mod output;
pub mod product;
pub mod scrape;
pub mod url;

use thiserror::Error;

/// Main error type for Magpie-Scrape operations
///
/// Missing selectors and unparseable field text never surface here: they
/// degrade to the `"N/A"` sentinel (or `0` for prices) during extraction.
/// Anything that does reach this type aborts the run before `output.json`
/// is written.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Magpie-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use crate::url::{to_absolute_url, BASE_URL, ROOT_URL};
pub use product::{Extracted, ProductRecord};
pub use scrape::{run_scrape, Scraper};
