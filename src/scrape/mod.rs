//! Scrape orchestration
//!
//! This module contains the run loop, including:
//! - HTTP client construction and page fetching
//! - Link discovery on the root page
//! - Product-node discovery per page
//! - Colour fan-out and duplicate suppression

mod coordinator;
mod fetcher;

pub use coordinator::{run_scrape, Scraper};
pub use fetcher::{build_http_client, fetch_page};
