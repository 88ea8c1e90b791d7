//! CSS selector table for the challenge site's markup
//!
//! All selectors target marker classes: class names the site uses purely as
//! hooks ("this is a product card"), not as data. They are parsed once at
//! startup; the literals below are known-good, so a parse failure is a
//! programming error surfaced as a startup error rather than a panic.

use crate::{Result, ScrapeError};
use scraper::Selector;

/// The parsed selectors used for link discovery and field extraction
pub struct Selectors {
    /// Every hyperlink on the root page
    pub link: Selector,
    /// One product card
    pub product: Selector,
    pub name: Selector,
    pub capacity: Selector,
    pub image: Selector,
    /// The price is by convention the element styled as large text
    pub price: Selector,
    /// Availability and shipping share this class and are told apart only by
    /// match order (index 0 vs 1)
    pub small_text: Selector,
    /// Colour variants carry their value in a data attribute
    pub colour: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            link: parse("a")?,
            product: parse(".product")?,
            name: parse(".product-name")?,
            capacity: parse(".product-capacity")?,
            image: parse("img")?,
            price: parse(".text-lg")?,
            small_text: parse(".text-sm")?,
            colour: parse("span[data-colour]")?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
