//! Per-product-node field extraction
//!
//! Given one product card element, applies the selector table and produces
//! the shared field set that colour fan-out later copies into records. A
//! selector that matches nothing leaves the field `Missing`; extraction
//! itself never fails.

use crate::extract::{capacity_to_mb, clean_price, derive_shipping_date, Selectors};
use crate::product::Extracted;
use crate::url::to_absolute_url;
use chrono::NaiveDate;
use scraper::{ElementRef, Selector};

/// The literal prefix stripped off the availability text
pub const AVAILABILITY_PREFIX: &str = "Availability: ";

/// The case-sensitive substring that marks a product as available
pub const IN_STOCK_MARKER: &str = "In Stock";

/// The fields shared by every colour variant of one product node
///
/// Extraction runs exactly once per node; the colour list then fans out into
/// one `ProductRecord` per entry, all carrying copies of the other fields.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub title: Extracted<String>,
    pub price: f64,
    pub image_url: Extracted<String>,
    pub capacity_mb: Extracted<f64>,
    pub availability_text: Extracted<String>,
    pub is_available: bool,
    pub shipping_text: Extracted<String>,
    pub shipping_date: Extracted<String>,
    /// Colour attribute values in document order, duplicates included
    pub colours: Vec<String>,
}

/// Extracts all recognized fields from one product node
///
/// `today` feeds the "tomorrow" shipping rule; callers pass the run date so
/// tests can pin it.
pub fn extract_product(
    node: ElementRef<'_>,
    selectors: &Selectors,
    base_url: &str,
    today: NaiveDate,
) -> ProductFields {
    let title = first_text(node, &selectors.name);

    let capacity_mb = first_text(node, &selectors.capacity).map(|text| capacity_to_mb(&text));

    let image_url: Extracted<String> = node
        .select(&selectors.image)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| to_absolute_url(base_url, src))
        .into();

    let price = match first_text(node, &selectors.price) {
        Extracted::Known(text) => clean_price(&text),
        Extracted::Missing => 0.0,
    };

    // Availability and shipping share the .text-sm marker class and are told
    // apart only by match order on the card: index 0 is availability, index 1
    // is shipping. Fragile if the markup ever reorders, but that ordering is
    // the only contract the site offers. With fewer than 2 matches the
    // missing positions stay Missing.
    let small_text: Vec<String> = node
        .select(&selectors.small_text)
        .map(element_text)
        .collect();

    let availability_text = Extracted::from(small_text.first().cloned())
        .map(|text| text.replace(AVAILABILITY_PREFIX, ""));
    let is_available = availability_text
        .as_ref()
        .is_some_and(|text| text.contains(IN_STOCK_MARKER));

    let shipping_text = Extracted::from(small_text.get(1).cloned());
    let shipping_date = match shipping_text.as_ref() {
        Some(text) => derive_shipping_date(text, today),
        None => Extracted::Missing,
    };

    let colours = node
        .select(&selectors.colour)
        .filter_map(|span| span.value().attr("data-colour"))
        .map(str::to_string)
        .collect();

    ProductFields {
        title,
        price,
        image_url,
        capacity_mb,
        availability_text,
        is_available,
        shipping_text,
        shipping_date,
        colours,
    }
}

/// Text of the first element matching `selector` under `node`, or `Missing`
fn first_text(node: ElementRef<'_>, selector: &Selector) -> Extracted<String> {
    node.select(selector).next().map(element_text).into()
}

/// Collects an element's text content with whitespace normalized
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
