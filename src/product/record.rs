//! The per-colour product record

use crate::product::Extracted;
use serde::Serialize;

/// One output record for a single (product, colour) pair
///
/// Records are immutable once constructed: extraction fills every field and
/// nothing mutates them afterwards. Identity for deduplication is full
/// structural equality across all fields, colour included, so two records
/// only compare equal when every extracted value matches exactly.
///
/// Field names serialize in camelCase to match the published output format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub title: Extracted<String>,
    /// Price with currency signs stripped; unparseable text degrades to 0
    pub price: f64,
    /// Absolute image URL, or the sentinel when the card has no `img` element
    pub image_url: Extracted<String>,
    /// Capacity in MB using the 1 GB = 1000 MB convention
    #[serde(rename = "capacityMB")]
    pub capacity_mb: Extracted<f64>,
    pub colour: String,
    /// Availability free text with the `"Availability: "` prefix stripped
    pub availability_text: Extracted<String>,
    /// True iff the availability text contains `"In Stock"` (case-sensitive)
    pub is_available: bool,
    pub shipping_text: Extracted<String>,
    /// ISO `YYYY-MM-DD` derived from the shipping text, or the sentinel
    pub shipping_date: Extracted<String>,
}
