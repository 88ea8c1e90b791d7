//! JSON output
//!
//! The whole run produces a single file, written once at the end: a
//! pretty-printed UTF-8 JSON array with one object per (product, colour)
//! record. Every run overwrites the file from scratch; nothing persists
//! between runs.

use crate::product::ProductRecord;
use crate::Result;
use std::fs;
use std::path::Path;

/// The fixed output file, relative to the working directory
pub const OUTPUT_PATH: &str = "output.json";

/// Serializes the records and writes them to `path`
pub fn write_products(path: &Path, products: &[ProductRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(products)?;
    fs::write(path, json)?;
    tracing::info!("Wrote {} records to {}", products.len(), path.display());
    Ok(())
}
