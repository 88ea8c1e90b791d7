//! Field extraction and normalization
//!
//! This module turns the loosely-formatted text of one product card into
//! typed values:
//! - selector table for the site's marker classes
//! - capacity strings like `"128GB"` into MB (1 GB = 1000 MB)
//! - price strings with currency signs into `f64`
//! - free-form shipping text into an ISO date where possible
//! - availability text into a prefix-stripped string plus a boolean

mod capacity;
mod fields;
mod price;
mod selectors;
mod shipping;

pub use capacity::capacity_to_mb;
pub use fields::{extract_product, ProductFields, AVAILABILITY_PREFIX, IN_STOCK_MARKER};
pub use price::clean_price;
pub use selectors::Selectors;
pub use shipping::derive_shipping_date;
