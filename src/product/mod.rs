//! Product data model
//!
//! This module defines the output record for one (product, colour) pair and
//! the `Extracted` sentinel union used for fields whose selector may miss.

mod record;
mod value;

pub use record::ProductRecord;
pub use value::Extracted;
