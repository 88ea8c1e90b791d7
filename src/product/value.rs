//! The `Extracted` sentinel union
//!
//! Every field whose selector may miss (or whose text may be unparseable) is
//! carried internally as `Known(value) | Missing` so that a missing capacity
//! is never conflated with a numeric zero. The literal string `"N/A"` only
//! exists at the serialization boundary.

use serde::{Serialize, Serializer};
use std::fmt;

/// The fallback sentinel emitted for a missing value
pub const SENTINEL: &str = "N/A";

/// A field value that either parsed/matched or degraded to the sentinel
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted<T> {
    /// The selector matched and the value was usable
    Known(T),
    /// The selector missed; serializes as the literal `"N/A"`
    Missing,
}

impl<T> Extracted<T> {
    /// Maps the known value, leaving `Missing` untouched
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Extracted<U> {
        match self {
            Extracted::Known(v) => Extracted::Known(f(v)),
            Extracted::Missing => Extracted::Missing,
        }
    }

    /// Returns a reference to the known value, if any
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Extracted::Known(v) => Some(v),
            Extracted::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Extracted::Missing)
    }
}

impl<T> From<Option<T>> for Extracted<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Extracted::Known(v),
            None => Extracted::Missing,
        }
    }
}

impl<T: Serialize> Serialize for Extracted<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Extracted::Known(v) => v.serialize(serializer),
            Extracted::Missing => serializer.serialize_str(SENTINEL),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Extracted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extracted::Known(v) => v.fmt(f),
            Extracted::Missing => f.write_str(SENTINEL),
        }
    }
}
