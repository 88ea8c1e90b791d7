//! Capacity normalization

/// Converts a capacity string like `"128GB"` to a value in MB
///
/// Strips every character that is not a digit or decimal point and parses
/// the remainder as a float, so `"128GB"`, `"128 GB"` and `"128"` all give
/// the same result. Uses 1 GB = 1000 MB (not 1024) for cleaner numbers; this
/// convention is part of the output contract.
///
/// Text with no numeric content degrades to `0.0` before the multiply.
/// Callers handle the missing-selector case: a card with no capacity marker
/// stays `Missing` and never reaches this function.
pub fn capacity_to_mb(capacity_text: &str) -> f64 {
    let numeric: String = capacity_text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(0.0) * 1000.0
}
