//! Shipping-date derivation from free-form shipping text
//!
//! The site phrases shipping in several ways ("Delivers 25th December 2024",
//! "Ships 2024-12-25", "Available tomorrow", ...). The rules below apply in
//! order and the first match wins; anything unrecognized stays `Missing`.

use crate::product::Extracted;
use chrono::NaiveDate;
use regex::Regex;

/// Derives an ISO `YYYY-MM-DD` date from shipping text
///
/// Rules, in order:
/// 1. An ordinal day, month name and 4-digit year ("25th December 2024")
///    parses as a calendar date.
/// 2. A literal `YYYY-MM-DD` substring is used as-is, unvalidated.
/// 3. Text containing "tomorrow" (case-insensitive) means `today` + 1 day.
/// 4. Anything else is `Missing`.
///
/// Rule 3 is the only clock-dependent rule, which is why `today` is a
/// parameter rather than read from the wall clock here: callers pass the run
/// date, tests pass a fixed one.
pub fn derive_shipping_date(shipping_text: &str, today: NaiveDate) -> Extracted<String> {
    let ordinal_date = Regex::new(r"(\d{1,2})(?:st|nd|rd|th)? ([A-Za-z]+) (\d{4})")
        .expect("valid ordinal date regex");
    if let Some(caps) = ordinal_date.captures(shipping_text) {
        let composed = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
        for format in ["%d %B %Y", "%d %b %Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(&composed, format) {
                return Extracted::Known(date.format("%Y-%m-%d").to_string());
            }
        }
        // The month word was not a real month; fall through to the next rules.
    }

    let iso_date = Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid ISO date regex");
    if let Some(found) = iso_date.find(shipping_text) {
        return Extracted::Known(found.as_str().to_string());
    }

    if shipping_text.to_lowercase().contains("tomorrow") {
        if let Some(tomorrow) = today.succ_opt() {
            return Extracted::Known(tomorrow.format("%Y-%m-%d").to_string());
        }
    }

    Extracted::Missing
}
