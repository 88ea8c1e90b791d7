//! Site URL constants and resolution
//!
//! Resolution here is deliberately NOT a standards-compliant relative-URL
//! join: the challenge site emits hrefs and image paths like
//! `../img/phone.png`, and the original contract is a literal strip of every
//! `"../"` followed by prepending the fixed base. Segments like `./` or
//! already-absolute URLs get no special casing. Do not replace this with
//! `Url::join` — the outputs differ.

/// The listing page every run starts from
pub const ROOT_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones";

/// The fixed base prepended to every discovered link and image path
pub const BASE_URL: &str = "https://www.magpiehq.com/developer-challenge/";

/// Resolves a possibly-relative URL against a base by literal substitution
///
/// Strips every occurrence of the substring `"../"` and prepends the base.
///
/// # Examples
///
/// ```
/// use magpie_scrape::url::{to_absolute_url, BASE_URL};
///
/// let url = to_absolute_url(BASE_URL, "../img/phone.png");
/// assert_eq!(url, "https://www.magpiehq.com/developer-challenge/img/phone.png");
/// ```
pub fn to_absolute_url(base_url: &str, relative_url: &str) -> String {
    let cleaned = relative_url.replace("../", "");
    format!("{}{}", base_url, cleaned)
}
