//! Price text cleaning

/// Currency signs stripped before parsing
///
/// The site serves some prices with mis-encoded signs (UTF-8 bytes decoded as
/// Latin-1), so the mojibake forms of `€` and `£` are stripped too. They must
/// come first: stripping the clean `£` out of `Â£` would leave a stray `Â`
/// behind.
const CURRENCY_SIGNS: &[&str] = &["$", "â‚¬", "Â£", "€", "£"];

/// Strips currency signs from a price string and parses it as a float
///
/// Empty or otherwise unparseable text degrades to `0.0`, never an error.
pub fn clean_price(price_text: &str) -> f64 {
    let mut cleaned = price_text.to_string();
    for sign in CURRENCY_SIGNS {
        cleaned = cleaned.replace(sign, "");
    }
    cleaned.trim().parse().unwrap_or(0.0)
}
