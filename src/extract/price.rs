use crate::config::DEFAULT_PRICE_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static PRICE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PRICE_PATTERN).expect("hardcoded regex pattern is valid"));

/// Finds the first price in a page's body text with the default pattern
///
/// Returns the amount with a leading `$`, or `None` when no dollar amount is
/// present. Only the first match in document order counts.
///
/// # Example
///
/// ```
/// use hidden_listings::extract::extract_price;
///
/// assert_eq!(extract_price("Rent: $1,200/mo, deposit $500"), Some("$1,200".to_string()));
/// assert_eq!(extract_price("Call for pricing"), None);
/// ```
pub fn extract_price(text: &str) -> Option<String> {
    extract_price_with(&PRICE_REGEX, text)
}

/// Finds the first price in `text` using a site-specific pattern
///
/// Group 1 holds the digits; a `$` is prepended to them.
pub fn extract_price_with(pattern: &Regex, text: &str) -> Option<String> {
    let amount = pattern.captures(text)?.get(1)?.as_str();

    if amount.is_empty() {
        return None;
    }

    Some(format!("${}", amount))
}
