use crate::config::DEFAULT_TITLE_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

/// UTF-8 en dash read back as Windows-1252
const MISENCODED_DASH: &str = "\u{e2}\u{20ac}\u{201c}";

const EN_DASH: char = '\u{2013}';

static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_TITLE_PATTERN).expect("hardcoded regex pattern is valid"));

/// Name and bed/bath token parsed from a listing title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    /// Landlord or company name
    pub name: String,

    /// Bed/bath token, e.g. `2br/1.5ba`
    pub bed_bath: String,
}

/// Cleans a raw page title
///
/// Replaces the mis-encoded dash and the en dash with `-`, drops everything from
/// the first `|` onward and trims. Cleaning is idempotent.
///
/// # Example
///
/// ```
/// use hidden_listings::extract::clean_title;
///
/// assert_eq!(
///     clean_title("Acme Rentals \u{2013} 2br/1.5ba Great Location | Acme"),
///     "Acme Rentals - 2br/1.5ba Great Location"
/// );
/// ```
pub fn clean_title(raw: &str) -> String {
    let repaired = raw.replace(MISENCODED_DASH, "-").replace(EN_DASH, "-");

    let without_suffix = match repaired.find('|') {
        Some(index) => &repaired[..index],
        None => repaired.as_str(),
    };

    without_suffix.trim().to_string()
}

/// Parses a cleaned title with the default pattern
///
/// Returns `None` when the title does not have the `<name> - <N>br/<M>ba` shape.
pub fn parse_title(cleaned: &str) -> Option<TitleParts> {
    parse_title_with(&TITLE_REGEX, cleaned)
}

/// Parses a cleaned title with a site-specific pattern
///
/// Group 1 is the name and group 2 the bed/bath token; both are trimmed. Text
/// after the token is ignored. A match that leaves either part empty counts as
/// no match.
pub fn parse_title_with(pattern: &Regex, cleaned: &str) -> Option<TitleParts> {
    let captures = pattern.captures(cleaned)?;

    let name = captures.get(1)?.as_str().trim();
    let bed_bath = captures.get(2)?.as_str().trim();

    if name.is_empty() || bed_bath.is_empty() {
        return None;
    }

    Some(TitleParts {
        name: name.to_string(),
        bed_bath: bed_bath.to_string(),
    })
}
