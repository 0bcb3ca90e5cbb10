//! Site adapters
//!
//! A `ListingSource` tells the scraper how to address a site's listing pages and
//! how to read them. `ConfiguredSite` builds one from the `[site]` config section;
//! its default is the La Crosse student rentals site.

mod configured;

pub use configured::ConfiguredSite;

use regex::Regex;

/// A site whose listings live at numerically indexed pages
pub trait ListingSource {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Page URL for a candidate ID
    fn build_url(&self, id: u32) -> String;

    /// Highest candidate ID; IDs `1..=max_id()` are probed
    fn max_id(&self) -> u32;

    /// Pattern applied to the cleaned title (group 1 name, group 2 bed/bath)
    fn title_pattern(&self) -> &Regex;

    /// Pattern applied to the body text (group 1 amount)
    fn price_pattern(&self) -> &Regex;
}

/// Substitutes `{query}` and `{id}` into a URL template
///
/// # Example
///
/// ```
/// use hidden_listings::site::render_url;
///
/// assert_eq!(
///     render_url("https://example.com/{query}/{id}/", "any-words", 42),
///     "https://example.com/any-words/42/"
/// );
/// ```
pub fn render_url(template: &str, query: &str, id: u32) -> String {
    template
        .replace("{query}", query)
        .replace("{id}", &id.to_string())
}
