use crate::ListingError;
use serde::Serialize;
use std::fmt;

/// One rental listing extracted from a single page
///
/// All four fields are non-empty; the constructor rejects anything else.
/// Records are immutable once built and compare by field equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Listing {
    source: String,
    unit_descriptor: String,
    price: String,
    link: String,
}

impl Listing {
    /// Builds a listing, rejecting empty or whitespace-only fields
    ///
    /// # Arguments
    ///
    /// * `source` - Landlord or company name parsed from the title
    /// * `unit_descriptor` - Bed/bath token such as `2br/1.5ba`
    /// * `price` - Price with leading `$`, e.g. `$1,200`
    /// * `link` - URL of the page the listing came from
    ///
    /// # Example
    ///
    /// ```
    /// use hidden_listings::Listing;
    ///
    /// let listing = Listing::new("Acme Rentals", "2br/1.5ba", "$1,200", "https://example.com/1/").unwrap();
    /// assert_eq!(listing.unit_descriptor(), "2br/1.5ba");
    /// assert!(Listing::new("", "2br/1ba", "$900", "https://example.com/2/").is_err());
    /// ```
    pub fn new(
        source: impl Into<String>,
        unit_descriptor: impl Into<String>,
        price: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<Self, ListingError> {
        let listing = Self {
            source: source.into(),
            unit_descriptor: unit_descriptor.into(),
            price: price.into(),
            link: link.into(),
        };

        for (field, value) in listing.fields() {
            if value.trim().is_empty() {
                return Err(ListingError::EmptyField(field));
            }
        }

        Ok(listing)
    }

    /// Landlord or company name
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Free-form bed/bath descriptor
    pub fn unit_descriptor(&self) -> &str {
        &self.unit_descriptor
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Field values in output column order
    pub fn to_record(&self) -> [&str; 4] {
        [&self.source, &self.unit_descriptor, &self.price, &self.link]
    }

    fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("source", &self.source),
            ("unit_descriptor", &self.unit_descriptor),
            ("price", &self.price),
            ("link", &self.link),
        ]
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.source, self.unit_descriptor, self.price, self.link
        )
    }
}
