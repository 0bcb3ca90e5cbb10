//! CSV persistence for listings
//!
//! The header row is written verbatim; every data field is quoted with embedded
//! quotes doubled, so commas and newlines inside fields survive a round trip.

use crate::listing::Listing;
use crate::ScrapeError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of the output file
pub const CSV_HEADER: &str = "Company,Bed/Bath,Price,Link";

/// Writes listings to `path`, replacing any existing file
///
/// # Arguments
///
/// * `path` - Destination file
/// * `listings` - Listings in the order they were found
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(ScrapeError)` - File could not be created or written
pub fn write_listings_csv(path: &Path, listings: &[Listing]) -> Result<(), ScrapeError> {
    let file = File::create(path)?;
    write_listings(file, listings)
}

/// Writes the header and one quoted row per listing to `out`
pub fn write_listings<W: Write>(mut out: W, listings: &[Listing]) -> Result<(), ScrapeError> {
    out.write_all(CSV_HEADER.as_bytes())?;
    out.write_all(b"\n")?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    for listing in listings {
        writer.write_record(listing.to_record())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn listing(source: &str, unit: &str, price: &str, link: &str) -> Listing {
        Listing::new(source, unit, price, link).unwrap()
    }

    fn read_back(path: &Path) -> Vec<Listing> {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Company", "Bed/Bath", "Price", "Link"]
        );

        reader
            .records()
            .map(|record| {
                let record = record.unwrap();
                listing(&record[0], &record[1], &record[2], &record[3])
            })
            .collect()
    }

    #[test]
    fn test_exact_layout() {
        let mut buffer = Vec::new();
        let listings = vec![listing(
            "Campus Homes",
            "3br/2ba",
            "$900",
            "https://example.com/any-words/6/",
        )];

        write_listings(&mut buffer, &listings).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Company,Bed/Bath,Price,Link\n\"Campus Homes\",\"3br/2ba\",\"$900\",\"https://example.com/any-words/6/\"\n"
        );
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut buffer = Vec::new();
        let listings = vec![listing("Joe \"Landlord\" Smith", "1br/1ba", "$1,000", "https://x/1/")];

        write_listings(&mut buffer, &listings).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"Joe \"\"Landlord\"\" Smith\""));
    }

    #[test]
    fn test_empty_list_writes_header_only() {
        let mut buffer = Vec::new();
        write_listings(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Company,Bed/Bath,Price,Link\n");
    }

    #[test]
    fn test_round_trip_through_csv_reader() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hidden_listings.csv");

        let listings = vec![
            listing("Joe \"Landlord\" Smith", "2br/1.5ba", "$1,200", "https://x/any-words/1/"),
            listing("Smith, Jones & Co", "4br/2ba", "$2450", "https://x/any-words/2/"),
            listing("Line\nBreak Rentals", "1br/1ba", "$650", "https://x/any-words/3/"),
        ];

        write_listings_csv(&path, &listings).unwrap();

        assert_eq!(read_back(&path), listings);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hidden_listings.csv");
        std::fs::write(&path, "stale contents\nmore stale contents\n").unwrap();

        let listings = vec![listing("Acme", "2br/1ba", "$1,100", "https://x/any-words/9/")];
        write_listings_csv(&path, &listings).unwrap();

        assert_eq!(read_back(&path), listings);
        assert!(!std::fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("hidden_listings.csv");

        let result = write_listings_csv(&path, &[]);
        assert!(matches!(result, Err(ScrapeError::Io(_))));
    }
}
