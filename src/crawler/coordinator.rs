//! Scraper coordinator - main scan orchestration logic
//!
//! This module contains the scan loop that ties the pieces together:
//! - Walking candidate IDs `1..=max_id` in ascending order
//! - Fetching each page and extracting title, bed/bath and price
//! - Pausing between requests
//! - Writing the collected listings once the range is exhausted
//!
//! No per-ID failure escapes its iteration; the scan always covers the whole range.

use crate::config::Config;
use crate::crawler::delay::RequestDelay;
use crate::crawler::parser::parse_html;
use crate::crawler::{build_http_client, fetch_page, FetchResult};
use crate::extract::{clean_title, extract_price_with, parse_title_with};
use crate::listing::Listing;
use crate::output::{write_listings_csv, ScanStatistics};
use crate::site::{ConfiguredSite, ListingSource};
use crate::state::{InvalidReason, PageOutcome};
use crate::ScrapeError;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Everything a finished scan produced
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    /// Valid listings in the order their IDs were visited
    pub listings: Vec<Listing>,

    /// Every visited ID with its outcome, in visit order
    pub visits: Vec<(u32, PageOutcome)>,

    /// Per-outcome counts
    pub statistics: ScanStatistics,

    /// Where the CSV was (or should have been) written
    pub csv_path: PathBuf,

    /// Whether the CSV was written successfully
    pub csv_written: bool,
}

/// Sequential listing scraper for one site
pub struct ListingScraper<S = ConfiguredSite> {
    site: S,
    client: Client,
    delay: RequestDelay,
    csv_path: PathBuf,
}

impl ListingScraper<ConfiguredSite> {
    /// Creates a scraper for the site described by `config.site`
    ///
    /// # Returns
    ///
    /// * `Ok(ListingScraper)` - Ready to scan
    /// * `Err(ScrapeError)` - A site pattern or the HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, ScrapeError> {
        let site = ConfiguredSite::from_config(&config.site)?;
        Self::new(site, config)
    }
}

impl<S: ListingSource> ListingScraper<S> {
    /// Creates a scraper for an arbitrary site adapter
    ///
    /// HTTP, delay and output settings come from `config`; the delay value is
    /// drawn here unless per-request delays are enabled.
    pub fn new(site: S, config: &Config) -> Result<Self, ScrapeError> {
        let client = build_http_client(&config.http)?;
        let delay = RequestDelay::new(&config.delay);

        tracing::debug!(
            "Scraper for {} built (max id {}, timeout {}s)",
            site.name(),
            site.max_id(),
            config.http.timeout_secs
        );

        Ok(Self {
            site,
            client,
            delay,
            csv_path: PathBuf::from(&config.output.csv_path),
        })
    }

    /// Name of the site being scanned
    pub fn source_name(&self) -> &str {
        self.site.name()
    }

    /// Path the CSV is written to
    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Runs the scan and returns only the listings
    pub async fn scrape(&self) -> Vec<Listing> {
        self.run().await.listings
    }

    /// Runs the full scan
    ///
    /// For each ID in `1..=max_id`:
    /// 1. Fetch the page
    /// 2. 404 → skip; transport error → log and skip
    /// 3. Clean and parse the title; no match → skip
    /// 4. Extract the price; none → skip
    /// 5. Record the listing
    /// 6. Pause before the next ID (no pause after the last one)
    ///
    /// After the last ID the listings are written to the CSV file once. A write
    /// failure is logged and reported in `csv_written`; the listings are
    /// returned either way.
    pub async fn run(&self) -> ScrapeReport {
        let max_id = self.site.max_id();
        tracing::info!("Scanning {} IDs 1..={}", self.site.name(), max_id);

        let start_time = std::time::Instant::now();
        let mut listings = Vec::new();
        let mut visits = Vec::new();
        let mut statistics = ScanStatistics::default();

        for id in 1..=max_id {
            let (outcome, listing) = self.process_id(id).await;

            log_outcome(id, &outcome, listing.as_ref());
            statistics.record(&outcome);

            if let Some(listing) = listing {
                listings.push(listing);
            }
            visits.push((id, outcome));

            if id % 100 == 0 {
                tracing::info!(
                    "Progress: {}/{} IDs checked, {} listings found",
                    id,
                    max_id,
                    listings.len()
                );
            }

            if id < max_id {
                self.delay.wait().await;
            }
        }

        let csv_written = match write_listings_csv(&self.csv_path, &listings) {
            Ok(()) => {
                tracing::info!(
                    "Saved {} listings to {}",
                    listings.len(),
                    self.csv_path.display()
                );
                true
            }
            Err(e) => {
                tracing::error!("Error saving CSV {}: {}", self.csv_path.display(), e);
                false
            }
        };

        tracing::info!(
            "Scan completed: {} IDs checked, {} listings in {:?}",
            statistics.visited,
            listings.len(),
            start_time.elapsed()
        );

        ScrapeReport {
            listings,
            visits,
            statistics,
            csv_path: self.csv_path.clone(),
            csv_written,
        }
    }

    /// Fetches and extracts a single candidate ID
    ///
    /// Returns the outcome and, when recorded, the listing.
    pub async fn process_id(&self, id: u32) -> (PageOutcome, Option<Listing>) {
        let url = self.site.build_url(id);

        let body = match fetch_page(&self.client, &url).await {
            FetchResult::Page { body, status_code } => {
                if !(200..300).contains(&status_code) {
                    tracing::debug!("ID {} answered HTTP {}, reading anyway", id, status_code);
                }
                body
            }
            FetchResult::NotFound => return (PageOutcome::SkippedNotFound, None),
            FetchResult::NetworkError { error } => {
                return (PageOutcome::SkippedError(error), None)
            }
        };

        let page = parse_html(&body);

        let cleaned = clean_title(page.title.as_deref().unwrap_or_default());
        let Some(title) = parse_title_with(self.site.title_pattern(), &cleaned) else {
            return (
                PageOutcome::SkippedInvalid(InvalidReason::NoStructuredTitle),
                None,
            );
        };

        let Some(price) = extract_price_with(self.site.price_pattern(), &page.body_text) else {
            return (PageOutcome::SkippedInvalid(InvalidReason::NoPrice), None);
        };

        match Listing::new(title.name, title.bed_bath, price, url) {
            Ok(listing) => (PageOutcome::Recorded, Some(listing)),
            Err(e) => {
                tracing::warn!("ID {} extracted an incomplete listing: {}", id, e);
                (
                    PageOutcome::SkippedInvalid(InvalidReason::NoStructuredTitle),
                    None,
                )
            }
        }
    }
}

/// Writes the per-ID progress line
fn log_outcome(id: u32, outcome: &PageOutcome, listing: Option<&Listing>) {
    match (outcome, listing) {
        (PageOutcome::Recorded, Some(listing)) => tracing::info!(
            "Checking ID {}... {} {} - {} - {}",
            id,
            outcome.tag(),
            listing.source(),
            listing.unit_descriptor(),
            listing.price()
        ),
        (PageOutcome::SkippedError(message), _) => {
            tracing::warn!("Checking ID {}... {} {}: {}", id, outcome.tag(), id, message)
        }
        _ => tracing::info!("Checking ID {}... {}", id, outcome.tag()),
    }
}

/// Builds a scraper from `config` and runs it to completion
///
/// # Example
///
/// ```no_run
/// use hidden_listings::config::Config;
/// use hidden_listings::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_scrape(&Config::default()).await?;
/// println!("{} listings", report.listings.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: &Config) -> Result<ScrapeReport, ScrapeError> {
    let scraper = ListingScraper::from_config(config)?;
    Ok(scraper.run().await)
}
