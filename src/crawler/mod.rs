//! Crawler module for listing page fetching and processing
//!
//! This module contains the core scanning logic, including:
//! - HTTP fetching with a fixed timeout and no retries
//! - HTML parsing into title and body text
//! - The randomized pause between requests
//! - Overall scan coordination, entered through [`run_scrape`] or [`ListingScraper`]

mod coordinator;
mod delay;
mod fetcher;
mod parser;

pub use coordinator::{run_scrape, ListingScraper, ScrapeReport};
pub use delay::RequestDelay;
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use parser::{parse_html, ParsedPage};

