//! Hidden Listings: a rental listing page prober
//!
//! This crate walks the numerically-indexed listing pages of a rental site,
//! extracts landlord, bed/bath and price from each page, and writes the valid
//! listings to a CSV file.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod listing;
pub mod output;
pub mod site;
pub mod state;

use thiserror::Error;

/// Main error type for scraper construction and persistence
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Errors raised when building a listing record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Listing field '{0}' is empty")]
    EmptyField(&'static str),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{ListingScraper, ScrapeReport};
pub use listing::Listing;
pub use site::{ConfiguredSite, ListingSource};
pub use state::{InvalidReason, PageOutcome};
