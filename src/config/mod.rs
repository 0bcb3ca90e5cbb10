//! Configuration module for Hidden Listings
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All settings are optional; missing sections fall back to the built-in La Crosse
//! student rentals source.
//!
//! # Example
//!
//! ```no_run
//! use hidden_listings::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("listings.toml")).unwrap();
//! println!("Probing IDs 1..={}", config.site.max_id);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DelayConfig, HttpConfig, OutputConfig, SiteConfig, DEFAULT_CSV_PATH,
    DEFAULT_DELAY_MAX_MS, DEFAULT_DELAY_MIN_MS, DEFAULT_MAX_ID, DEFAULT_PRICE_PATTERN,
    DEFAULT_QUERY, DEFAULT_SOURCE_NAME, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE_PATTERN,
    DEFAULT_URL_TEMPLATE, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_ID_LIMIT};
