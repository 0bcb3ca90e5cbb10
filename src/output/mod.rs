//! Output module for scan results
//!
//! This module handles:
//! - Writing the collected listings to a CSV file
//! - Recording and printing per-outcome scan statistics

mod csv_writer;
pub mod stats;

pub use csv_writer::{write_listings, write_listings_csv, CSV_HEADER};
pub use stats::{print_statistics, ScanStatistics};
