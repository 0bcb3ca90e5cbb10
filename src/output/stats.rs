//! Scan statistics
//!
//! Counts how each candidate ID ended and prints a summary once the scan is over.

use crate::state::{InvalidReason, PageOutcome};

/// Per-outcome counts for one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStatistics {
    /// Candidate IDs visited
    pub visited: u64,

    /// Listings recorded
    pub recorded: u64,

    /// IDs that answered 404
    pub not_found: u64,

    /// Pages whose title had no bed/bath structure
    pub invalid_title: u64,

    /// Pages with no price in the body
    pub no_price: u64,

    /// IDs that failed to fetch
    pub errors: u64,
}

impl ScanStatistics {
    /// Counts one outcome
    pub fn record(&mut self, outcome: &PageOutcome) {
        self.visited += 1;

        match outcome {
            PageOutcome::Recorded => self.recorded += 1,
            PageOutcome::SkippedNotFound => self.not_found += 1,
            PageOutcome::SkippedInvalid(InvalidReason::NoStructuredTitle) => {
                self.invalid_title += 1
            }
            PageOutcome::SkippedInvalid(InvalidReason::NoPrice) => self.no_price += 1,
            PageOutcome::SkippedError(_) => self.errors += 1,
        }
    }

    /// Percentage of visited IDs that produced a listing
    pub fn hit_rate(&self) -> f64 {
        if self.visited == 0 {
            return 0.0;
        }

        (self.recorded as f64 / self.visited as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &ScanStatistics) {
    println!("=== Scan Statistics ===\n");

    println!("  IDs visited: {}", stats.visited);
    println!("  Listings recorded: {}", stats.recorded);
    println!("  Not found (404): {}", stats.not_found);
    println!("  Invalid title: {}", stats.invalid_title);
    println!("  No price: {}", stats.no_price);
    println!("  Errors: {}", stats.errors);
    println!();

    println!(
        "Hit Rate: {:.1}% ({} / {} IDs produced a listing)",
        stats.hit_rate(),
        stats.recorded,
        stats.visited
    );
}
