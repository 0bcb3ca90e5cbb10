//! State module for tracking scan progress
//!
//! Every candidate ID ends in exactly one `PageOutcome`.

mod outcome;

// Re-export main types
pub use outcome::{InvalidReason, PageOutcome};
