//! Outcome definitions for candidate IDs
//!
//! This module defines the terminal states a candidate ID can reach during a scan.

use std::fmt;

/// Why a fetched page produced no listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// Title lacks the `<name> - <N>br/<M>ba` shape
    NoStructuredTitle,

    /// Body text has no dollar amount
    NoPrice,
}

impl InvalidReason {
    /// Log tag for this reason
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NoStructuredTitle => "[INVALID TITLE]",
            Self::NoPrice => "[NO PRICE]",
        }
    }
}

/// Terminal state of a single candidate ID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageOutcome {
    // ===== Success =====
    /// A listing was extracted and recorded
    Recorded,

    // ===== Skips =====
    /// Server answered 404; no listing at this ID
    SkippedNotFound,

    /// Page fetched but the title or price could not be extracted
    SkippedInvalid(InvalidReason),

    // ===== Errors =====
    /// Transport failure (timeout, connection error, unreadable body)
    SkippedError(String),
}

impl PageOutcome {
    /// Returns true if a listing was recorded
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded)
    }

    /// Returns true if the ID was skipped without an error
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::SkippedNotFound | Self::SkippedInvalid(_))
    }

    /// Returns true if fetching the page failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::SkippedError(_))
    }

    /// Short tag used in progress logs
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Recorded => "[VALID]",
            Self::SkippedNotFound => "[404]",
            Self::SkippedInvalid(reason) => reason.tag(),
            Self::SkippedError(_) => "[ERROR]",
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkippedError(message) => write!(f, "{} {}", self.tag(), message),
            _ => write!(f, "{}", self.tag()),
        }
    }
}
