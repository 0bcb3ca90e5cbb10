//! Listing records produced by a scan
//!
//! A `Listing` is only ever built from a fully extracted page; partial
//! extraction results never produce a record.

mod record;

pub use record::Listing;
