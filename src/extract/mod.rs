//! Text extractors for listing pages
//!
//! Pure functions that turn a page's title and body text into listing fields:
//! - `clean_title`: repairs the dash, drops the `| Site Name` suffix
//! - `parse_title`: splits `<name> - <N>br/<M>ba` into name and bed/bath
//! - `extract_price`: first dollar amount in the body text
//!
//! The `*_with` variants take a site-specific pattern; the plain versions use
//! the default La Crosse patterns.

mod price;
mod title;

pub use price::{extract_price, extract_price_with};
pub use title::{clean_title, parse_title, parse_title_with, TitleParts};
