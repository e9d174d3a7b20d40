//! # Page Scraping
//!
//! Everything that knows about the external lottery page lives here: the HTTP
//! client that downloads it and the parsers that turn its markup into a
//! [`FrequencyTable`](crate::frequency::FrequencyTable) or a jackpot string.
//! Nothing downstream of this module sees HTML.

pub mod client;
pub mod parser;
#[cfg(test)]
pub(crate) mod test_support;

pub use client::PageClient;
pub use parser::{parse_frequency_table, parse_jackpot, PageSelectors};
