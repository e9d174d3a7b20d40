//! # Draw Frequencies
//!
//! The frequency table, the sources that produce it, and the single-slot cache
//! that memoizes it between scheduled refreshes.

pub mod cache;
pub mod source;
pub mod table;

pub use cache::{CacheStatus, FrequencyCache};
pub use source::{FrequencySource, HttpFrequencySource};
pub use table::FrequencyTable;
