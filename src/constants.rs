//! # System Constants
//!
//! Operational boundaries of the lotto number pipeline: the number domain,
//! default scraping targets, and the user-facing messages returned by the API.

use std::time::Duration;

/// Lowest number that can be drawn
pub const MIN_NUMBER: u8 = 1;

/// Highest number that can be drawn
pub const MAX_NUMBER: u8 = 49;

/// Size of a final selection
pub const SELECTION_SIZE: usize = 6;

/// Numbers taken from the lucky set before anything else is considered
pub const LUCKY_SEED_COUNT: usize = 2;

/// Multiples of this number get a guaranteed slot when the pool offers one
pub const LUCKY_DIVISOR: u8 = 7;

/// Scraping defaults for the external frequency page
pub mod scraper {
    pub const DEFAULT_URL: &str = "https://za.national-lottery.com/lotto/hot-numbers";
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
    /// Jackpot lookups sit on the request path, so they give up sooner
    pub const DEFAULT_JACKPOT_TIMEOUT_SECONDS: u64 = 3;

    pub const FREQUENCY_CELL_SELECTOR: &str = "div.tableCell.centred.fluid";
    pub const BALL_SELECTOR: &str = "div.ball.lotto";
    pub const DRAWN_COUNT_SELECTOR: &str = "strong";
    pub const JACKPOT_SELECTOR: &str = "span.jackpotAmount";
}

/// Cache refresh cadence
pub mod cache {
    use super::Duration;

    pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);
    pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);
}

/// Bias strategy defaults
pub mod generator {
    pub const LUCKY_TOP_COUNT: usize = 14;
    pub const LUCKY_RETURN_COUNT: usize = 7;
    pub const UNDERDOG_COUNT: usize = 5;
    pub const CHAOS_RANGE: u8 = 49;
    pub const CHAOS_COUNT: usize = 5;
}

/// Messages surfaced to API callers
pub mod messages {
    pub const NO_DATA: &str = "Unable to fetch draw frequencies. Please try again later.";
    pub const GENERATION_FAILED: &str =
        "An error occurred during lotto number generation. Please try again later.";

    pub const TITLE: &str = "Lottoscope - Like Horoscope";
    pub const DESCRIPTION: &str =
        "A lotto number generator based on pseudo-random algorithms and frequency analysis.";
    pub const DISCLAIMER: &str = "Gambling is addictive. This is just a fun project created out of boredom. Values generated here are likely to lose you money!";
}

/// Whether a number lies inside the drawable domain
pub fn is_valid_number(number: u8) -> bool {
    (MIN_NUMBER..=MAX_NUMBER).contains(&number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_domain_bounds() {
        assert!(is_valid_number(1));
        assert!(is_valid_number(49));
        assert!(!is_valid_number(0));
        assert!(!is_valid_number(50));
    }
}
