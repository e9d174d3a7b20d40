//! # Configuration
//!
//! TOML-backed configuration for the lottoscope service.
//!
//! Every section has defaults, so an empty file (or no file at all) produces a
//! working configuration:
//!
//! ```toml
//! [web]
//! bind_address = "0.0.0.0:5000"
//!
//! [scraper]
//! url = "https://za.national-lottery.com/lotto/hot-numbers"
//! timeout_seconds = 10
//!
//! [cache]
//! ttl_seconds = 86400
//! refresh_interval_seconds = 86400
//!
//! [generator]
//! lucky_top_count = 14
//! lucky_return_count = 7
//! ```
//!
//! ## Validation Strategy
//!
//! Uses `validator` for declarative bounds (`#[validate(range(..))]`) and
//! `#[validate(nested)]` for section composition. Cross-field rules live in
//! schema functions next to the struct they check.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use validator::{Validate, ValidationError};

use crate::constants;

/// Root configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct LottoscopeConfig {
    #[validate(nested)]
    pub web: WebConfig,

    #[validate(nested)]
    pub scraper: ScraperConfig,

    #[validate(nested)]
    pub cache: CacheConfig,

    #[validate(nested)]
    pub generator: GeneratorConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct WebConfig {
    /// Address to bind the web server to
    #[validate(length(min = 1))]
    pub bind_address: String,

    /// Request timeout in milliseconds
    #[validate(range(min = 100, max = 300_000))]
    pub request_timeout_ms: u64,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            request_timeout_ms: 30_000,
        }
    }
}

impl WebConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// External page scraping configuration
///
/// The selectors are the only knowledge of the page markup in the whole crate;
/// when the site changes, this is what gets updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct ScraperConfig {
    /// Page serving both the frequency table and the jackpot
    #[validate(length(min = 1))]
    pub url: String,

    /// Bounded request timeout, the only limit on worst-case latency
    #[validate(range(min = 1, max = 120))]
    pub timeout_seconds: u64,

    /// Timeout for the jackpot lookup made while serving `/generate`
    #[validate(range(min = 1, max = 120))]
    pub jackpot_timeout_seconds: u64,

    /// One element per drawn number
    #[validate(length(min = 1))]
    pub frequency_cell_selector: String,

    /// Number inside a frequency cell
    #[validate(length(min = 1))]
    pub ball_selector: String,

    /// Drawn count inside a frequency cell
    #[validate(length(min = 1))]
    pub drawn_count_selector: String,

    #[validate(length(min = 1))]
    pub jackpot_selector: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: constants::scraper::DEFAULT_URL.to_string(),
            timeout_seconds: constants::scraper::DEFAULT_TIMEOUT_SECONDS,
            jackpot_timeout_seconds: constants::scraper::DEFAULT_JACKPOT_TIMEOUT_SECONDS,
            frequency_cell_selector: constants::scraper::FREQUENCY_CELL_SELECTOR.to_string(),
            ball_selector: constants::scraper::BALL_SELECTOR.to_string(),
            drawn_count_selector: constants::scraper::DRAWN_COUNT_SELECTOR.to_string(),
            jackpot_selector: constants::scraper::JACKPOT_SELECTOR.to_string(),
        }
    }
}

impl ScraperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn jackpot_timeout(&self) -> Duration {
        Duration::from_secs(self.jackpot_timeout_seconds)
    }
}

/// Frequency cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum age of a cached table before it is treated as a miss
    #[validate(range(min = 1))]
    pub ttl_seconds: u64,

    /// Period of the background invalidate-and-refetch task
    #[validate(range(min = 1))]
    pub refresh_interval_seconds: u64,

    /// Whether the background refresh task runs at all
    pub refresh_enabled: bool,

    /// Fetch frequencies once during bootstrap so the first request is warm
    pub prime_on_startup: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: constants::cache::DEFAULT_TTL.as_secs(),
            refresh_interval_seconds: constants::cache::DEFAULT_REFRESH_INTERVAL.as_secs(),
            refresh_enabled: true,
            prime_on_startup: true,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_seconds)
    }
}

/// Bias strategy parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "snake_case")]
#[validate(schema(function = "validate_generator_counts"))]
pub struct GeneratorConfig {
    /// How many of the most frequent numbers the lucky strategy draws from
    #[validate(range(min = 1, max = 49))]
    pub lucky_top_count: usize,

    /// How many lucky numbers survive the shuffle
    #[validate(range(min = 1, max = 49))]
    pub lucky_return_count: usize,

    #[validate(range(min = 1, max = 49))]
    pub underdog_count: usize,

    /// Upper bound (inclusive) for chaos numbers
    #[validate(range(min = 1, max = 49))]
    pub chaos_range: u8,

    #[validate(range(min = 1, max = 49))]
    pub chaos_count: usize,

    /// Fixed seed for reproducible output; entropy-seeded when absent
    pub rng_seed: Option<u64>,

    /// Scrape the jackpot display string on every generation
    pub jackpot_enabled: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lucky_top_count: constants::generator::LUCKY_TOP_COUNT,
            lucky_return_count: constants::generator::LUCKY_RETURN_COUNT,
            underdog_count: constants::generator::UNDERDOG_COUNT,
            chaos_range: constants::generator::CHAOS_RANGE,
            chaos_count: constants::generator::CHAOS_COUNT,
            rng_seed: None,
            jackpot_enabled: true,
        }
    }
}

fn validate_generator_counts(config: &GeneratorConfig) -> Result<(), ValidationError> {
    if config.lucky_return_count > config.lucky_top_count {
        let mut error = ValidationError::new("lucky_return_count");
        error.message = Some("lucky_return_count cannot exceed lucky_top_count".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LottoscopeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scraper.timeout(), Duration::from_secs(10));
        assert_eq!(config.scraper.jackpot_timeout(), Duration::from_secs(3));
        assert_eq!(config.cache.ttl(), Duration::from_secs(86_400));
        assert_eq!(config.generator.lucky_top_count, 14);
        assert_eq!(config.generator.lucky_return_count, 7);
        assert_eq!(config.generator.underdog_count, 5);
        assert!(config.generator.rng_seed.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: LottoscopeConfig = toml::from_str(
            r#"
            [generator]
            rng_seed = 42
            jackpot_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.rng_seed, Some(42));
        assert!(!config.generator.jackpot_enabled);
        assert_eq!(config.generator.chaos_range, 49);
        assert_eq!(config.web, WebConfig::default());
    }

    #[test]
    fn test_return_count_above_top_count_is_rejected() {
        let mut config = LottoscopeConfig::default();
        config.generator.lucky_top_count = 3;
        config.generator.lucky_return_count = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_chaos_range_out_of_domain_is_rejected() {
        let mut config = LottoscopeConfig::default();
        config.generator.chaos_range = 60;
        assert!(config.validate().is_err());
    }
}
