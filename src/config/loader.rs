//! Configuration loader
//!
//! 0. Loads a `.env` file if present (via dotenvy)
//! 1. Reads the TOML file named by `LOTTOSCOPE_CONFIG_PATH`, or uses defaults
//! 2. Applies environment overrides
//! 3. Validates with the validator library

use std::path::{Path, PathBuf};
use tracing::{debug, info};
use validator::Validate;

use super::LottoscopeConfig;
use crate::error::{LottoscopeError, Result};

pub const CONFIG_PATH_VAR: &str = "LOTTOSCOPE_CONFIG_PATH";
pub const ENVIRONMENT_VAR: &str = "LOTTOSCOPE_ENV";
pub const BIND_ADDRESS_VAR: &str = "LOTTOSCOPE_BIND_ADDRESS";
pub const SCRAPER_URL_VAR: &str = "LOTTOSCOPE_SCRAPER_URL";

/// Zero-state loader; all methods are associated functions
#[derive(Debug)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Detect environment from `LOTTOSCOPE_ENV` or default to "development"
    pub fn detect_environment() -> String {
        std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string())
    }

    /// Load configuration from the environment
    ///
    /// A missing `LOTTOSCOPE_CONFIG_PATH` is not an error: every section has
    /// defaults.
    pub fn load_from_env() -> Result<LottoscopeConfig> {
        dotenvy::dotenv().ok();

        let environment = Self::detect_environment();
        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                info!(
                    config_path = %path,
                    environment = %environment,
                    "Loading configuration from file"
                );
                Self::read_file(Path::new(&path))?
            }
            Err(_) => {
                info!(environment = %environment, "No config file set, using defaults");
                LottoscopeConfig::default()
            }
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load and validate configuration from a specific TOML file
    pub fn load_from_path(path: &PathBuf) -> Result<LottoscopeConfig> {
        let config = Self::read_file(path)?;
        Self::validate(&config)?;
        info!("Configuration loaded successfully from {}", path.display());
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<LottoscopeConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LottoscopeError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&contents).map_err(|e| {
            LottoscopeError::config_error(format!(
                "Invalid TOML in '{}': {}",
                path.display(),
                e
            ))
        })
    }

    fn apply_env_overrides(config: &mut LottoscopeConfig) {
        if let Ok(bind_address) = std::env::var(BIND_ADDRESS_VAR) {
            debug!(bind_address = %bind_address, "Overriding web.bind_address from environment");
            config.web.bind_address = bind_address;
        }

        if let Ok(url) = std::env::var(SCRAPER_URL_VAR) {
            debug!(url = %url, "Overriding scraper.url from environment");
            config.scraper.url = url;
        }
    }

    fn validate(config: &LottoscopeConfig) -> Result<()> {
        config.validate().map_err(|errors| {
            LottoscopeError::config_error(format!(
                "Configuration validation failed: {}",
                errors
            ))
        })
    }
}
