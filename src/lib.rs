#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Lottoscope
//!
//! Lotto number generator biased by scraped draw-frequency statistics. Like a
//! horoscope, but for lotto numbers: illustrative, not predictive.
//!
//! ## Pipeline
//!
//! ```text
//! external page ─▶ FrequencySource ─▶ FrequencyCache (single slot, 24h)
//!                                          │
//!              ┌───────────────────────────┼───────────────────────────┐
//!              ▼                           ▼                           ▼
//!       lucky_echo_bias          inverse_fortuna_boost            chaos_jitter
//!              │                           └──────────┬────────────────┘
//!              │ lucky                                │ pool
//!              └──────────▶ enforce_universal_balance ◀┘
//!                                      │
//!                                      ▼
//!                     GenerationResult (numbers, reasons, fun fact, jackpot)
//! ```
//!
//! ## Module Organization
//!
//! - [`scraping`] - HTTP client and HTML parsers for the external page
//! - [`frequency`] - Frequency table, sources and the single-slot cache
//! - [`strategies`] - Lucky, underdog and chaos selectors
//! - [`balance`] - Reduction to six unique numbers
//! - [`generator`] - Orchestration and user-facing results
//! - [`jackpot`] - Optional jackpot display string
//! - [`refresh`] - Periodic cache refresh task
//! - [`web`] - axum routes and handlers
//! - [`bootstrap`] - Wiring and lifecycle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lottoscope::{ConfigLoader, ServiceBootstrap};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load_from_env()?;
//! let handle = ServiceBootstrap::bootstrap(config).await?;
//! println!("listening on {}", handle.local_addr);
//! handle.stop().await?;
//! # Ok(())
//! # }
//! ```

pub mod balance;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod fun_facts;
pub mod generator;
pub mod jackpot;
pub mod logging;
pub mod refresh;
pub mod scraping;
pub mod strategies;
pub mod web;

pub use bootstrap::{ServiceBootstrap, ServiceHandle};
pub use config::{ConfigLoader, LottoscopeConfig};
pub use error::{LottoscopeError, Result};
pub use frequency::{FrequencyCache, FrequencySource, FrequencyTable};
pub use generator::{GenerationResult, LottoDraw, LottoGenerator};
pub use jackpot::JackpotSource;
