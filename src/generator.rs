//! # Lotto Number Generator
//!
//! Orchestrates the pipeline: cached frequencies → bias strategies → balance
//! reducer → composed result with reasons, a fun fact and an optional jackpot.
//!
//! [`LottoGenerator::generate`] never fails and never panics outward. Missing
//! data becomes a user-facing error result; anything unexpected, panics
//! included, becomes a generic one.

use futures::FutureExt;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info};

use crate::balance::enforce_universal_balance;
use crate::config::GeneratorConfig;
use crate::constants::messages;
use crate::error::{LottoscopeError, Result};
use crate::frequency::FrequencyCache;
use crate::fun_facts::random_fun_fact;
use crate::jackpot::JackpotSource;
use crate::strategies::{chaos_jitter, inverse_fortuna_boost, lucky_echo_bias};

/// A successful generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LottoDraw {
    pub numbers: Vec<u8>,
    /// One entry per pipeline stage, in order
    pub reasons: Vec<String>,
    pub fun_fact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jackpot: Option<String>,
}

/// Either a draw or an error message, never both
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success(LottoDraw),
    Failure { error: String },
}

impl GenerationResult {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn draw(&self) -> Option<&LottoDraw> {
        match self {
            Self::Success(draw) => Some(draw),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error } => Some(error),
        }
    }
}

pub struct LottoGenerator {
    cache: Arc<FrequencyCache>,
    jackpot: Option<Arc<dyn JackpotSource>>,
    config: GeneratorConfig,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for LottoGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LottoGenerator")
            .field("cache", &self.cache)
            .field("jackpot_enabled", &self.jackpot.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl LottoGenerator {
    /// Build a generator; `config.rng_seed` pins the RNG for reproducible output
    pub fn new(
        cache: Arc<FrequencyCache>,
        jackpot: Option<Arc<dyn JackpotSource>>,
        config: GeneratorConfig,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        Self {
            cache,
            jackpot,
            config,
            rng: Mutex::new(rng),
        }
    }

    pub fn cache(&self) -> &Arc<FrequencyCache> {
        &self.cache
    }

    pub async fn generate(&self) -> GenerationResult {
        info!("Generating lotto numbers...");

        match AssertUnwindSafe(self.try_generate()).catch_unwind().await {
            Ok(Ok(draw)) => {
                info!(numbers = ?draw.numbers, "Lotto numbers generated successfully");
                GenerationResult::Success(draw)
            }
            Ok(Err(LottoscopeError::NoDataAvailable)) => {
                error!("Error in data processing: no draw frequencies available");
                GenerationResult::failure(messages::NO_DATA)
            }
            Ok(Err(e)) => {
                error!(error = %e, "Unexpected error during lotto number generation");
                GenerationResult::failure(messages::GENERATION_FAILED)
            }
            Err(panic) => {
                error!(
                    panic = %panic_message(panic.as_ref()),
                    "Lotto number generation panicked"
                );
                GenerationResult::failure(messages::GENERATION_FAILED)
            }
        }
    }

    async fn try_generate(&self) -> Result<LottoDraw> {
        let frequencies = self.cache.get().await;
        if frequencies.is_empty() {
            return Err(LottoscopeError::NoDataAvailable);
        }

        let (lucky, underdogs, chaos, numbers, fun_fact) = {
            let mut rng = self.rng.lock();
            let rng = &mut *rng;

            let lucky = lucky_echo_bias(
                &frequencies,
                self.config.lucky_top_count,
                self.config.lucky_return_count,
                rng,
            );
            let underdogs = inverse_fortuna_boost(&frequencies, self.config.underdog_count, rng);
            let chaos = chaos_jitter(self.config.chaos_range, self.config.chaos_count, rng);

            let pool: Vec<u8> = chaos.iter().chain(underdogs.iter()).copied().collect();
            let numbers = enforce_universal_balance(&pool, &lucky, rng);
            let fun_fact = random_fun_fact(rng);

            (lucky, underdogs, chaos, numbers, fun_fact)
        };

        let reasons = vec![
            describe("Selected most frequently drawn numbers", &lucky),
            describe("Boosted least frequently drawn numbers", &underdogs),
            describe("Generated random chaotic numbers", &chaos),
            describe("Enforced universal balance", &numbers),
        ];

        let jackpot = match &self.jackpot {
            Some(source) => source.get_jackpot().await,
            None => None,
        };

        Ok(LottoDraw {
            numbers,
            reasons,
            fun_fact: fun_fact.to_string(),
            jackpot,
        })
    }
}

fn describe(label: &str, numbers: &[u8]) -> String {
    let joined = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", label, joined)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_joins_numbers() {
        assert_eq!(
            describe("Enforced universal balance", &[7, 14, 3]),
            "Enforced universal balance: 7, 14, 3"
        );
        assert_eq!(describe("Generated random chaotic numbers", &[]), "Generated random chaotic numbers: ");
    }

    #[test]
    fn test_success_serializes_without_error_field() {
        let result = GenerationResult::Success(LottoDraw {
            numbers: vec![1, 2, 3, 4, 5, 6],
            reasons: vec!["a: 1".to_string()],
            fun_fact: "fact".to_string(),
            jackpot: None,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["numbers"], serde_json::json!([1, 2, 3, 4, 5, 6]));
        assert!(json.get("error").is_none());
        assert!(json.get("jackpot").is_none());
    }

    #[test]
    fn test_failure_serializes_only_error() {
        let json = serde_json::to_value(GenerationResult::failure(messages::NO_DATA)).unwrap();
        assert_eq!(json, serde_json::json!({ "error": messages::NO_DATA }));
    }

    #[test]
    fn test_panic_message_extraction() {
        let static_payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(static_payload.as_ref()), "boom");

        let owned_payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(owned_payload.as_ref()), "bang");

        let other_payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other_payload.as_ref()), "unknown panic payload");
    }
}
