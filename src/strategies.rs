//! # Bias Strategies
//!
//! Three independent selectors turning a [`FrequencyTable`] into candidate
//! numbers. They are pure with respect to the table; the injected RNG is the only
//! source of variation, so a seeded RNG makes them reproducible.
//!
//! Tables smaller than the requested counts yield however many entries exist.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::frequency::FrequencyTable;

/// Lucky Echo Bias: a shuffled sample of the most frequently drawn numbers
///
/// Takes the `top_count` most drawn numbers, shuffles them and keeps the first
/// `return_count`. The result never contains duplicates.
pub fn lucky_echo_bias<R: Rng + ?Sized>(
    table: &FrequencyTable,
    top_count: usize,
    return_count: usize,
    rng: &mut R,
) -> Vec<u8> {
    let mut top_numbers: Vec<u8> = table
        .by_count_descending()
        .into_iter()
        .take(top_count)
        .map(|(number, _)| number)
        .collect();

    top_numbers.shuffle(rng);
    top_numbers.truncate(return_count);
    top_numbers
}

/// Inverse Fortuna Boost: the least frequently drawn numbers
///
/// The selected set is always the `bottom_count` smallest counts; only its order
/// is shuffled.
pub fn inverse_fortuna_boost<R: Rng + ?Sized>(
    table: &FrequencyTable,
    bottom_count: usize,
    rng: &mut R,
) -> Vec<u8> {
    let mut underdogs: Vec<u8> = table
        .by_count_ascending()
        .into_iter()
        .take(bottom_count)
        .map(|(number, _)| number)
        .collect();

    underdogs.shuffle(rng);
    underdogs
}

/// Chaos Jitter: `count` uniform draws from `1..=range`, repeats allowed
pub fn chaos_jitter<R: Rng + ?Sized>(range: u8, count: usize, rng: &mut R) -> Vec<u8> {
    let upper = range.max(1);
    (0..count).map(|_| rng.random_range(1..=upper)).collect()
}
