//! # Balance Reducer
//!
//! Merges the candidate pool and the lucky set into the final selection of
//! [`SELECTION_SIZE`] unique numbers.
//!
//! Reduction order:
//! 1. Deduplicate `pool` and `lucky` independently.
//! 2. Shuffle `pool ∪ lucky` and `lucky` independently.
//! 3. Seed with up to [`LUCKY_SEED_COUNT`] lucky numbers.
//! 4. Add one multiple of [`LUCKY_DIVISOR`] from the pool, if the pool has one
//!    that is not already selected.
//! 5. Fill the remaining slots from the shuffled union.
//! 6. If the union is too small to fill every slot, fall back to its first
//!    [`SELECTION_SIZE`] entries.
//!
//! The output only ever contains numbers taken from the inputs. When the pool
//! has no multiple of 7, none is made up.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use tracing::debug;

use crate::constants::{LUCKY_DIVISOR, LUCKY_SEED_COUNT, SELECTION_SIZE};

pub fn enforce_universal_balance<R: Rng + ?Sized>(
    pool: &[u8],
    lucky: &[u8],
    rng: &mut R,
) -> Vec<u8> {
    let pool_set: BTreeSet<u8> = pool.iter().copied().collect();
    let lucky_set: BTreeSet<u8> = lucky.iter().copied().collect();

    let mut all_available: Vec<u8> = pool_set.union(&lucky_set).copied().collect();
    let mut lucky_shuffled: Vec<u8> = lucky_set.iter().copied().collect();
    all_available.shuffle(rng);
    lucky_shuffled.shuffle(rng);

    let mut selected: Vec<u8> = Vec::with_capacity(SELECTION_SIZE);
    selected.extend(lucky_shuffled.iter().take(LUCKY_SEED_COUNT));

    let lucky_seven = all_available
        .iter()
        .copied()
        .find(|n| n % LUCKY_DIVISOR == 0 && pool_set.contains(n) && !selected.contains(n));
    if let Some(seven) = lucky_seven {
        selected.push(seven);
    }

    for &number in &all_available {
        if selected.len() >= SELECTION_SIZE {
            break;
        }
        if !selected.contains(&number) {
            selected.push(number);
        }
    }

    if selected.len() < SELECTION_SIZE {
        debug!(
            available = all_available.len(),
            "Not enough unique candidates; falling back to the shuffled union"
        );
        all_available.truncate(SELECTION_SIZE);
        return all_available;
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_produces_six_unique_numbers() {
        let pool = [3, 17, 17, 22, 40, 41, 45, 3];
        let lucky = [1, 2, 5, 9, 11];

        let result = enforce_universal_balance(&pool, &lucky, &mut rng(11));

        assert_eq!(result.len(), 6);
        let unique: HashSet<u8> = result.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_first_two_come_from_lucky_set() {
        let pool = [30, 31, 32, 33, 34, 36];
        let lucky = [1, 2, 3, 4];

        for seed in 0..20 {
            let result = enforce_universal_balance(&pool, &lucky, &mut rng(seed));
            assert!(lucky.contains(&result[0]));
            assert!(lucky.contains(&result[1]));
        }
    }

    #[test]
    fn test_includes_pool_multiple_of_seven() {
        let pool = [14, 30, 31, 32, 33, 34, 36, 38];
        let lucky = [1, 2, 3, 4, 5, 6, 8, 9];

        for seed in 0..20 {
            let result = enforce_universal_balance(&pool, &lucky, &mut rng(seed));
            assert_eq!(result[2], 14, "seed {seed}: {result:?}");
        }
    }

    #[test]
    fn test_never_synthesizes_a_multiple_of_seven() {
        let pool = [10, 11, 12, 13];
        let lucky = [1, 2, 3, 4];

        for seed in 0..20 {
            let result = enforce_universal_balance(&pool, &lucky, &mut rng(seed));
            assert!(result.iter().all(|n| n % 7 != 0), "seed {seed}: {result:?}");
        }
    }

    #[test]
    fn test_lucky_only_multiple_of_seven_does_not_take_the_bonus_slot() {
        // 21 is only in the lucky set, so step 4 has nothing to add
        let pool = [10, 11, 12, 13, 15, 16];
        let lucky = [21];

        let result = enforce_universal_balance(&pool, &lucky, &mut rng(5));
        assert_eq!(result[0], 21);
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_degenerate_input_returns_every_unique_value() {
        let pool = [1, 2, 2, 3];
        let lucky = [3, 4];

        let mut result = enforce_universal_balance(&pool, &lucky, &mut rng(2));
        result.sort_unstable();
        assert_eq!(result, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_input_returns_empty_selection() {
        assert!(enforce_universal_balance(&[], &[], &mut rng(0)).is_empty());
    }

    proptest! {
        /// Property: output is min(6, |pool ∪ lucky|) unique values, all taken from the inputs
        #[test]
        fn output_is_unique_and_drawn_from_inputs(
            pool in prop::collection::vec(1u8..=49, 0..15),
            lucky in prop::collection::vec(1u8..=49, 0..10),
            seed in any::<u64>(),
        ) {
            let inputs: HashSet<u8> = pool.iter().chain(lucky.iter()).copied().collect();
            let result = enforce_universal_balance(&pool, &lucky, &mut StdRng::seed_from_u64(seed));

            let unique: HashSet<u8> = result.iter().copied().collect();
            prop_assert_eq!(unique.len(), result.len());
            prop_assert_eq!(result.len(), inputs.len().min(SELECTION_SIZE));
            prop_assert!(result.iter().all(|n| inputs.contains(n)));
        }
    }
}
