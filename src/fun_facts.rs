//! Static pool of lottery trivia served alongside generated numbers.

use rand::seq::IndexedRandom;
use rand::Rng;

pub const FUN_FACTS: &[&str] = &[
    "The odds of matching all six numbers in a 6/49 draw are 1 in 13,983,816.",
    "Every combination of six numbers is exactly as likely as any other, including 1, 2, 3, 4, 5, 6.",
    "Lottery balls are weighed and measured before each draw to keep them as identical as possible.",
    "The first recorded lottery tickets date back to the Han Dynasty in China, around 200 BC.",
    "A 'hot' number has no better chance of being drawn next week than a 'cold' one.",
    "Seven is the most commonly picked 'lucky' number, which means jackpots on it are shared more often.",
    "The Great Wall of China is said to have been partly funded by an early form of keno.",
    "Many winners pick birthdays, so numbers above 31 are chosen less often by players.",
    "Draw machines are tested with trial runs before every live draw.",
    "Some lotteries roll unclaimed prize money into good causes after the claim period expires.",
];

/// Pick a fun fact with the given RNG
pub fn random_fun_fact<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FUN_FACTS.choose(rng).copied().unwrap_or(FUN_FACTS[0])
}

/// Pick a fun fact using the thread-local RNG
pub fn get_random_fun_fact() -> &'static str {
    random_fun_fact(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_fact_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            assert!(FUN_FACTS.contains(&random_fun_fact(&mut rng)));
        }
        assert!(FUN_FACTS.contains(&get_random_fun_fact()));
    }
}
