//! RNG-backed coins for the generator.
//!
//! Both coins land heads with [`THIRD_WORD_PROBABILITY`].

use handlegen_core::domain::{CoinSource, THIRD_WORD_PROBABILITY};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Coin drawing from the thread-local RNG. Output differs between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadCoin;

impl ThreadCoin {
    pub fn new() -> Self {
        Self
    }
}

impl CoinSource for ThreadCoin {
    fn flip(&mut self) -> bool {
        rand::rng().random_bool(THIRD_WORD_PROBABILITY)
    }
}

/// Coin with a fixed seed: the same seed yields the same suggestions.
#[derive(Debug, Clone)]
pub struct SeededCoin {
    rng: StdRng,
}

impl SeededCoin {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CoinSource for SeededCoin {
    fn flip(&mut self) -> bool {
        self.rng.random_bool(THIRD_WORD_PROBABILITY)
    }
}
