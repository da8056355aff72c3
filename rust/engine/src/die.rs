use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// A source of die rolls. Each call yields an integer in 1..=6, uniformly
/// distributed and independent of earlier calls.
///
/// The game owns its source as a boxed trait object, so tests can inject a
/// scripted sequence in place of a live generator.
pub trait RandomSource {
    fn roll(&mut self) -> u8;
}

/// Six-sided die backed by a ChaCha20 generator with an explicit seed.
///
/// Two dice built from the same seed produce identical roll sequences.
#[derive(Debug, Clone)]
pub struct Die {
    rng: ChaCha20Rng,
}

impl Die {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for Die {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}
