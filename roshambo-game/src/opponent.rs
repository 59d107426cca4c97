//! Seeded computer opponent.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::choice::Choice;

/// Draws choices uniformly from a deterministic `ChaCha20` stream.
#[derive(Debug, Clone)]
pub struct ComputerOpponent {
    seed: u64,
    rng: ChaCha20Rng,
}

impl ComputerOpponent {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pick(&mut self) -> Choice {
        let choice = Choice::ALL[self.rng.gen_range(0..Choice::ALL.len())];
        log::debug!("opponent (seed {}) picked {choice}", self.seed);
        choice
    }
}
