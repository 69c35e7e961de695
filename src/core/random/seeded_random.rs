use crate::core::actions::chaos_game::ports::random_source::RandomSource;
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Production [`RandomSource`] backed by a small fast PRNG.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Seeds from the wall clock, then re-seeds from the generator's own
    /// first output so that runs started in the same instant still diverge
    /// after the first draw.
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();

        let mut first = SmallRng::seed_from_u64(nanos as u64);
        let reseed = first.next_u64();

        tracing::debug!(reseed, "seeded random source from wall clock");

        Self::from_seed(reseed)
    }

    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.random_range(0..bound)
    }
}
