// Single randomness seam for generation, placement and shuffling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in the closed range `[lo, hi]`. `hi < lo` yields `lo`.
    fn between(&mut self, lo: i32, hi: i32) -> i32;
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo { lo } else { self.gen_range(lo..=hi) }
    }
}

/// Reproducible source for a given seed.
pub fn seeded(seed: u64) -> SmallRng { SmallRng::seed_from_u64(seed) }
