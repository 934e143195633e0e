//! Seedable uniform randomness for Monte Carlo sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random source for Monte Carlo sampling.
///
/// Wraps a [`StdRng`] so an estimate can be reproduced from a fixed seed.
#[derive(Debug, Clone)]
pub struct MonteCarloRng {
    rng: StdRng,
}

impl MonteCarloRng {
    /// Creates a source from an optional seed.
    ///
    /// `None` seeds from system entropy; a fixed seed replays the same
    /// sample sequence.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Draws a uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Draws a uniform sample in `[lo, hi)`.
    pub fn uniform_in(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.uniform()
    }
}
