//! The random-source seam.
//!
//! Every stochastic decision in an extruder step draws from a single
//! [`RandomSource`] passed in by the driver. Any [`rand::Rng`] qualifies,
//! so a run is reproducible by seeding one generator upstream; tests can
//! substitute a scripted source to force specific outcomes.

use rand::Rng;

/// Source of the two kinds of draws the simulator needs.
pub trait RandomSource {
    /// A uniform value in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// A uniform integer in `[0, upper)`. `upper` must be non-zero.
    fn below(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}
