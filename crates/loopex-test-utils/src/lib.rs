//! Test utilities and scripted random sources for Loopex development.
//!
//! Provides a [`ScriptedSource`] implementing [`RandomSource`] so tests can
//! force specific unload/capture/release outcomes, an occupancy assertion
//! helper, and small fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{blocked_at, free_extruder, lattice, lattice_with};

use std::collections::VecDeque;

use loopex_core::RandomSource;
use loopex_extrusion::{check_population, Extruder};
use loopex_lattice::Occupancy;

/// A [`RandomSource`] that replays queued values.
///
/// Queue uniform draws with [`push_uniform`](ScriptedSource::push_uniform)
/// and integer draws with [`push_index`](ScriptedSource::push_index). Once
/// a queue runs dry the source falls back to its defaults: a uniform draw
/// just below 1.0 (so no probabilistic event fires unless its probability
/// is 1) and index 0.
///
/// Draw counters let tests assert how many values a step consumed.
pub struct ScriptedSource {
    uniforms: VecDeque<f64>,
    indices: VecDeque<usize>,
    fallback_uniform: f64,
    uniform_draws: usize,
    index_draws: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            uniforms: VecDeque::new(),
            indices: VecDeque::new(),
            fallback_uniform: 1.0 - f64::EPSILON,
            uniform_draws: 0,
            index_draws: 0,
        }
    }

    /// Source that replays `values` as uniform draws, in order.
    pub fn uniforms(values: impl IntoIterator<Item = f64>) -> Self {
        let mut s = Self::new();
        s.uniforms.extend(values);
        s
    }

    /// Set the value returned once the uniform queue is empty.
    pub fn with_fallback(mut self, value: f64) -> Self {
        self.fallback_uniform = value;
        self
    }

    pub fn push_uniform(&mut self, value: f64) {
        self.uniforms.push_back(value);
    }

    pub fn push_index(&mut self, value: usize) {
        self.indices.push_back(value);
    }

    /// Number of uniform draws taken so far.
    pub fn uniform_draws(&self) -> usize {
        self.uniform_draws
    }

    /// Number of integer draws taken so far.
    pub fn index_draws(&self) -> usize {
        self.index_draws
    }

    /// Uniform draws still queued.
    pub fn remaining_uniforms(&self) -> usize {
        self.uniforms.len()
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self) -> f64 {
        self.uniform_draws += 1;
        self.uniforms.pop_front().unwrap_or(self.fallback_uniform)
    }

    fn below(&mut self, upper: usize) -> usize {
        self.index_draws += 1;
        let value = self.indices.pop_front().unwrap_or(0);
        assert!(
            value < upper,
            "scripted index {value} out of range [0, {upper})"
        );
        value
    }
}

/// Panic with a descriptive message unless `occupancy` marks exactly the
/// legs of `extruders`.
pub fn assert_occupancy_consistent<'a>(
    occupancy: &Occupancy,
    extruders: impl IntoIterator<Item = &'a Extruder>,
) {
    if let Err(e) = check_population(occupancy, extruders) {
        panic!("occupancy invariant violated: {e}");
    }
}
