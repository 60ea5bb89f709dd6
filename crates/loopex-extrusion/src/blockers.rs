//! Directional capture/release tables.
//!
//! A blocker is a lattice site that can capture a passing leg with some
//! probability and, once it holds one, release it with another. Blockers
//! are directional: a site may capture left-moving legs, right-moving
//! legs, or both with different strengths.
//!
//! Constructed via the builder pattern: [`BlockerModel::builder`].

use indexmap::IndexMap;
use loopex_core::{ConfigurationError, Direction};

/// Site → probability lookup for one direction.
pub type BlockerTable = IndexMap<usize, f64>;

/// Immutable capture and release probabilities, keyed by site and
/// direction.
///
/// Shared read-only across every extruder of a population (wrap it in an
/// `Arc`). Unlisted sites have probability 0.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockerModel {
    capture: [BlockerTable; 2],
    release: [BlockerTable; 2],
}

/// Builder for [`BlockerModel`].
#[derive(Clone, Debug, Default)]
pub struct BlockerModelBuilder {
    capture: [BlockerTable; 2],
    release: [BlockerTable; 2],
}

impl BlockerModel {
    /// Create a new builder with empty tables.
    pub fn builder() -> BlockerModelBuilder {
        BlockerModelBuilder::default()
    }

    /// A model with no blockers at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Probability that a leg walking in `direction` is captured at `position`.
    pub fn capture_probability(&self, position: usize, direction: Direction) -> f64 {
        self.capture[direction.slot()]
            .get(&position)
            .copied()
            .unwrap_or(0.0)
    }

    /// Probability that a captured leg walking in `direction` is released
    /// at `position`.
    pub fn release_probability(&self, position: usize, direction: Direction) -> f64 {
        self.release[direction.slot()]
            .get(&position)
            .copied()
            .unwrap_or(0.0)
    }

    /// The capture table for `direction`.
    pub fn capture_table(&self, direction: Direction) -> &BlockerTable {
        &self.capture[direction.slot()]
    }

    /// The release table for `direction`.
    pub fn release_table(&self, direction: Direction) -> &BlockerTable {
        &self.release[direction.slot()]
    }

    /// Whether no site has a capture entry in either direction.
    pub fn is_empty(&self) -> bool {
        self.capture.iter().all(IndexMap::is_empty)
    }
}

impl BlockerModelBuilder {
    /// Add (or overwrite) a capture entry.
    pub fn capture(mut self, direction: Direction, position: usize, probability: f64) -> Self {
        self.capture[direction.slot()].insert(position, probability);
        self
    }

    /// Add (or overwrite) a release entry.
    pub fn release(mut self, direction: Direction, position: usize, probability: f64) -> Self {
        self.release[direction.slot()].insert(position, probability);
        self
    }

    /// Merge a whole capture table for `direction`.
    pub fn capture_table(
        mut self,
        direction: Direction,
        entries: impl IntoIterator<Item = (usize, f64)>,
    ) -> Self {
        self.capture[direction.slot()].extend(entries);
        self
    }

    /// Merge a whole release table for `direction`.
    pub fn release_table(
        mut self,
        direction: Direction,
        entries: impl IntoIterator<Item = (usize, f64)>,
    ) -> Self {
        self.release[direction.slot()].extend(entries);
        self
    }

    /// Build the model, validating every probability.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidProbability`] for the first
    /// entry that is NaN or outside `[0, 1]`.
    pub fn build(self) -> Result<BlockerModel, ConfigurationError> {
        for table in self.capture.iter().chain(self.release.iter()) {
            if let Some((&position, &value)) =
                table.iter().find(|(_, p)| !(0.0..=1.0).contains(*p))
            {
                return Err(ConfigurationError::InvalidProbability { position, value });
            }
        }
        Ok(BlockerModel {
            capture: self.capture,
            release: self.release,
        })
    }
}
