//! Where an unloaded extruder rebinds.
//!
//! Two placement strategies:
//! - **Uniform**: any free adjacent pair on the lattice, chosen uniformly.
//! - **Targeted**: one of a fixed list of loading spots, chosen by
//!   weighted sampling over a cumulative weight sequence.
//!
//! [`LoadingConfig`] is the raw, user-facing description (mirroring the
//! `targeted_loading` / `loading_spots` / `loading_weights` triple);
//! [`LoadingPolicy`] is its validated form, cheap to clone across a
//! population.

use loopex_core::{ConfigurationError, LoadingSaturationError, RandomSource};
use loopex_lattice::Occupancy;
use std::sync::Arc;

/// Raw loading configuration as supplied by the driver.
///
/// Targeted loading needs both the flag and a spot list; either half on
/// its own is rejected by [`LoadingPolicy::resolve`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoadingConfig {
    /// Load at predetermined spots instead of uniformly.
    pub targeted_loading: bool,
    /// Loading spot of every extruder in the population, by index.
    pub loading_spots: Option<Vec<usize>>,
    /// Cumulative probability of each spot. `None` = evenly spaced
    /// `1/n, 2/n, ..., 1`.
    pub loading_weights: Option<Vec<f64>>,
}

impl LoadingConfig {
    /// Uniform loading.
    pub fn uniform() -> Self {
        Self::default()
    }

    /// Targeted loading at `spots` with optional cumulative `weights`.
    pub fn targeted(spots: Vec<usize>, weights: Option<Vec<f64>>) -> Self {
        Self {
            targeted_loading: true,
            loading_spots: Some(spots),
            loading_weights: weights,
        }
    }
}

/// Validated targeted-loading table.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetedLoading {
    spots: Arc<[usize]>,
    cumulative: Arc<[f64]>,
}

impl TargetedLoading {
    /// Validate a spot list and its cumulative weights.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `spots` is empty
    /// - any spot `p` has `p + 1 >= lattice_len`
    /// - `weights` differs in length from `spots`
    /// - a weight is NaN or outside `[0, 1]`
    /// - the weights decrease anywhere
    /// - the last weight is zero
    pub fn new(
        spots: Vec<usize>,
        weights: Option<Vec<f64>>,
        lattice_len: usize,
    ) -> Result<Self, ConfigurationError> {
        if spots.is_empty() {
            return Err(ConfigurationError::EmptyLoadingSpots);
        }
        if let Some(&spot) = spots.iter().find(|&&p| p + 1 >= lattice_len) {
            return Err(ConfigurationError::LoadingSpotOutOfRange { spot, lattice_len });
        }

        let n = spots.len();
        let cumulative = match weights {
            Some(w) => w,
            None => (1..=n).map(|i| i as f64 / n as f64).collect(),
        };
        if cumulative.len() != n {
            return Err(ConfigurationError::WeightsLengthMismatch {
                spots: n,
                weights: cumulative.len(),
            });
        }
        for (index, &value) in cumulative.iter().enumerate() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigurationError::InvalidWeight { index, value });
            }
            if index > 0 && value < cumulative[index - 1] {
                return Err(ConfigurationError::WeightsNotMonotonic { index });
            }
        }
        if cumulative[n - 1] <= 0.0 {
            return Err(ConfigurationError::ZeroTotalWeight);
        }

        Ok(Self {
            spots: spots.into(),
            cumulative: cumulative.into(),
        })
    }

    /// The loading spots, by extruder index.
    pub fn spots(&self) -> &[usize] {
        &self.spots
    }

    /// The cumulative weight of each spot.
    pub fn cumulative_weights(&self) -> &[f64] {
        &self.cumulative
    }

    /// The spot selected by a uniform `draw`: the first whose cumulative
    /// weight exceeds it. `None` if the draw is at or above the final
    /// weight.
    pub fn spot_for(&self, draw: f64) -> Option<usize> {
        let idx = self.cumulative.partition_point(|&w| w <= draw);
        self.spots.get(idx).copied()
    }
}

/// Validated placement strategy used whenever an extruder (re)loads.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadingPolicy {
    /// Any free adjacent pair, uniformly.
    #[default]
    Uniform,
    /// Weighted choice among fixed spots.
    Targeted(TargetedLoading),
}

impl LoadingPolicy {
    /// Validate a raw [`LoadingConfig`] against a lattice of `lattice_len`.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::TargetedLoadingWithoutSpots`] and
    /// [`ConfigurationError::SpotsWithoutTargetedLoading`] for the two
    /// inconsistent flag/list combinations, plus any
    /// [`TargetedLoading::new`] failure.
    pub fn resolve(
        config: &LoadingConfig,
        lattice_len: usize,
    ) -> Result<Self, ConfigurationError> {
        match (config.targeted_loading, &config.loading_spots) {
            (true, None) => Err(ConfigurationError::TargetedLoadingWithoutSpots),
            (false, Some(_)) => Err(ConfigurationError::SpotsWithoutTargetedLoading),
            (false, None) if config.loading_weights.is_some() => {
                Err(ConfigurationError::WeightsWithoutTargetedLoading)
            }
            (false, None) => Ok(Self::Uniform),
            (true, Some(spots)) => Ok(Self::Targeted(TargetedLoading::new(
                spots.clone(),
                config.loading_weights.clone(),
                lattice_len,
            )?)),
        }
    }

    /// Whether this is targeted loading.
    pub fn is_targeted(&self) -> bool {
        matches!(self, Self::Targeted(_))
    }

    /// Draw candidate sites until one with both `p` and `p + 1` free turns
    /// up, giving up after `max_attempts` draws.
    ///
    /// Uniform mode draws `p` in `[0, len - 1)`; targeted mode draws one
    /// uniform value per attempt and maps it through
    /// [`TargetedLoading::spot_for`].
    pub fn find_free_pair<R: RandomSource + ?Sized>(
        &self,
        occupancy: &Occupancy,
        rng: &mut R,
        max_attempts: u32,
    ) -> Result<usize, LoadingSaturationError> {
        for _ in 0..max_attempts {
            let candidate = match self {
                Self::Uniform => Some(rng.below(occupancy.len() - 1)),
                Self::Targeted(table) => table.spot_for(rng.uniform()),
            };
            if let Some(site) = candidate {
                if occupancy.is_pair_free(site) {
                    return Ok(site);
                }
            }
        }
        Err(LoadingSaturationError {
            attempts: max_attempts,
            lattice_len: occupancy.len(),
        })
    }
}
