//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input to [`Simulation::new`](crate::Simulation::new).
//! [`validate()`](SimulationConfig::validate) checks the structural
//! invariants that do not depend on random placement; per-extruder
//! problems surface from the extruder builder during construction.

use std::error::Error;
use std::fmt;

use loopex_core::{ConfigurationError, Direction, ExtruderError, LoadingSaturationError};
use loopex_extrusion::{
    BlockerModel, LoadingConfig, LoadingPolicy, DEFAULT_LIFETIME, DEFAULT_MAX_RELOAD_ATTEMPTS,
    DEFAULT_STALLED_LIFETIME,
};
use loopex_lattice::{LatticeError, Occupancy};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`SimulationConfig::validate()`] or while the
/// population is being built.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The lattice could not be constructed.
    Lattice(LatticeError),
    /// An extruder could not be configured or placed.
    Extruder(ExtruderError),
    /// The population is empty.
    NoExtruders,
    /// The extruders need more sites than the lattice has.
    Overcrowded {
        /// Requested population size.
        extruders: usize,
        /// Number of lattice sites.
        lattice_len: usize,
    },
    /// Explicit initial positions do not cover the population exactly.
    PositionCountMismatch {
        /// Requested population size.
        extruders: usize,
        /// Number of position pairs supplied.
        positions: usize,
    },
    /// A blocker entry lies outside the lattice.
    BlockerOutOfRange {
        /// The offending site.
        site: usize,
        /// Number of lattice sites.
        lattice_len: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::Extruder(e) => write!(f, "extruder: {e}"),
            Self::NoExtruders => write!(f, "population has no extruders"),
            Self::Overcrowded {
                extruders,
                lattice_len,
            } => write!(
                f,
                "{extruders} extruders need {} sites, lattice has {lattice_len}",
                2 * extruders
            ),
            Self::PositionCountMismatch {
                extruders,
                positions,
            } => write!(
                f,
                "{positions} initial positions given for {extruders} extruders"
            ),
            Self::BlockerOutOfRange { site, lattice_len } => {
                write!(f, "blocker at site {site} outside lattice of {lattice_len}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::Extruder(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

impl From<ExtruderError> for ConfigError {
    fn from(e: ExtruderError) -> Self {
        Self::Extruder(e)
    }
}

impl From<ConfigurationError> for ConfigError {
    fn from(e: ConfigurationError) -> Self {
        Self::Extruder(e.into())
    }
}

impl From<LoadingSaturationError> for ConfigError {
    fn from(e: LoadingSaturationError) -> Self {
        Self::Extruder(e.into())
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Number of lattice sites. Default: 1000. Minimum: 2.
    pub lattice_len: usize,
    /// Population size. Default: 10.
    pub extruders: usize,
    /// Seed of the simulation's random source. Default: 0.
    pub seed: u64,
    /// Mean residence time while free. Default: 100.
    pub lifetime: f64,
    /// Mean residence time while stalled. Default: 10.
    pub stalled_lifetime: f64,
    /// Capture and release tables shared by the population. Default: none.
    pub blockers: BlockerModel,
    /// Uniform or targeted loading. Default: uniform.
    pub loading: LoadingConfig,
    /// Explicit `(leg_a, leg_b)` sites for every extruder. `None` places
    /// each extruder with the loading policy. Ignored under targeted
    /// loading.
    pub initial_positions: Option<Vec<(usize, usize)>>,
    /// Placement attempts per reload. Default: 100 000.
    pub max_reload_attempts: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lattice_len: 1000,
            extruders: 10,
            seed: 0,
            lifetime: DEFAULT_LIFETIME,
            stalled_lifetime: DEFAULT_STALLED_LIFETIME,
            blockers: BlockerModel::empty(),
            loading: LoadingConfig::uniform(),
            initial_positions: None,
            max_reload_attempts: DEFAULT_MAX_RELOAD_ATTEMPTS,
        }
    }
}

impl SimulationConfig {
    /// Validate all structural invariants.
    ///
    /// Lifetimes, leg positions and loading spots are checked again, per
    /// extruder, by the builder during construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Lattice must hold at least one adjacent pair.
        Occupancy::new(self.lattice_len)?;
        // 2. Population must be non-empty and fit.
        if self.extruders == 0 {
            return Err(ConfigError::NoExtruders);
        }
        if self.extruders.saturating_mul(2) > self.lattice_len {
            return Err(ConfigError::Overcrowded {
                extruders: self.extruders,
                lattice_len: self.lattice_len,
            });
        }
        // 3. Loading configuration must be self-consistent.
        let policy = LoadingPolicy::resolve(&self.loading, self.lattice_len)?;
        // 4. Explicit positions, when used, cover every extruder.
        if let (Some(positions), false) = (&self.initial_positions, policy.is_targeted()) {
            if positions.len() != self.extruders {
                return Err(ConfigError::PositionCountMismatch {
                    extruders: self.extruders,
                    positions: positions.len(),
                });
            }
        }
        // 5. Blockers must sit on the lattice.
        for direction in Direction::ALL {
            let tables = [
                self.blockers.capture_table(direction),
                self.blockers.release_table(direction),
            ];
            if let Some(&site) = tables
                .iter()
                .flat_map(|t| t.keys())
                .find(|&&site| site >= self.lattice_len)
            {
                return Err(ConfigError::BlockerOutOfRange {
                    site,
                    lattice_len: self.lattice_len,
                });
            }
        }
        Ok(())
    }
}
