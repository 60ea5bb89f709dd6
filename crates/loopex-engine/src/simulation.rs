//! Lockstep simulation of an extruder population.
//!
//! [`Simulation`] owns everything a run needs: the [`Occupancy`], the
//! extruders, the shared blocker model (through the extruders' `Arc`) and
//! one [`ChaCha8Rng`]. A tick steps every extruder once, in index order,
//! lending each the occupancy and the random source in turn.
//!
//! # Determinism
//!
//! The random source is seeded once from [`SimulationConfig::seed`] and
//! every draw happens in a fixed order, so two simulations built from the
//! same configuration produce identical trajectories.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use loopex_core::{ExtruderId, LoadingSaturationError, TickId};
use loopex_extrusion::{check_population, Extruder, LoadingPolicy, OccupancyMismatch};
use loopex_lattice::Occupancy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::StepMetrics;
use crate::trajectory::Trajectory;

/// First disagreement between the population's legs and the occupancy.
pub type InvariantViolation = OccupancyMismatch;

// ── StepResult / StepError ──────────────────────────────────────

/// Result of a successful [`Simulation::step()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepResult {
    /// The tick that just completed.
    pub tick: TickId,
    /// Counters for this tick.
    pub metrics: StepMetrics,
}

/// Error returned from [`Simulation::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// An extruder unloaded and found no free adjacent pair.
    ///
    /// Extruders before it have already moved this tick; it and the ones
    /// after it have not. The tick counter is not advanced and the
    /// occupancy still matches the legs.
    ReloadSaturated {
        /// The tick being executed.
        tick: TickId,
        /// The extruder that failed to rebind.
        extruder: ExtruderId,
        /// The underlying failure.
        source: LoadingSaturationError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReloadSaturated {
                tick,
                extruder,
                source,
            } => write!(f, "tick {tick}: extruder {extruder}: {source}"),
        }
    }
}

impl std::error::Error for StepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReloadSaturated { source, .. } => Some(source),
        }
    }
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded driver for a population of extruders.
///
/// # Example
///
/// ```
/// use loopex_engine::{Simulation, SimulationConfig, Trajectory};
///
/// let mut sim = Simulation::new(SimulationConfig {
///     lattice_len: 200,
///     extruders: 4,
///     seed: 7,
///     ..Default::default()
/// })?;
/// let mut trajectory = Trajectory::new();
/// sim.run(50, Some(&mut trajectory))?;
/// assert_eq!(trajectory.len(), 50);
/// assert!(sim.check_occupancy().is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Simulation {
    occupancy: Occupancy,
    extruders: Vec<Extruder>,
    rng: ChaCha8Rng,
    tick: TickId,
    seed: u64,
    last_metrics: StepMetrics,
}

impl Simulation {
    /// Validate `config`, build the lattice and place every extruder.
    ///
    /// Under uniform loading without explicit positions, each extruder is
    /// placed on a free pair drawn by the reload procedure, consuming
    /// draws from the simulation's random source.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut occupancy = Occupancy::new(config.lattice_len)?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let policy = LoadingPolicy::resolve(&config.loading, config.lattice_len)?;
        let blockers = Arc::new(config.blockers);

        let mut extruders = Vec::with_capacity(config.extruders);
        for index in 0..config.extruders {
            let id = ExtruderId(u32::try_from(index).map_err(|_| ConfigError::Overcrowded {
                extruders: config.extruders,
                lattice_len: config.lattice_len,
            })?);
            let mut builder = Extruder::builder(id)
                .blockers(Arc::clone(&blockers))
                .lifetime(config.lifetime)
                .stalled_lifetime(config.stalled_lifetime)
                .loading_policy(policy.clone())
                .max_reload_attempts(config.max_reload_attempts);

            if !policy.is_targeted() {
                let (a, b) = match &config.initial_positions {
                    Some(positions) => positions[index],
                    None => {
                        let site = policy.find_free_pair(
                            &occupancy,
                            &mut rng,
                            config.max_reload_attempts,
                        )?;
                        (site, site + 1)
                    }
                };
                builder = builder.legs(a, b);
            }
            extruders.push(builder.build(&mut occupancy)?);
        }

        tracing::info!(
            lattice_len = config.lattice_len,
            extruders = extruders.len(),
            seed = config.seed,
            targeted = policy.is_targeted(),
            "simulation constructed"
        );

        Ok(Self {
            occupancy,
            extruders,
            rng,
            tick: TickId(0),
            seed: config.seed,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance every extruder by one step, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::ReloadSaturated`] if an extruder cannot rebind.
    /// The step stops at that extruder. Extruders before it keep their
    /// moves and the draws they consumed, but the tick counter does not
    /// advance, so calling `step` again runs the same tick number on the
    /// partly advanced state. Treat the error as fatal to the run.
    pub fn step(&mut self) -> Result<StepResult, StepError> {
        let start = Instant::now();
        let tick = TickId(self.tick.0 + 1);
        let mut metrics = StepMetrics::default();

        for extruder in &mut self.extruders {
            let id = extruder.id();
            extruder
                .translocate(&mut self.occupancy, &mut self.rng)
                .map_err(|source| StepError::ReloadSaturated {
                    tick,
                    extruder: id,
                    source,
                })?;
            metrics.record(extruder.last_events());
        }

        metrics.snapshot_flags(&self.extruders);
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.tick = tick;
        self.last_metrics = metrics.clone();
        Ok(StepResult { tick, metrics })
    }

    /// Run `ticks` steps, appending a frame to `trajectory` after each.
    ///
    /// Returns the run's accumulated metrics.
    ///
    /// # Errors
    ///
    /// Stops at the first failed step. Frames of completed ticks stay in
    /// `trajectory`.
    pub fn run(
        &mut self,
        ticks: u64,
        mut trajectory: Option<&mut Trajectory>,
    ) -> Result<StepMetrics, StepError> {
        let mut total = StepMetrics::default();
        for _ in 0..ticks {
            let result = self.step()?;
            total.accumulate(&result.metrics);
            if let Some(t) = trajectory.as_deref_mut() {
                t.record(result.tick, &self.extruders);
            }
        }
        Ok(total)
    }

    /// Check that the occupancy marks exactly the population's legs, one
    /// leg per site.
    pub fn check_occupancy(&self) -> Result<(), InvariantViolation> {
        check_population(&self.occupancy, &self.extruders)
    }

    /// The lattice occupancy.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The population, by index.
    pub fn extruders(&self) -> &[Extruder] {
        &self.extruders
    }

    /// The extruder with identity `id`, if any.
    pub fn extruder(&self, id: ExtruderId) -> Option<&Extruder> {
        self.extruders.get(id.index())
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The seed the random source was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("lattice_len", &self.occupancy.len())
            .field("extruders", &self.extruders.len())
            .field("current_tick", &self.tick)
            .field("seed", &self.seed)
            .finish()
    }
}
