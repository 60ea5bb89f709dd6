//! Lockstep driver for Loopex simulations.
//!
//! [`Simulation`] owns the lattice occupancy, a population of
//! [`Extruder`](loopex_extrusion::Extruder)s and one seeded random
//! source. Each [`step()`](Simulation::step) advances every extruder once,
//! in index order, and reports per-tick [`StepMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod simulation;
pub mod trajectory;

pub use config::{ConfigError, SimulationConfig};
pub use metrics::StepMetrics;
pub use simulation::{InvariantViolation, Simulation, StepError, StepResult};
pub use trajectory::{Frame, Trajectory};
