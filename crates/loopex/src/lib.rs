//! Loopex: a stochastic simulator of loop extrusion factors on a
//! one-dimensional lattice.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Loopex sub-crates. For most users, adding `loopex` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use loopex::prelude::*;
//!
//! // Two convergent blockers 200 sites apart.
//! let blockers = BlockerModel::builder()
//!     .capture(Direction::Right, 300, 0.9)
//!     .release(Direction::Right, 300, 0.01)
//!     .capture(Direction::Left, 100, 0.9)
//!     .release(Direction::Left, 100, 0.01)
//!     .build()
//!     .unwrap();
//!
//! let mut sim = Simulation::new(SimulationConfig {
//!     lattice_len: 400,
//!     extruders: 8,
//!     seed: 42,
//!     blockers,
//!     ..Default::default()
//! })
//! .unwrap();
//! let result = sim.step().unwrap();
//! assert_eq!(result.tick, TickId(1));
//! assert!(sim.check_occupancy().is_ok());
//! ```
//!
//! Extruders can also be driven by hand, lending them a lattice and any
//! `rand::Rng`:
//!
//! ```rust
//! use loopex::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut occupancy = Occupancy::new(100).unwrap();
//! let mut extruder = Extruder::builder(ExtruderId(0))
//!     .legs(49, 50)
//!     .build(&mut occupancy)
//!     .unwrap();
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
//! for _ in 0..10 {
//!     extruder.translocate(&mut occupancy, &mut rng).unwrap();
//! }
//! assert_eq!(occupancy.occupied_count(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loopex-core` | IDs, directions, errors, the random-source trait |
//! | [`lattice`] | `loopex-lattice` | Site occupancy |
//! | [`extrusion`] | `loopex-extrusion` | Legs, blockers, loading and the step rule |
//! | [`engine`] | `loopex-engine` | Lockstep population driver, metrics, trajectories |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`loopex-core`).
///
/// Contains [`types::Direction`], the error types and the
/// [`types::RandomSource`] trait every stochastic operation draws from.
pub use loopex_core as types;

/// Lattice occupancy (`loopex-lattice`).
pub use loopex_lattice as lattice;

/// The extruder and its step rule (`loopex-extrusion`).
///
/// [`extrusion::Extruder`] is built with [`extrusion::ExtruderBuilder`]
/// and shares an [`extrusion::BlockerModel`] with its population.
pub use loopex_extrusion as extrusion;

/// Population driver (`loopex-engine`).
///
/// [`engine::Simulation`] steps a population in lockstep and can record
/// an [`engine::Trajectory`] for plotting.
pub use loopex_engine as engine;

/// Common imports for typical Loopex usage.
///
/// ```rust
/// use loopex::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use loopex_core::{Direction, ExtruderId, RandomSource, TickId};

    // Errors
    pub use loopex_core::{ConfigurationError, ExtruderError, LoadingSaturationError};

    // Lattice
    pub use loopex_lattice::Occupancy;

    // Extrusion
    pub use loopex_extrusion::{
        BlockerModel, Extruder, Leg, LegFlag, LoadingConfig, LoadingPolicy, StepEvents,
    };

    // Engine
    pub use loopex_engine::{
        ConfigError, Simulation, SimulationConfig, StepError, StepMetrics, StepResult,
        Trajectory,
    };
}
