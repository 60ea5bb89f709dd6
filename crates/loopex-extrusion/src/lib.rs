//! Loop extrusion factor step rule.
//!
//! A loop extrusion factor (LEF) binds two adjacent lattice sites and walks
//! its two [`Leg`]s apart, one site per step, until it unloads, stalls
//! against another leg or a lattice end, or is held by a directional
//! blocker. This crate holds the per-extruder update; the driver that
//! sequences a whole population lives in `loopex-engine`.
//!
//! - [`leg`]: position, direction and per-step flags of one leg.
//! - [`blockers`]: capture/release probability tables.
//! - [`loading`]: uniform and targeted (re)loading.
//! - [`extruder`]: the four-phase step.
//! - [`audit`]: population-wide occupancy consistency check.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod audit;
pub mod blockers;
pub mod extruder;
pub mod leg;
pub mod loading;

pub use audit::{check_population, OccupancyMismatch};
pub use blockers::{BlockerModel, BlockerModelBuilder, BlockerTable};
pub use extruder::{
    Extruder, ExtruderBuilder, StepEvents, DEFAULT_LIFETIME, DEFAULT_MAX_RELOAD_ATTEMPTS,
    DEFAULT_STALLED_LIFETIME,
};
pub use leg::{Leg, LegFlag};
pub use loading::{LoadingConfig, LoadingPolicy, TargetedLoading};
