//! Lattice occupancy for Loopex simulations.
//!
//! The polymer is a one-dimensional lattice of sites. [`Occupancy`]
//! records which sites currently hold an extruder leg; it is owned by the
//! driver and lent to each extruder for the duration of its step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod occupancy;

pub use error::LatticeError;
pub use occupancy::Occupancy;
