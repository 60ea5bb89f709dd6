//! Core types and traits for the Loopex loop-extrusion simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Loopex workspace:
//! identifiers, leg directions, error types, and the random-source seam
//! every stochastic operation draws from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod random;

pub use direction::Direction;
pub use error::{ConfigurationError, ExtruderError, LoadingSaturationError};
pub use id::{ExtruderId, TickId};
pub use random::RandomSource;
