//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// The lattice has fewer than two sites, so no adjacent pair exists.
    TooShort {
        /// The requested length.
        len: usize,
    },
    /// A marker in a supplied occupancy sequence is neither 0 nor 1.
    InvalidMarker {
        /// Site index of the offending marker.
        site: usize,
        /// The offending value.
        value: u8,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "lattice must have at least 2 sites, got {len}")
            }
            Self::InvalidMarker { site, value } => {
                write!(f, "occupancy marker at site {site} must be 0 or 1, got {value}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
