//! Error types for the Loopex simulator.
//!
//! Two recoverable error classes exist: configuration problems detected
//! while an extruder is being set up, and reload saturation when the
//! lattice is too crowded to rebind. Probability draws, stalls and
//! collisions are ordinary control flow and never surface here.

use std::error::Error;
use std::fmt;

/// An extruder (or its loading policy) was configured inconsistently.
///
/// Raised at construction and fatal to that extruder's setup. Never
/// silently corrected.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigurationError {
    /// Targeted loading was enabled but no loading-spot list was given.
    TargetedLoadingWithoutSpots,
    /// A loading-spot list was given but targeted loading is disabled.
    SpotsWithoutTargetedLoading,
    /// Loading weights were given but targeted loading is disabled.
    WeightsWithoutTargetedLoading,
    /// The loading-spot list is empty.
    EmptyLoadingSpots,
    /// The extruder's index has no entry in the loading-spot list.
    MissingLoadingSpot {
        /// Index of the extruder being constructed.
        index: usize,
        /// Number of spots supplied.
        spots: usize,
    },
    /// A loading spot leaves no room for the adjacent right leg.
    LoadingSpotOutOfRange {
        /// The offending spot.
        spot: usize,
        /// Number of lattice sites.
        lattice_len: usize,
    },
    /// Loading weights and loading spots differ in length.
    WeightsLengthMismatch {
        /// Number of spots.
        spots: usize,
        /// Number of weights.
        weights: usize,
    },
    /// A cumulative loading weight is NaN or outside `[0, 1]`.
    InvalidWeight {
        /// Position in the weight sequence.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The cumulative loading weights decrease at `index`.
    WeightsNotMonotonic {
        /// First position whose weight is below its predecessor.
        index: usize,
    },
    /// The final cumulative weight is zero, so no spot can ever be drawn.
    ZeroTotalWeight,
    /// A lifetime is not a finite positive number.
    InvalidLifetime {
        /// Which lifetime (`"lifetime"` or `"stalled_lifetime"`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// A blocker probability is NaN or outside `[0, 1]`.
    InvalidProbability {
        /// Lattice position of the blocker.
        position: usize,
        /// The offending value.
        value: f64,
    },
    /// A leg position lies outside the lattice.
    LegOutOfBounds {
        /// The offending position.
        position: usize,
        /// Number of lattice sites.
        lattice_len: usize,
    },
    /// Uniform loading was requested without initial leg positions.
    MissingLegPositions,
    /// Both legs were given the same position.
    LegsCoincide {
        /// The shared position.
        position: usize,
    },
    /// The left-moving leg was placed to the right of the right-moving one.
    LegsInverted {
        /// Requested site of the left-moving leg.
        leg_a: usize,
        /// Requested site of the right-moving leg.
        leg_b: usize,
    },
    /// A leg would be placed on a site another leg already occupies.
    SiteOccupied {
        /// The occupied site.
        position: usize,
    },
    /// The reload retry cap is zero.
    ZeroReloadAttempts,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TargetedLoadingWithoutSpots => write!(
                f,
                "targeted loading requires a list of loading spots for every extruder"
            ),
            Self::SpotsWithoutTargetedLoading => {
                write!(f, "loading spots given but targeted loading is disabled")
            }
            Self::WeightsWithoutTargetedLoading => {
                write!(f, "loading weights given but targeted loading is disabled")
            }
            Self::EmptyLoadingSpots => write!(f, "loading-spot list is empty"),
            Self::MissingLoadingSpot { index, spots } => write!(
                f,
                "extruder {index} has no loading spot (only {spots} spots given)"
            ),
            Self::LoadingSpotOutOfRange { spot, lattice_len } => write!(
                f,
                "loading spot {spot} leaves no adjacent site on a lattice of {lattice_len}"
            ),
            Self::WeightsLengthMismatch { spots, weights } => write!(
                f,
                "{weights} loading weights given for {spots} loading spots"
            ),
            Self::InvalidWeight { index, value } => {
                write!(f, "loading weight {index} must be in [0, 1], got {value}")
            }
            Self::WeightsNotMonotonic { index } => {
                write!(f, "cumulative loading weights decrease at index {index}")
            }
            Self::ZeroTotalWeight => write!(f, "cumulative loading weights never exceed zero"),
            Self::InvalidLifetime { name, value } => {
                write!(f, "{name} must be finite and positive, got {value}")
            }
            Self::InvalidProbability { position, value } => write!(
                f,
                "blocker probability at site {position} must be in [0, 1], got {value}"
            ),
            Self::LegOutOfBounds {
                position,
                lattice_len,
            } => write!(
                f,
                "leg position {position} out of bounds: [0, {lattice_len})"
            ),
            Self::MissingLegPositions => {
                write!(f, "initial leg positions are required without targeted loading")
            }
            Self::LegsCoincide { position } => {
                write!(f, "both legs placed on site {position}")
            }
            Self::LegsInverted { leg_a, leg_b } => write!(
                f,
                "left-moving leg at {leg_a} lies right of right-moving leg at {leg_b}"
            ),
            Self::SiteOccupied { position } => write!(f, "site {position} is already occupied"),
            Self::ZeroReloadAttempts => write!(f, "max_reload_attempts must be at least 1"),
        }
    }
}

impl Error for ConfigurationError {}

/// The reload procedure could not find a free adjacent site pair.
///
/// Indicates a lattice that is too small or too crowded for the
/// population rather than a transient condition, so the core surfaces
/// it instead of retrying forever.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingSaturationError {
    /// Number of placement attempts made.
    pub attempts: u32,
    /// Number of lattice sites.
    pub lattice_len: usize,
}

impl fmt::Display for LoadingSaturationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no free adjacent site pair found after {} attempts on a lattice of {}",
            self.attempts, self.lattice_len
        )
    }
}

impl Error for LoadingSaturationError {}

/// Errors from extruder construction and stepping.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtruderError {
    /// Construction was rejected.
    Configuration(ConfigurationError),
    /// A reload exhausted its attempt cap.
    LoadingSaturation(LoadingSaturationError),
}

impl fmt::Display for ExtruderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration: {e}"),
            Self::LoadingSaturation(e) => write!(f, "loading saturation: {e}"),
        }
    }
}

impl Error for ExtruderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::LoadingSaturation(e) => Some(e),
        }
    }
}

impl From<ConfigurationError> for ExtruderError {
    fn from(e: ConfigurationError) -> Self {
        Self::Configuration(e)
    }
}

impl From<LoadingSaturationError> for ExtruderError {
    fn from(e: LoadingSaturationError) -> Self {
        Self::LoadingSaturation(e)
    }
}
