//! Population-wide occupancy audit.
//!
//! Rebuilds the leg → site map from a set of extruders and diffs it
//! against the occupancy markers. Drivers call it after a step when they
//! want to verify the sharing contract; tests call it after every step.

use crate::extruder::Extruder;
use loopex_core::ExtruderId;
use loopex_lattice::Occupancy;
use std::fmt;

/// First disagreement found between the legs and the occupancy markers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OccupancyMismatch {
    /// A leg sits outside the lattice.
    LegOutOfBounds {
        /// Owner of the leg.
        extruder: ExtruderId,
        /// The leg's position.
        site: usize,
    },
    /// Two legs sit on one site.
    SharedSite {
        /// The doubly-held site.
        site: usize,
        /// Extruder that claimed the site first.
        first: ExtruderId,
        /// Extruder that claimed it again.
        second: ExtruderId,
    },
    /// A leg's site is not marked occupied.
    UnmarkedLeg {
        /// Owner of the leg.
        extruder: ExtruderId,
        /// The unmarked site.
        site: usize,
    },
    /// A site is marked but no leg sits on it.
    OrphanMarker {
        /// The stray site.
        site: usize,
    },
}

impl fmt::Display for OccupancyMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LegOutOfBounds { extruder, site } => {
                write!(f, "extruder {extruder} has a leg outside the lattice at {site}")
            }
            Self::SharedSite {
                site,
                first,
                second,
            } => write!(f, "site {site} held by extruders {first} and {second}"),
            Self::UnmarkedLeg { extruder, site } => {
                write!(f, "extruder {extruder} has a leg on unmarked site {site}")
            }
            Self::OrphanMarker { site } => write!(f, "site {site} marked with no leg on it"),
        }
    }
}

impl std::error::Error for OccupancyMismatch {}

/// Verify that `occupancy` marks exactly the sites of `extruders`' legs,
/// each held by one leg.
pub fn check_population<'a>(
    occupancy: &Occupancy,
    extruders: impl IntoIterator<Item = &'a Extruder>,
) -> Result<(), OccupancyMismatch> {
    let mut owner: Vec<Option<ExtruderId>> = vec![None; occupancy.len()];

    for extruder in extruders {
        let id = extruder.id();
        for leg in extruder.legs() {
            let site = leg.position();
            let slot = owner
                .get_mut(site)
                .ok_or(OccupancyMismatch::LegOutOfBounds { extruder: id, site })?;
            if let Some(first) = *slot {
                return Err(OccupancyMismatch::SharedSite {
                    site,
                    first,
                    second: id,
                });
            }
            *slot = Some(id);
            if !occupancy.is_occupied(site) {
                return Err(OccupancyMismatch::UnmarkedLeg { extruder: id, site });
            }
        }
    }

    for (site, holder) in owner.iter().enumerate() {
        if holder.is_none() && occupancy.is_occupied(site) {
            return Err(OccupancyMismatch::OrphanMarker { site });
        }
    }
    Ok(())
}
