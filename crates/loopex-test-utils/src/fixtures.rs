//! Reusable lattice and extruder fixtures.

use std::sync::Arc;

use loopex_core::{Direction, ExtruderId};
use loopex_extrusion::{BlockerModel, Extruder};
use loopex_lattice::Occupancy;

/// An empty lattice of `len` sites.
pub fn lattice(len: usize) -> Occupancy {
    Occupancy::new(len).expect("fixture lattice length must be >= 2")
}

/// A lattice of `len` sites with `occupied` pre-marked (foreign legs).
pub fn lattice_with(len: usize, occupied: &[usize]) -> Occupancy {
    let mut occ = lattice(len);
    for &site in occupied {
        occ.mark(site);
    }
    occ
}

/// An extruder with legs on `(a, b)`, no blockers and a lifetime long
/// enough that scripted tests never see it unload by accident.
pub fn free_extruder(id: u32, a: usize, b: usize, occupancy: &mut Occupancy) -> Extruder {
    Extruder::builder(ExtruderId(id))
        .legs(a, b)
        .lifetime(1e12)
        .stalled_lifetime(1e12)
        .build(occupancy)
        .expect("fixture extruder must build")
}

/// A blocker model that captures legs walking in `direction` at `site`
/// with probability `capture` and releases them with `release`.
pub fn blocked_at(
    direction: Direction,
    site: usize,
    capture: f64,
    release: f64,
) -> Arc<BlockerModel> {
    Arc::new(
        BlockerModel::builder()
            .capture(direction, site, capture)
            .release(direction, site, release)
            .build()
            .expect("fixture probabilities must be in [0, 1]"),
    )
}
