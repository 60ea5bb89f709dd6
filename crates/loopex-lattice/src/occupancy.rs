//! Shared site-occupancy markers for a 1D lattice.

use crate::error::LatticeError;
use loopex_core::Direction;

/// Per-site occupancy markers for a one-dimensional lattice.
///
/// Each site holds `1` while an extruder leg sits on it and `0`
/// otherwise. Sites are indexed `0..len`. The lattice has absorbing ends:
/// stepping past either boundary yields no neighbour rather than
/// wrapping.
///
/// Every marked site belongs to exactly one leg across the whole
/// population. Extruders only mark sites their own legs move onto and
/// clear the sites their legs vacate.
///
/// # Examples
///
/// ```
/// use loopex_core::Direction;
/// use loopex_lattice::Occupancy;
///
/// let mut occ = Occupancy::new(5).unwrap();
/// occ.mark(3);
/// assert!(occ.is_occupied(3));
/// assert_eq!(occ.neighbour(4, Direction::Right), None);
/// assert_eq!(occ.neighbour(0, Direction::Left), None);
/// assert_eq!(occ.neighbour(2, Direction::Right), Some(3));
/// assert!(!occ.is_pair_free(2));
/// assert!(occ.is_pair_free(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    sites: Vec<u8>,
}

impl Occupancy {
    /// Create an empty lattice of `len` sites.
    ///
    /// Returns `Err(LatticeError::TooShort)` if `len < 2`: a reload
    /// needs at least one adjacent pair.
    pub fn new(len: usize) -> Result<Self, LatticeError> {
        if len < 2 {
            return Err(LatticeError::TooShort { len });
        }
        Ok(Self {
            sites: vec![0; len],
        })
    }

    /// Adopt an existing marker sequence.
    ///
    /// Every entry must be `0` or `1`.
    pub fn from_markers(sites: Vec<u8>) -> Result<Self, LatticeError> {
        if sites.len() < 2 {
            return Err(LatticeError::TooShort { len: sites.len() });
        }
        if let Some(site) = sites.iter().position(|&m| m > 1) {
            return Err(LatticeError::InvalidMarker {
                site,
                value: sites[site],
            });
        }
        Ok(Self { sites })
    }

    /// Number of sites.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Always returns `false`; construction rejects lattices under two sites.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The raw marker sequence, one `0`/`1` per site.
    pub fn markers(&self) -> &[u8] {
        &self.sites
    }

    /// Whether `site` currently holds a leg.
    ///
    /// # Panics
    ///
    /// Panics if `site >= len`.
    pub fn is_occupied(&self, site: usize) -> bool {
        self.sites[site] != 0
    }

    /// The site one step from `site` in `direction`, or `None` past
    /// either end of the lattice.
    pub fn neighbour(&self, site: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Left => site.checked_sub(1),
            Direction::Right => {
                let next = site + 1;
                (next < self.sites.len()).then_some(next)
            }
        }
    }

    /// Whether `site` and `site + 1` both exist and are both free.
    pub fn is_pair_free(&self, site: usize) -> bool {
        site + 1 < self.sites.len() && self.sites[site] == 0 && self.sites[site + 1] == 0
    }

    /// Mark `site` as occupied.
    ///
    /// Marking an already-occupied site means two legs share it, which
    /// breaks the population invariant; this is checked in debug builds.
    pub fn mark(&mut self, site: usize) {
        debug_assert_eq!(self.sites[site], 0, "site {site} marked twice");
        self.sites[site] = 1;
    }

    /// Mark `site` as free.
    pub fn clear(&mut self, site: usize) {
        self.sites[site] = 0;
    }

    /// Free every site.
    pub fn clear_all(&mut self) {
        self.sites.fill(0);
    }

    /// Number of occupied sites.
    pub fn occupied_count(&self) -> usize {
        self.sites.iter().filter(|&&m| m != 0).count()
    }

    /// Number of adjacent pairs `(p, p + 1)` with both sites free.
    pub fn free_pair_count(&self) -> usize {
        self.sites
            .windows(2)
            .filter(|w| w[0] == 0 && w[1] == 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_short_lattices() {
        assert_eq!(Occupancy::new(0), Err(LatticeError::TooShort { len: 0 }));
        assert_eq!(Occupancy::new(1), Err(LatticeError::TooShort { len: 1 }));
        assert!(Occupancy::new(2).is_ok());
    }

    #[test]
    fn from_markers_rejects_non_binary() {
        let err = Occupancy::from_markers(vec![0, 1, 2, 0]).unwrap_err();
        assert_eq!(err, LatticeError::InvalidMarker { site: 2, value: 2 });
    }

    #[test]
    fn from_markers_keeps_sequence() {
        let occ = Occupancy::from_markers(vec![1, 0, 0, 1]).unwrap();
        assert_eq!(occ.markers(), &[1, 0, 0, 1]);
        assert_eq!(occ.occupied_count(), 2);
        assert_eq!(occ.free_pair_count(), 1);
    }

    #[test]
    fn neighbour_absorbs_at_both_ends() {
        let occ = Occupancy::new(4).unwrap();
        assert_eq!(occ.neighbour(0, Direction::Left), None);
        assert_eq!(occ.neighbour(3, Direction::Right), None);
        assert_eq!(occ.neighbour(0, Direction::Right), Some(1));
        assert_eq!(occ.neighbour(3, Direction::Left), Some(2));
    }

    #[test]
    fn pair_free_checks_both_sites_and_bounds() {
        let mut occ = Occupancy::new(4).unwrap();
        assert!(occ.is_pair_free(2));
        assert!(!occ.is_pair_free(3));
        occ.mark(1);
        assert!(!occ.is_pair_free(0));
        assert!(!occ.is_pair_free(1));
        assert!(occ.is_pair_free(2));
    }

    #[test]
    fn mark_and_clear_round_trip() {
        let mut occ = Occupancy::new(3).unwrap();
        occ.mark(2);
        assert!(occ.is_occupied(2));
        occ.clear(2);
        assert!(!occ.is_occupied(2));
        occ.mark(0);
        occ.mark(1);
        occ.clear_all();
        assert_eq!(occ.occupied_count(), 0);
    }

    #[test]
    #[should_panic(expected = "marked twice")]
    #[cfg(debug_assertions)]
    fn double_mark_is_caught_in_debug() {
        let mut occ = Occupancy::new(3).unwrap();
        occ.mark(1);
        occ.mark(1);
    }

    proptest! {
        #[test]
        fn neighbour_is_adjacent_and_in_bounds(len in 2usize..200, site in 0usize..200) {
            let occ = Occupancy::new(len).unwrap();
            let site = site % len;
            for d in Direction::ALL {
                if let Some(n) = occ.neighbour(site, d) {
                    prop_assert!(n < len);
                    prop_assert_eq!(n as isize - site as isize, d.offset());
                } else {
                    prop_assert!(
                        (d == Direction::Left && site == 0)
                            || (d == Direction::Right && site == len - 1)
                    );
                }
            }
        }
    }
}
