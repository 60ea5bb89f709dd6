//! Travel direction of an extruder leg.

use std::fmt;

/// Direction a leg walks along the lattice.
///
/// An extruder always has one leg of each direction: the left-mover
/// (offset −1) and the right-mover (offset +1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards index 0.
    Left,
    /// Towards the last lattice index.
    Right,
}

impl Direction {
    /// Both directions, left first.
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Signed step offset: −1 for `Left`, +1 for `Right`.
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Dense slot for per-direction tables: 0 for `Left`, 1 for `Right`.
    pub fn slot(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.offset())
    }
}
