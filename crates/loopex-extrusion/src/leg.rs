//! One attachment point of an extruder.

use loopex_core::Direction;
use std::fmt;

/// The two per-step status flags a leg carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegFlag {
    /// Held in place by a blocker.
    Captured,
    /// Could not move last step (collision or lattice boundary).
    Stalled,
}

/// One endpoint of an extruder.
///
/// A leg sits on a single lattice site and walks in a fixed
/// [`Direction`]. Its flags are reset whenever the extruder reloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leg {
    pub(crate) position: usize,
    pub(crate) direction: Direction,
    pub(crate) captured: bool,
    pub(crate) stalled: bool,
}

impl Leg {
    /// A free, unstalled leg at `position`.
    pub fn new(position: usize, direction: Direction) -> Self {
        Self {
            position,
            direction,
            captured: false,
            stalled: false,
        }
    }

    /// Current lattice site.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Walking direction, fixed for the leg's lifetime.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a blocker currently holds this leg.
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Whether the leg failed to move on its last attempt.
    pub fn is_stalled(&self) -> bool {
        self.stalled
    }

    /// Read a flag by name.
    pub fn flag(&self, flag: LegFlag) -> bool {
        match flag {
            LegFlag::Captured => self.captured,
            LegFlag::Stalled => self.stalled,
        }
    }

    /// Set a flag by name.
    pub fn set_flag(&mut self, flag: LegFlag, value: bool) {
        match flag {
            LegFlag::Captured => self.captured = value,
            LegFlag::Stalled => self.stalled = value,
        }
    }

    /// Move to `position` and clear both flags.
    pub(crate) fn place(&mut self, position: usize) {
        self.position = position;
        self.captured = false;
        self.stalled = false;
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leg {} at {} (captured: {}, stalled: {})",
            self.direction, self.position, self.captured, self.stalled
        )
    }
}
