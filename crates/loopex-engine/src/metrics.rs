//! Per-tick counters for the simulation driver.
//!
//! [`StepMetrics`] sums the [`StepEvents`] of every extruder stepped in a
//! tick, plus the wall-clock time the tick took.

use loopex_extrusion::{Extruder, LegFlag, StepEvents};

/// Event counts and timing collected during a single tick.
///
/// `stalled_legs` and `captured_legs` are snapshots taken after the last
/// extruder has moved; the other counters are sums over the tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Extruders that unloaded and rebound.
    pub unloads: u32,
    /// Legs newly captured by a blocker.
    pub captures: u32,
    /// Captured legs released.
    pub releases: u32,
    /// Legs that advanced one site.
    pub moves: u32,
    /// Legs that tried to move and stalled.
    pub stalls: u32,
    /// Legs flagged stalled at the end of the tick.
    pub stalled_legs: u32,
    /// Legs held by a blocker at the end of the tick.
    pub captured_legs: u32,
}

impl StepMetrics {
    /// Fold one extruder's step outcome into the running counts.
    pub fn record(&mut self, events: StepEvents) {
        self.unloads += u32::from(events.unloaded);
        self.captures += u32::from(events.captures);
        self.releases += u32::from(events.releases);
        self.moves += u32::from(events.moves);
        self.stalls += u32::from(events.stalls);
    }

    /// Count the stalled and captured legs of a population.
    pub fn snapshot_flags<'a>(&mut self, extruders: impl IntoIterator<Item = &'a Extruder>) {
        self.stalled_legs = 0;
        self.captured_legs = 0;
        for leg in extruders.into_iter().flat_map(Extruder::legs) {
            self.stalled_legs += u32::from(leg.flag(LegFlag::Stalled));
            self.captured_legs += u32::from(leg.flag(LegFlag::Captured));
        }
    }

    /// Add another tick's counters into this one, as a run total.
    ///
    /// Event counts and time are summed; the leg snapshots take the later
    /// tick's values.
    pub fn accumulate(&mut self, later: &StepMetrics) {
        self.total_us += later.total_us;
        self.unloads += later.unloads;
        self.captures += later.captures;
        self.releases += later.releases;
        self.moves += later.moves;
        self.stalls += later.stalls;
        self.stalled_legs = later.stalled_legs;
        self.captured_legs = later.captured_legs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.unloads, 0);
        assert_eq!(m.moves, 0);
        assert_eq!(m.stalled_legs, 0);
    }

    #[test]
    fn record_sums_events() {
        let mut m = StepMetrics::default();
        m.record(StepEvents {
            unloaded: true,
            captures: 1,
            releases: 0,
            moves: 1,
            stalls: 1,
        });
        m.record(StepEvents {
            moves: 2,
            ..Default::default()
        });
        assert_eq!(m.unloads, 1);
        assert_eq!(m.captures, 1);
        assert_eq!(m.moves, 3);
        assert_eq!(m.stalls, 1);
    }

    #[test]
    fn accumulate_keeps_latest_snapshot() {
        let mut total = StepMetrics {
            total_us: 5,
            moves: 4,
            stalled_legs: 2,
            ..Default::default()
        };
        total.accumulate(&StepMetrics {
            total_us: 7,
            moves: 1,
            stalled_legs: 0,
            captured_legs: 1,
            ..Default::default()
        });
        assert_eq!(total.total_us, 12);
        assert_eq!(total.moves, 5);
        assert_eq!(total.stalled_legs, 0);
        assert_eq!(total.captured_legs, 1);
    }
}
