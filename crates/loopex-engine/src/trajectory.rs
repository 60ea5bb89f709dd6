//! Recorded leg positions over a run.
//!
//! A [`Trajectory`] is what a plotting collaborator consumes to draw a
//! kymograph: one [`Frame`] per tick, one `(leg_a, leg_b)` pair per
//! extruder.

use loopex_core::TickId;
use loopex_extrusion::Extruder;

/// Leg sites of every extruder after one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// The tick that produced this frame.
    pub tick: TickId,
    /// `(leg_a, leg_b)` of each extruder, by index.
    pub sites: Vec<(usize, usize)>,
}

/// Append-only sequence of frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trajectory {
    frames: Vec<Frame>,
}

impl Trajectory {
    /// An empty trajectory.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty trajectory with room for `ticks` frames.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            frames: Vec::with_capacity(ticks),
        }
    }

    /// Append the current sites of `extruders` as the frame for `tick`.
    pub fn record<'a>(&mut self, tick: TickId, extruders: impl IntoIterator<Item = &'a Extruder>) {
        self.frames.push(Frame {
            tick,
            sites: extruders.into_iter().map(Extruder::sites).collect(),
        });
    }

    /// All frames, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sites of extruder `index` across all frames. Frames that predate
    /// the extruder are skipped.
    pub fn track(&self, index: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.frames
            .iter()
            .filter_map(move |frame| frame.sites.get(index).copied())
    }

    /// Drop all frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
