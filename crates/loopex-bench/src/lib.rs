//! Benchmark profiles for the Loopex loop-extrusion simulator.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 10K sites, 100 extruders, convergent blocker pairs
//! - [`crowded_profile`]: 1K sites at 40% leg density, reload-heavy
//! - [`targeted_profile`]: 10K sites, targeted loading at evenly spaced spots

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use loopex_core::{ConfigurationError, Direction};
use loopex_engine::SimulationConfig;
use loopex_extrusion::{BlockerModel, LoadingConfig};

/// Convergent blocker pairs every `spacing` sites: a right-capturing site
/// followed by a left-capturing one `spacing / 2` further on.
pub fn convergent_blockers(
    lattice_len: usize,
    spacing: usize,
    capture: f64,
) -> Result<BlockerModel, ConfigurationError> {
    let mut builder = BlockerModel::builder();
    for start in (spacing..lattice_len).step_by(spacing) {
        let end = start + spacing / 2;
        builder = builder
            .capture(Direction::Right, start, capture)
            .release(Direction::Right, start, 0.005);
        if end < lattice_len {
            builder = builder
                .capture(Direction::Left, end, capture)
                .release(Direction::Left, end, 0.005);
        }
    }
    builder.build()
}

/// Reference profile: 10 000 sites, 100 extruders, blockers every 500 sites.
pub fn reference_profile(seed: u64) -> SimulationConfig {
    let lattice_len = 10_000;
    SimulationConfig {
        lattice_len,
        extruders: 100,
        seed,
        lifetime: 200.0,
        stalled_lifetime: 20.0,
        blockers: convergent_blockers(lattice_len, 500, 0.9).unwrap(),
        ..Default::default()
    }
}

/// Crowded profile: 1 000 sites, 200 extruders (40% of sites are legs),
/// short lifetimes so most ticks include reloads.
pub fn crowded_profile(seed: u64) -> SimulationConfig {
    SimulationConfig {
        lattice_len: 1_000,
        extruders: 200,
        seed,
        lifetime: 20.0,
        stalled_lifetime: 2.0,
        ..Default::default()
    }
}

/// Targeted profile: 10 000 sites, 50 extruders loading at evenly spaced
/// spots with default weights.
pub fn targeted_profile(seed: u64) -> SimulationConfig {
    let extruders = 50;
    let spots = (0..extruders).map(|i| 100 + i * 195).collect();
    SimulationConfig {
        lattice_len: 10_000,
        extruders,
        seed,
        loading: LoadingConfig::targeted(spots, None),
        ..Default::default()
    }
}
