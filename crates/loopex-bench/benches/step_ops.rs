//! Criterion micro-benchmarks for the per-tick step.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use loopex_bench::{crowded_profile, reference_profile, targeted_profile};
use loopex_core::ExtruderId;
use loopex_engine::Simulation;
use loopex_extrusion::Extruder;
use loopex_lattice::Occupancy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: one translocate call of a lone extruder on a long lattice.
fn bench_translocate_single(c: &mut Criterion) {
    let mut occ = Occupancy::new(1_000_000).unwrap();
    let mut ex = Extruder::builder(ExtruderId(0))
        .legs(500_000, 500_001)
        .build(&mut occ)
        .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("translocate_single", |b| {
        b.iter(|| {
            ex.translocate(&mut occ, &mut rng).unwrap();
            black_box(ex.sites());
        });
    });
}

/// Benchmark: 100 ticks of the reference profile (10K sites, 100 extruders).
fn bench_reference_100_ticks(c: &mut Criterion) {
    c.bench_function("reference_100_ticks", |b| {
        b.iter_batched(
            || Simulation::new(reference_profile(42)).unwrap(),
            |mut sim| {
                sim.run(100, None).unwrap();
                black_box(sim.current_tick());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 100 ticks at 40% leg density, where reloads dominate.
fn bench_crowded_100_ticks(c: &mut Criterion) {
    c.bench_function("crowded_100_ticks", |b| {
        b.iter_batched(
            || Simulation::new(crowded_profile(42)).unwrap(),
            |mut sim| {
                sim.run(100, None).unwrap();
                black_box(sim.current_tick());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 100 ticks with targeted loading.
fn bench_targeted_100_ticks(c: &mut Criterion) {
    c.bench_function("targeted_100_ticks", |b| {
        b.iter_batched(
            || Simulation::new(targeted_profile(42)).unwrap(),
            |mut sim| {
                sim.run(100, None).unwrap();
                black_box(sim.current_tick());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_translocate_single,
    bench_reference_100_ticks,
    bench_crowded_100_ticks,
    bench_targeted_100_ticks
);
criterion_main!(benches);
