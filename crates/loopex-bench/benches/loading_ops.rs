//! Criterion micro-benchmarks for (re)loading.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use loopex_extrusion::{LoadingConfig, LoadingPolicy, DEFAULT_MAX_RELOAD_ATTEMPTS};
use loopex_test_utils::lattice_with;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark: uniform free-pair search on an empty 10K lattice.
fn bench_uniform_empty(c: &mut Criterion) {
    let occ = lattice_with(10_000, &[]);
    let policy = LoadingPolicy::Uniform;
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    c.bench_function("uniform_pair_empty_10k", |b| {
        b.iter(|| {
            let site = policy
                .find_free_pair(&occ, &mut rng, DEFAULT_MAX_RELOAD_ATTEMPTS)
                .unwrap();
            black_box(site);
        });
    });
}

/// Benchmark: uniform free-pair search when every third site is taken.
fn bench_uniform_dense(c: &mut Criterion) {
    let taken: Vec<usize> = (0..10_000).step_by(3).collect();
    let occ = lattice_with(10_000, &taken);
    let policy = LoadingPolicy::Uniform;
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    c.bench_function("uniform_pair_dense_10k", |b| {
        b.iter(|| {
            let site = policy
                .find_free_pair(&occ, &mut rng, DEFAULT_MAX_RELOAD_ATTEMPTS)
                .unwrap();
            black_box(site);
        });
    });
}

/// Benchmark: weighted spot draw over 1 000 targeted spots.
fn bench_targeted_1k_spots(c: &mut Criterion) {
    let spots: Vec<usize> = (0..1_000).map(|i| i * 10).collect();
    let policy = LoadingPolicy::resolve(&LoadingConfig::targeted(spots, None), 10_001).unwrap();
    let occ = lattice_with(10_001, &[]);
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    c.bench_function("targeted_pair_1k_spots", |b| {
        b.iter(|| {
            let site = policy
                .find_free_pair(&occ, &mut rng, DEFAULT_MAX_RELOAD_ATTEMPTS)
                .unwrap();
            black_box(site);
        });
    });
}

criterion_group!(
    benches,
    bench_uniform_empty,
    bench_uniform_dense,
    bench_targeted_1k_spots
);
criterion_main!(benches);
