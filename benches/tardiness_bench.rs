//! Criterion benchmarks for the objective, the swap neighborhood and tabu
//! search.
//!
//! Instances are random but seeded, so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tardiness::neighborhood::neighbors;
use u_tardiness::problem::{ProblemInstance, Sequence};
use u_tardiness::tabu::{TabuConfig, TabuRunner};

// ===========================================================================
// Random instances
// ===========================================================================

fn random_instance(n: usize, seed: u64) -> ProblemInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let processing: Vec<u64> = (0..n).map(|_| rng.random_range(1..=20)).collect();
    let horizon: u64 = processing.iter().sum();
    let due: Vec<u64> = (0..n).map(|_| rng.random_range(0..=horizon / 2)).collect();
    let weights: Vec<u64> = (0..n).map(|_| rng.random_range(1..=5)).collect();
    ProblemInstance::new(processing, due, weights).expect("valid random instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[6, 20, 50] {
        let instance = random_instance(n, 42);
        let seq = Sequence::identity(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(instance, seq), |b, (i, s)| {
            b.iter(|| black_box(i.evaluate(black_box(s))))
        });
    }
    group.finish();
}

fn bench_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    for &n in &[6, 20, 50] {
        let seq = Sequence::identity(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &seq, |b, s| {
            b.iter(|| black_box(neighbors(black_box(s))))
        });
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for (n, iterations) in [(6usize, 10usize), (20, 50), (40, 50)] {
        let instance = random_instance(n, 7);
        let config = TabuConfig::default()
            .with_tabu_tenure(7)
            .with_max_iterations(iterations);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_i{}", n, iterations), n),
            &(instance, config),
            |b, (i, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(i), &Sequence::identity(n), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_neighbors, bench_tabu);
criterion_main!(benches);
