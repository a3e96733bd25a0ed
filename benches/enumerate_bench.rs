//! Criterion benchmarks for path enumeration.
//!
//! Random integer costs with a fixed seed; the budget scales with the
//! item count so the result size grows with `n`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_subsets::enumerate::{EnumerationConfig, PathEnumerator};
use u_subsets::output;
use u_subsets::registry::ItemRegistry;

fn random_costs(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| f64::from(rng.random_range(0u8..10))).collect()
}

fn bench_enumerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate");
    for &n in &[8usize, 12, 16] {
        let registry = ItemRegistry::build(&random_costs(n, 42)).unwrap();
        let config = EnumerationConfig::default().with_budget(n as f64 * 2.0);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| PathEnumerator::run(black_box(&registry), black_box(&config)).unwrap())
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let registry = ItemRegistry::build(&random_costs(14, 7)).unwrap();
    let config = EnumerationConfig::default().with_budget(28.0);
    let result = PathEnumerator::run(&registry, &config).unwrap();
    c.bench_function("render_14", |b| b.iter(|| output::render(black_box(&result))));
}

criterion_group!(benches, bench_enumerate, bench_render);
criterion_main!(benches);
