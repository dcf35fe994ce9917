//! Benchmarks for composed vectors
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use statevec_core::prelude::*;

fn benchmark_fixed_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");

    type Util = CombinedVectorUtil<Fixed<6>, Fixed<3>>;
    type State = Combined<Fixed<6>, Fixed<3>, f64>;

    let position = SVector::<f64, 6>::from_fn(|i, _| i as f64);
    let input = SVector::<f64, 3>::new(1.0, 2.0, 3.0);
    let state = Util::combine(position, input);
    let dense = state.to_dense();

    group.bench_function("combine", |b| {
        b.iter(|| Util::combine(black_box(position), black_box(input)))
    });

    group.bench_function("to_dense", |b| b.iter(|| black_box(&state).to_dense()));

    group.bench_function("from_dense", |b| {
        b.iter(|| <State as VectorLike>::from_dense(black_box(&dense)))
    });

    group.bench_function("collapsed_combine", |b| {
        b.iter(|| CombinedVectorUtil::<Fixed<6>, Null>::combine(black_box(position), null_vector()))
    });

    group.finish();
}

fn benchmark_dynamic_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");

    type State = Combined<Dynamic, Fixed<3>, f64>;

    for &n in &[10, 100, 1000] {
        let dense = DVector::<f64>::from_fn(n + 3, |i, _| i as f64);
        let state = <State as VectorLike>::from_dense(&dense);

        group.bench_with_input(BenchmarkId::new("from_dense", n), &n, |b, _| {
            b.iter(|| <State as VectorLike>::from_dense(black_box(&dense)))
        });

        group.bench_with_input(BenchmarkId::new("to_dense", n), &n, |b, _| {
            b.iter(|| black_box(&state).to_dense())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fixed_composition,
    benchmark_dynamic_composition
);
criterion_main!(benches);
