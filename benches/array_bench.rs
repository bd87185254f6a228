//! Benchmark for the `array` module.
//!
//! Compares the library's sequence operations against hand-written standard
//! library equivalents to measure abstraction overhead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fpstd::data::array;
use fpstd::typeclass::{DynOrder, FromEq, FromOrd, OrderOn, SetoidOn};
use std::hint::black_box;

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn input(size: usize) -> Vec<i64> {
    (0..size as i64).map(|n| (n * 7919) % 1_009).collect()
}

// =============================================================================
// 1. chain vs flat_map
// =============================================================================

fn benchmark_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain_vs_flat_map");

    for size in SIZES {
        let values = input(size);

        group.bench_with_input(BenchmarkId::new("chain", size), &values, |bencher, values| {
            bencher.iter(|| black_box(array::chain(values, |n| vec![*n, n + 1])));
        });

        group.bench_with_input(BenchmarkId::new("flat_map", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.iter().flat_map(|n| vec![*n, n + 1]).collect::<Vec<_>>())
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. sort_by with combined orders vs sort_by_key
// =============================================================================

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by_vs_sort_by_key");

    for size in SIZES {
        let values: Vec<(i64, i64)> = input(size).into_iter().map(|n| (n % 10, n)).collect();

        group.bench_with_input(BenchmarkId::new("sort_by", size), &values, |bencher, values| {
            let first: DynOrder<'_, (i64, i64)> =
                Box::new(OrderOn::new(FromOrd, |pair: &(i64, i64)| pair.0));
            let second: DynOrder<'_, (i64, i64)> =
                Box::new(OrderOn::new(FromOrd, |pair: &(i64, i64)| pair.1));
            let sort = array::sort_by1(first, vec![second]);
            bencher.iter(|| black_box(sort(values)));
        });

        group.bench_with_input(BenchmarkId::new("sort_by_key", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut sorted = values.clone();
                sorted.sort_by_key(|pair| (pair.0, pair.1));
                black_box(sorted)
            });
        });
    }

    group.finish();
}

// =============================================================================
// 3. uniq
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100, 1_000] {
        let values = input(size);

        group.bench_with_input(BenchmarkId::new("from_eq", size), &values, |bencher, values| {
            bencher.iter(|| black_box(array::uniq(&FromEq, values).len()));
        });

        group.bench_with_input(BenchmarkId::new("projected", size), &values, |bencher, values| {
            let modulo = SetoidOn::new(FromEq, |n: &i64| n % 97);
            bencher.iter(|| black_box(array::uniq(&modulo, values).len()));
        });
    }

    group.finish();
}

// =============================================================================
// 4. traverse vs collect
// =============================================================================

fn benchmark_traverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_vs_collect");

    for size in SIZES {
        let values = input(size);

        group.bench_with_input(BenchmarkId::new("traverse", size), &values, |bencher, values| {
            bencher.iter(|| {
                let traversed: Option<Vec<i64>> = array::traverse(values, |n| n.checked_mul(2));
                black_box(traversed)
            });
        });

        group.bench_with_input(BenchmarkId::new("collect", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(values.iter().map(|n| n.checked_mul(2)).collect::<Option<Vec<_>>>())
            });
        });
    }

    group.finish();
}

// =============================================================================
// 5. rotate
// =============================================================================

fn benchmark_rotate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("rotate");
    let values = input(10_000);

    for steps in [0_isize, 1, -3_333, 10_000] {
        group.bench_with_input(BenchmarkId::new("rotate", steps), &steps, |bencher, &steps| {
            bencher.iter(|| black_box(array::rotate(steps, &values).len()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_chain,
    benchmark_sort_by,
    benchmark_uniq,
    benchmark_traverse,
    benchmark_rotate
);

criterion_main!(benches);
