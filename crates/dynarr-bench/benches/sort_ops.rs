//! Criterion benchmarks for the in-place quicksort.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use dynarr_test_utils::fixtures::{descending_array, scrambled_array};

/// Benchmark: sort 10K pseudo-random values.
fn bench_sort_scrambled_10k(c: &mut Criterion) {
    c.bench_function("sort_scrambled_10k", |b| {
        b.iter_batched(
            || scrambled_array(10_000, 42, 1_000_000),
            |mut arr| {
                arr.sort();
                black_box(arr.first().copied());
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: sort 10K values drawn from only 8 distinct keys.
fn bench_sort_few_unique_10k(c: &mut Criterion) {
    c.bench_function("sort_few_unique_10k", |b| {
        b.iter_batched(
            || scrambled_array(10_000, 7, 8),
            |mut arr| {
                arr.sort();
                black_box(arr.first().copied());
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: sort 1K descending values, the last-element pivot worst case.
fn bench_sort_descending_1k(c: &mut Criterion) {
    c.bench_function("sort_descending_1k", |b| {
        b.iter_batched(
            || descending_array(1_000),
            |mut arr| {
                arr.sort();
                black_box(arr.first().copied());
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_sort_scrambled_10k,
    bench_sort_few_unique_10k,
    bench_sort_descending_1k
);
criterion_main!(benches);
