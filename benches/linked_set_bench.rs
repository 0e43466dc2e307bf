//! LinkedSet operation benchmarks.
//!
//! Measures the linear-scan cost profile of the chain: incremental
//! construction, membership probes at both ends of the chain, removal
//! churn, and snapshot materialization.
//!
//! Pre-generated Vec is reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gemset::LinkedSet;
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 1000, 10000];

/// Pre-generates distinct elements for each size to be reused in
/// benchmarks.
fn generate_elements(size: i32) -> Vec<i32> {
    (0..size).collect()
}

/// Returns the appropriate BatchSize based on input size.
fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_insert_distinct(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_set_insert_distinct");

    for size in SIZES {
        let base_vec = generate_elements(size);
        group.bench_with_input(
            BenchmarkId::new("insert_distinct", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        let mut set = LinkedSet::new();
                        for element in elements {
                            set.insert(black_box(element));
                        }
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_contains(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_set_contains");

    for size in SIZES {
        let set: LinkedSet<i32> = generate_elements(size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("head_hit", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box(&0))));
        });
        group.bench_with_input(BenchmarkId::new("tail_hit", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box(&(size - 1)))));
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.contains(black_box(&-1))));
        });
    }

    group.finish();
}

fn benchmark_remove_reinsert_churn(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_set_churn");

    for size in SIZES {
        let base_set: LinkedSet<i32> = generate_elements(size).into_iter().collect();
        group.bench_with_input(
            BenchmarkId::new("remove_reinsert_middle", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_set.clone(),
                    |mut set| {
                        let middle = size / 2;
                        set.remove(black_box(&middle));
                        set.insert(black_box(middle));
                        black_box(set)
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_to_vec(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("linked_set_to_vec");

    for size in SIZES {
        let set: LinkedSet<i32> = generate_elements(size).into_iter().collect();
        group.bench_with_input(BenchmarkId::new("to_vec", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.to_vec()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert_distinct,
    benchmark_contains,
    benchmark_remove_reinsert_churn,
    benchmark_to_vec
);
criterion_main!(benches);
