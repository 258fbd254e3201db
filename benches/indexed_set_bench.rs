//! IndexedSet benchmark.
//!
//! Compares bulk construction (`from_items`) against repeated `add`, and
//! measures the linear-scan lookups and front insertion/removal that shift
//! the whole live region.
//!
//! Sizes stay small: every uniqueness check is a scan, so incremental
//! construction is quadratic.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use primeset::collections::IndexedSet;
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

const SIZES: [u64; 3] = [100, 1000, 5000];

fn generate_values(size: u64) -> Vec<u64> {
    (0..size).collect()
}

fn benchmark_from_items(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_from_items");

    for size in SIZES {
        let base_vec = generate_values(size);
        group.bench_with_input(BenchmarkId::new("from_items", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |values| black_box(IndexedSet::from_items(black_box(values))),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_repeated_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_repeated_add");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let set = IndexedSet::new();
                for value in 0..size {
                    set.add(black_box(value)).unwrap();
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

fn benchmark_lookup(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_lookup");

    for size in SIZES {
        let set = IndexedSet::from_items(generate_values(size));
        let last = size - 1;

        group.bench_with_input(BenchmarkId::new("contains_last", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.contains(black_box(&last))));
        });
        group.bench_with_input(BenchmarkId::new("index_of_missing", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.index_of(black_box(&size))));
        });
        group.bench_with_input(BenchmarkId::new("get_middle", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.get(black_box(usize::try_from(size / 2).unwrap_or(0)))));
        });
    }

    group.finish();
}

fn benchmark_front_shift(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_front_shift");

    for size in SIZES {
        let base_vec = generate_values(size);
        group.bench_with_input(BenchmarkId::new("insert_remove_front", size), &size, |bencher, _| {
            bencher.iter_batched(
                || IndexedSet::from_items(base_vec.clone()),
                |set| {
                    set.insert(0, u64::MAX).unwrap();
                    black_box(set.remove_at(0))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_concurrent_readers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("indexed_set_concurrent_readers");
    let set = Arc::new(IndexedSet::from_items(generate_values(1000)));

    for readers in [1_usize, 4] {
        group.bench_with_input(BenchmarkId::new("contains", readers), &readers, |bencher, &readers| {
            bencher.iter(|| {
                let handles: Vec<_> = (0..readers)
                    .map(|_| {
                        let set = Arc::clone(&set);
                        thread::spawn(move || (0..100).filter(|value| set.contains(value)).count())
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| handle.join().unwrap_or(0))
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_items,
    benchmark_repeated_add,
    benchmark_lookup,
    benchmark_front_shift,
    benchmark_concurrent_readers,
);

criterion_main!(benches);
