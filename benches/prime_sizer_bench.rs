//! PrimeSizer benchmark.
//!
//! Measures table lookups inside the seed range against computing a prime
//! from scratch for the same request.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primeset::sizing::{PrimeSizer, compute_next_prime};
use std::hint::black_box;

const REQUESTS: [usize; 4] = [10, 1_000, 100_000, 5_000_000];

fn benchmark_next_capacity(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prime_sizer_next_capacity");

    for requested in REQUESTS {
        group.bench_with_input(
            BenchmarkId::new("table", requested),
            &requested,
            |bencher, &requested| {
                bencher.iter(|| black_box(PrimeSizer::next_capacity(black_box(requested))));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("computed", requested),
            &requested,
            |bencher, &requested| {
                bencher.iter(|| black_box(compute_next_prime(black_box(requested))));
            },
        );
    }

    group.finish();
}

fn benchmark_cached_extension(criterion: &mut Criterion) {
    // Populate the extension once; later lookups hit the cache.
    let requested = 20_000_000;
    let _ = PrimeSizer::next_capacity(requested);

    criterion.bench_function("prime_sizer_cached_extension", |bencher| {
        bencher.iter(|| black_box(PrimeSizer::next_capacity(black_box(requested))));
    });
}

criterion_group!(benches, benchmark_next_capacity, benchmark_cached_extension);

criterion_main!(benches);
