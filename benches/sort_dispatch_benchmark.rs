use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use hashgroup::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_dense_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dense Key Range (counting sort)");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 50_000;
    let hash: Vec<u64> = (0..count).map(|_| rng.random_range(0..1_000u64)).collect();

    group.bench_function("sort_hash (counting)", |b| {
        b.iter_batched(
            || (hash.clone(), (0..hash.len()).collect::<Vec<usize>>()),
            |(mut h, mut idx)| {
                sort_hash(black_box(&mut h), &mut idx, &SortConfig::default()).unwrap()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable (baseline)", |b| {
        b.iter_batched(
            || hash.clone(),
            |mut h| h.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_sparse_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("Sparse Key Range (radix sort)");
    group.sample_size(20);

    let mut rng = rand::rng();
    let count = 50_000;
    let hash: Vec<u64> = (0..count).map(|_| rng.random::<u64>()).collect();

    group.bench_function("sort_hash (serial radix)", |b| {
        b.iter_batched(
            || (hash.clone(), (0..hash.len()).collect::<Vec<usize>>()),
            |(mut h, mut idx)| {
                let config = SortConfig {
                    parallel_threshold: usize::MAX,
                    ..SortConfig::default()
                };
                sort_hash(black_box(&mut h), &mut idx, &config).unwrap()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("sort_hash (parallel radix)", |b| {
        b.iter_batched(
            || (hash.clone(), (0..hash.len()).collect::<Vec<usize>>()),
            |(mut h, mut idx)| {
                sort_hash(black_box(&mut h), &mut idx, &SortConfig::default()).unwrap()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("slice::sort_unstable (baseline)", |b| {
        b.iter_batched(
            || hash.clone(),
            |mut h| h.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("Range Reducer");
    group.sample_size(20);

    let mut rng = rand::rng();
    let v: Vec<f64> = (0..20_000).map(|_| rng.random::<f64>() * 1000.0).collect();

    group.bench_function("reduce (mean)", |b| {
        b.iter_batched(
            || v.clone(),
            |mut v| reduce(ReduceCode::Mean, black_box(&mut v), 0, v.len()),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("reduce (quantile 50)", |b| {
        b.iter_batched(
            || v.clone(),
            |mut v| reduce(ReduceCode::Quantile(50.0), black_box(&mut v), 0, v.len()),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_dense_range, bench_sparse_range, bench_reduce);
criterion_main!(benches);
