//! Insert and search benchmarks for the ordered index.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use recordindex::OrderedIndex;

const INSERT_COUNT: i64 = 10_000;

/// Deterministic scatter of 0..n (multiplier is coprime with n).
fn scattered_keys(n: i64) -> Vec<i64> {
    (0..n).map(|i| (i * 7_919) % n).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/insert");
    group.throughput(Throughput::Elements(INSERT_COUNT as u64));
    let keys = scattered_keys(INSERT_COUNT);

    for t in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::new("sequential", t), &t, |b, &t| {
            b.iter_batched(
                || OrderedIndex::new(t).unwrap(),
                |mut index| {
                    for k in 0..INSERT_COUNT {
                        index.insert(k, k);
                    }
                    black_box(index.height());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("scattered", t), &t, |b, &t| {
            b.iter_batched(
                || OrderedIndex::new(t).unwrap(),
                |mut index| {
                    for &k in &keys {
                        index.insert(k, k);
                    }
                    black_box(index.height());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("index/search");
    let keys = scattered_keys(INSERT_COUNT);

    for t in [2usize, 8, 32] {
        let mut index = OrderedIndex::new(t).unwrap();
        for &k in &keys {
            index.insert(k, k);
        }

        group.bench_with_input(BenchmarkId::new("hit", t), &index, |b, index| {
            let mut k = 0;
            b.iter(|| {
                k = (k + 1) % INSERT_COUNT;
                black_box(index.search(k).nodes_visited())
            });
        });

        group.bench_with_input(BenchmarkId::new("miss", t), &index, |b, index| {
            b.iter(|| black_box(index.search(-1).nodes_visited()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
