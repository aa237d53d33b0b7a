#[macro_use]
extern crate criterion;

use bytebuild_builder::{Builder, Chunk};
use criterion::{BenchmarkId, Criterion};

fn build_by_append(count: u32) -> Builder {
    let mut b = Builder::empty();
    for i in 0..count {
        b = b.merge(Builder::singleton(Chunk::from([(i % 256) as u8])));
    }
    b
}

fn bench(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("append-to-end");
        let inputs = [10_000u32, 100_000, 1_000_000];
        for input in inputs.iter() {
            group.bench_with_input(BenchmarkId::new("chunks", input), input, |b, &size| {
                b.iter(|| build_by_append(size));
            });
        }
    }

    c.bench_function("realize 100k single-byte chunks", |b| {
        b.iter_batched(
            || build_by_append(100_000),
            |builder| builder.realize().unwrap(),
            criterion::BatchSize::SmallInput,
        );
    });

    c.bench_function("measure 100k single-byte chunks", |b| {
        let builder = build_by_append(100_000);
        b.iter(|| builder.total_len().unwrap());
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
