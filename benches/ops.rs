use criterion::{
    BatchSize, BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use ct_ops::{compare, equal, select, swap};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::hint::black_box;

fn bench_select<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("select, i64", |b| {
        b.iter_batched(
            || {
                let cond = rng.next_u32() & 1 == 1;
                (cond, rng.next_u64() as i64, rng.next_u64() as i64)
            },
            |(cond, x, y)| black_box(select(cond, x, y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("select, i8", |b| {
        b.iter_batched(
            || {
                let cond = rng.next_u32() & 1 == 1;
                (cond, rng.next_u32() as i8, rng.next_u32() as i8)
            },
            |(cond, x, y)| black_box(select(cond, x, y)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_cmp<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("equal, i64", |b| {
        b.iter_batched(
            || (rng.next_u64() as i64, rng.next_u64() as i64),
            |(x, y)| black_box(equal(x, y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("compare, i32", |b| {
        b.iter_batched(
            || (rng.next_u32() as i32, rng.next_u32() as i32),
            |(x, y)| black_box(compare(x, y)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("compare, i64", |b| {
        b.iter_batched(
            || (rng.next_u64() as i64, rng.next_u64() as i64),
            |(x, y)| black_box(compare(x, y)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_swap<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    group.bench_function("swap, u64", |b| {
        b.iter_batched(
            || {
                let cond = rng.next_u32() & 1 == 1;
                (cond, rng.next_u64(), rng.next_u64())
            },
            |(cond, mut x, mut y)| {
                swap(cond, &mut x, &mut y);
                black_box((x, y))
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("swap, [u64; 128]", |b| {
        b.iter_batched(
            || {
                let x: [u64; 128] = core::array::from_fn(|_| rng.next_u64());
                let y: [u64; 128] = core::array::from_fn(|_| rng.next_u64());
                (rng.next_u32() & 1 == 1, x, y)
            },
            |(cond, mut x, mut y)| {
                swap(cond, &mut x, &mut y);
                black_box((x, y))
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops");
    bench_select(&mut group);
    bench_cmp(&mut group);
    bench_swap(&mut group);
    group.finish();
}

criterion_group!(benches, bench_ops);

criterion_main!(benches);
