use criterion::{
    BatchSize, BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main,
    measurement::Measurement,
};
use ct_ops::{compact, shuffle, sort};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1 << 8, 1 << 12, (1 << 12) + 1];

fn random_vec(rng: &mut ChaCha8Rng, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.next_u64()).collect()
}

fn bench_sort<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("sort", size), &size, |b, &size| {
            b.iter_batched(
                || random_vec(&mut rng, size),
                |mut v| {
                    sort(&mut v);
                    black_box(v)
                },
                BatchSize::LargeInput,
            )
        });
    }
}

fn bench_compact<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("compact", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let v = random_vec(&mut rng, size);
                    let keep: Vec<bool> = v.iter().map(|x| x & 1 == 1).collect();
                    (v, keep)
                },
                |(mut v, keep)| black_box(compact(&mut v, &keep)),
                BatchSize::LargeInput,
            )
        });
    }
}

fn bench_shuffle<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    let mut rng = ChaCha8Rng::from_seed([7u8; 32]);
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("shuffle", size), &size, |b, &size| {
            let mut v = random_vec(&mut rng, size);
            b.iter(|| {
                shuffle(&mut v, &mut rng);
                black_box(v[0])
            })
        });
    }
}

fn bench_oblivious(c: &mut Criterion) {
    let mut group = c.benchmark_group("oblivious");
    bench_sort(&mut group);
    bench_compact(&mut group);
    bench_shuffle(&mut group);
    group.finish();
}

criterion_group!(benches, bench_oblivious);

criterion_main!(benches);
