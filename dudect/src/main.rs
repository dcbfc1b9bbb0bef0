//! Timing-leak tests for `ct-ops`.
//!
//! These use the `dudect_bencher` crate to check certain operations for
//! constant-time behavior. Each test feeds two classes of inputs which a
//! leaky implementation would treat differently (e.g. equal versus unequal
//! operands) and looks for a statistically significant timing difference.

use ct_ops::{compare_i64, equal_i64, select_i64, sort, swap_u64};
use dudect_bencher::{BenchRng, Class, CtRunner, ctbench_main};
use rand_core::RngCore;
use std::hint::black_box;

const ITERATIONS_OUTER: usize = 10_000;
const ITERATIONS_INNER: usize = 1_000;

/// Interleave `Left` and `Right` inputs produced by the given generators.
fn inputs<T>(
    rng: &mut BenchRng,
    mut left: impl FnMut(&mut BenchRng) -> T,
    mut right: impl FnMut(&mut BenchRng) -> T,
) -> Vec<(Class, T)> {
    let mut inputs = Vec::with_capacity(2 * ITERATIONS_OUTER);
    for _ in 0..ITERATIONS_OUTER {
        inputs.push((Class::Left, left(rng)));
        inputs.push((Class::Right, right(rng)));
    }
    inputs
}

/// Check `select_i64` with a false versus a true condition.
fn select(runner: &mut CtRunner, rng: &mut BenchRng) {
    let inputs = inputs(
        rng,
        |s| (false, s.next_u64() as i64, s.next_u64() as i64),
        |s| (true, s.next_u64() as i64, s.next_u64() as i64),
    );

    for (class, (cond, a, b)) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                black_box(select_i64(black_box(cond), a, b));
            }
        })
    }
}

/// Check `equal_i64` with equal versus unequal operands.
fn equal(runner: &mut CtRunner, rng: &mut BenchRng) {
    let inputs = inputs(
        rng,
        |s| {
            let x = s.next_u64() as i64;
            (x, x)
        },
        |s| (s.next_u64() as i64, s.next_u64() as i64),
    );

    for (class, (a, b)) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                black_box(equal_i64(black_box(a), b));
            }
        })
    }
}

/// Check `compare_i64` with the range extremes versus random operands.
fn compare(runner: &mut CtRunner, rng: &mut BenchRng) {
    let inputs = inputs(
        rng,
        |_| (i64::MIN, i64::MAX),
        |s| (s.next_u64() as i64, s.next_u64() as i64),
    );

    for (class, (a, b)) in inputs {
        runner.run_one(class, || {
            for _ in 0..ITERATIONS_INNER {
                black_box(compare_i64(black_box(a), b));
            }
        })
    }
}

/// Check `swap_u64` with a false versus a true condition.
fn swap(runner: &mut CtRunner, rng: &mut BenchRng) {
    let inputs = inputs(
        rng,
        |s| (false, s.next_u64(), s.next_u64()),
        |s| (true, s.next_u64(), s.next_u64()),
    );

    for (class, (cond, a, b)) in inputs {
        runner.run_one(class, || {
            let (mut x, mut y) = (a, b);
            for _ in 0..ITERATIONS_INNER {
                swap_u64(black_box(cond), &mut x, &mut y);
            }
            black_box((x, y));
        })
    }
}

/// Check `sort` on already-sorted versus random input.
fn sorting(runner: &mut CtRunner, rng: &mut BenchRng) {
    const LEN: usize = 64;

    let inputs = inputs(
        rng,
        |_| core::array::from_fn::<u64, LEN, _>(|i| i as u64),
        |s| core::array::from_fn::<u64, LEN, _>(|_| s.next_u64()),
    );

    for (class, list) in inputs {
        runner.run_one(class, || {
            let mut list = list;
            sort(&mut list);
            black_box(list);
        })
    }
}

ctbench_main!(select, equal, compare, swap, sorting);
