//! Oblivious sorting.
//!
//! A bitonic sorting network generalized to arbitrary lengths: the first half
//! is sorted in the opposite direction to the second, and the merge step
//! compares each element of the leading power-of-two block with its partner in
//! the remainder before recursing into both parts. The sequence of
//! compare-exchange operations depends only on the slice length.
//!
//! With the `std` feature, [`sort_parallel`] runs the same network with the
//! two recursive halves of each sort and merge step on separate threads.

use crate::{CtCompare, CtSwap, mask};
use subtle::Choice;

#[cfg(feature = "std")]
use std::thread;

/// Sort `list` in ascending order with a data-oblivious sorting network.
///
/// Runs in `O(n log² n)` compare-exchange operations for any `n`. The sort is
/// not stable, which is invisible for plain integer keys.
pub fn sort<T: CtCompare + CtSwap>(list: &mut [T]) {
    bitonic_sort(list, Choice::from(1));
}

/// Sort `list` in descending order with a data-oblivious sorting network.
pub fn sort_descending<T: CtCompare + CtSwap>(list: &mut [T]) {
    bitonic_sort(list, Choice::from(0));
}

/// Sort `list` in ascending order on up to `threads` threads.
///
/// Performs exactly the compare-exchange operations of [`sort`], so the result
/// is identical. `threads <= 1` sorts on the calling thread.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn sort_parallel<T: CtCompare + CtSwap + Send>(list: &mut [T], threads: usize) {
    parallel_bitonic_sort(list, Choice::from(1), threads);
}

/// Sort `list` in descending order on up to `threads` threads.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn sort_descending_parallel<T: CtCompare + CtSwap + Send>(list: &mut [T], threads: usize) {
    parallel_bitonic_sort(list, Choice::from(0), threads);
}

fn bitonic_sort<T: CtCompare + CtSwap>(list: &mut [T], ascending: Choice) {
    if list.len() <= 1 {
        return;
    }

    let (lo, hi) = list.split_at_mut(list.len() / 2);
    bitonic_sort(lo, !ascending);
    bitonic_sort(hi, ascending);
    bitonic_merge(list, ascending);
}

fn bitonic_merge<T: CtCompare + CtSwap>(list: &mut [T], ascending: Choice) {
    let n = list.len();
    if n <= 1 {
        return;
    }

    let (lo, hi) = merge_pass(list, ascending);
    bitonic_merge(lo, ascending);
    bitonic_merge(hi, ascending);
}

/// Compare-exchange the leading power-of-two block of `list` against the
/// remainder, returning both parts for the next merge level.
fn merge_pass<T: CtCompare + CtSwap>(list: &mut [T], ascending: Choice) -> (&mut [T], &mut [T]) {
    let m = prev_power_of_two(list.len());
    let (lo, hi) = list.split_at_mut(m);
    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
        compare_exchange(a, b, ascending);
    }
    (lo, hi)
}

#[cfg(feature = "std")]
fn parallel_bitonic_sort<T: CtCompare + CtSwap + Send>(
    list: &mut [T],
    ascending: Choice,
    threads: usize,
) {
    if threads <= 1 {
        return bitonic_sort(list, ascending);
    }
    if list.len() <= 1 {
        return;
    }

    let (l_threads, r_threads) = split_threads(threads);
    let (lo, hi) = list.split_at_mut(list.len() / 2);
    thread::scope(|s| {
        s.spawn(move || parallel_bitonic_sort(lo, !ascending, l_threads));
        parallel_bitonic_sort(hi, ascending, r_threads);
    });
    parallel_bitonic_merge(list, ascending, threads);
}

#[cfg(feature = "std")]
fn parallel_bitonic_merge<T: CtCompare + CtSwap + Send>(
    list: &mut [T],
    ascending: Choice,
    threads: usize,
) {
    if threads <= 1 {
        return bitonic_merge(list, ascending);
    }
    if list.len() <= 1 {
        return;
    }

    let (l_threads, r_threads) = split_threads(threads);
    let (lo, hi) = merge_pass(list, ascending);
    thread::scope(|s| {
        s.spawn(move || parallel_bitonic_merge(lo, ascending, l_threads));
        parallel_bitonic_merge(hi, ascending, r_threads);
    });
}

/// Divide a thread budget between the two halves of a recursion step.
#[cfg(feature = "std")]
#[inline]
pub(crate) const fn split_threads(threads: usize) -> (usize, usize) {
    let l_threads = threads / 2;
    (l_threads, threads - l_threads)
}

/// Order `a` and `b` according to `ascending`.
#[inline]
fn compare_exchange<T: CtCompare + CtSwap>(a: &mut T, b: &mut T, ascending: Choice) {
    let greater = Choice::from(mask::gt_bit(T::ct_compare(*a, *b)));
    T::ct_swap(!(greater ^ ascending), a, b);
}

/// Largest power of two strictly less than `n`, for `n >= 2`.
#[inline]
const fn prev_power_of_two(n: usize) -> usize {
    debug_assert!(n >= 2);
    1 << (usize::BITS - 1 - (n - 1).leading_zeros())
}
