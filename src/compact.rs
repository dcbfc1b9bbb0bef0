//! Oblivious order-preserving compaction.
//!
//! Implements ORCompact from Sasy, Johnson and Goldberg, "Fast Fully Oblivious
//! Compaction and Shuffling" (CCS 2022). A slice of length `n` is split into a
//! prefix of `n - 2^k` elements and a power-of-two suffix of `2^k` elements,
//! where `2^k` is the largest power of two not exceeding `n`. The prefix is
//! compacted recursively, the suffix is compacted to a cyclic offset chosen so
//! that a final pass of conditional swaps joins both halves in order.
//!
//! Which elements are swapped depends on the keep flags, but the positions
//! that are touched depend only on the slice length.
//!
//! With the `std` feature, [`compact_parallel`] and [`filter_parallel`] run the
//! two halves of each offset compaction on separate threads.

use crate::{CtSwap, mask};
use subtle::Choice;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use {crate::sort::split_threads, std::thread};

/// Move the elements of `data` whose flag in `keep` is `true` to the front of
/// the slice, preserving their relative order, and return how many there are.
///
/// The remaining elements end up after the kept ones in unspecified order.
///
/// # Panics
///
/// If `keep.len() != data.len()`.
pub fn compact<T: CtSwap>(data: &mut [T], keep: &[bool]) -> usize {
    assert_eq!(data.len(), keep.len(), "one keep flag is required per element");
    or_compact(data, keep);
    count(keep)
}

/// Compact `data` to the elements matching `predicate`, preserving their
/// relative order, and return how many there are.
///
/// The predicate is evaluated once per element. It is the caller's
/// responsibility to make it constant-time if the elements are secret.
#[cfg(feature = "alloc")]
pub fn filter<T, F>(data: &mut [T], predicate: F) -> usize
where
    T: CtSwap,
    F: Fn(&T) -> bool,
{
    let keep: Vec<bool> = data.iter().map(predicate).collect();
    compact(data, &keep)
}

/// [`compact`] on up to `threads` threads.
///
/// The result is identical to [`compact`]. `threads <= 1` compacts on the
/// calling thread.
///
/// # Panics
///
/// If `keep.len() != data.len()`.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn compact_parallel<T: CtSwap + Send>(data: &mut [T], keep: &[bool], threads: usize) -> usize {
    assert_eq!(data.len(), keep.len(), "one keep flag is required per element");
    parallel_or_compact(data, keep, threads);
    count(keep)
}

/// [`filter`] on up to `threads` threads.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn filter_parallel<T, F>(data: &mut [T], predicate: F, threads: usize) -> usize
where
    T: CtSwap + Send,
    F: Fn(&T) -> bool,
{
    let keep: Vec<bool> = data.iter().map(predicate).collect();
    compact_parallel(data, &keep, threads)
}

/// Number of set flags, computed without branching on them.
#[inline]
fn count(keep: &[bool]) -> usize {
    keep.iter().map(|&k| k as usize).sum()
}

fn or_compact<T: CtSwap>(data: &mut [T], keep: &[bool]) {
    let n = data.len();
    if n == 0 {
        return;
    }

    let (n1, n2) = split_sizes(n);
    let m = count(&keep[..n2]);

    let (l_data, r_data) = data.split_at_mut(n2);
    let (l_keep, r_keep) = keep.split_at(n2);
    or_compact(l_data, l_keep);
    or_off_compact(r_data, r_keep, (n1 - n2 + m) & (n1 - 1));
    join_prefix(l_data, r_data, m);
}

#[cfg(feature = "std")]
fn parallel_or_compact<T: CtSwap + Send>(data: &mut [T], keep: &[bool], threads: usize) {
    let n = data.len();
    if threads <= 1 || n == 0 {
        return or_compact(data, keep);
    }

    let (n1, n2) = split_sizes(n);
    let m = count(&keep[..n2]);

    let (l_data, r_data) = data.split_at_mut(n2);
    let (l_keep, r_keep) = keep.split_at(n2);
    or_compact(l_data, l_keep);
    parallel_or_off_compact(r_data, r_keep, (n1 - n2 + m) & (n1 - 1), threads);
    join_prefix(l_data, r_data, m);
}

/// Split `n > 0` into `(2^k, n - 2^k)` with `2^k` the largest power of two not
/// exceeding `n`.
#[inline]
fn split_sizes(n: usize) -> (usize, usize) {
    let n1 = 1usize << n.ilog2();
    (n1, n - n1)
}

/// Move the tail of the compacted suffix `r_data` over the unkept part of the
/// compacted prefix `l_data`, which holds `m` kept elements.
fn join_prefix<T: CtSwap>(l_data: &mut [T], r_data: &mut [T], m: usize) {
    let start = r_data.len() - l_data.len();
    for (i, (l, r)) in l_data.iter_mut().zip(&mut r_data[start..]).enumerate() {
        T::ct_swap(mask::choice_from_ge(i, m), l, r);
    }
}

/// Compact a power-of-two-sized `data` so that the kept elements start at
/// position `offset` and wrap around the end of the slice.
fn or_off_compact<T: CtSwap>(data: &mut [T], keep: &[bool], offset: usize) {
    let n = data.len();
    debug_assert!(n.is_power_of_two() || n == 0);
    debug_assert!(offset < n.max(1));

    if n == 2 {
        swap_pair(data, keep, offset);
    } else if n > 2 {
        let half = n / 2;
        let m = count(&keep[..half]);

        let (l_data, r_data) = data.split_at_mut(half);
        let (l_keep, r_keep) = keep.split_at(half);
        or_off_compact(l_data, l_keep, offset & (half - 1));
        or_off_compact(r_data, r_keep, (offset + m) & (half - 1));
        join_halves(l_data, r_data, offset, m);
    }
}

#[cfg(feature = "std")]
fn parallel_or_off_compact<T: CtSwap + Send>(
    data: &mut [T],
    keep: &[bool],
    offset: usize,
    threads: usize,
) {
    let n = data.len();
    if threads <= 1 || n <= 2 {
        return or_off_compact(data, keep, offset);
    }

    let half = n / 2;
    let m = count(&keep[..half]);

    let (l_threads, r_threads) = split_threads(threads);
    let (l_data, r_data) = data.split_at_mut(half);
    let (l_keep, r_keep) = keep.split_at(half);
    thread::scope(|s| {
        s.spawn(|| parallel_or_off_compact(&mut *l_data, l_keep, offset & (half - 1), l_threads));
        parallel_or_off_compact(&mut *r_data, r_keep, (offset + m) & (half - 1), r_threads);
    });
    join_halves(l_data, r_data, offset, m);
}

fn swap_pair<T: CtSwap>(data: &mut [T], keep: &[bool], offset: usize) {
    let (l, r) = data.split_at_mut(1);
    let bit = ((!keep[0] & keep[1]) as u8) ^ (offset as u8);
    T::ct_swap(Choice::from(bit), &mut l[0], &mut r[0]);
}

/// Merge two offset-compacted halves of a block compacted to `offset`, where
/// the left half holds `m` kept elements.
fn join_halves<T: CtSwap>(l_data: &mut [T], r_data: &mut [T], offset: usize, m: usize) {
    let half = l_data.len();
    let l_offset = offset & (half - 1);
    let r_offset = (offset + m) & (half - 1);

    let s = mask::choice_from_ge(l_offset + m, half) ^ mask::choice_from_ge(offset, half);
    for (i, (l, r)) in l_data.iter_mut().zip(r_data.iter_mut()).enumerate() {
        T::ct_swap(s ^ mask::choice_from_ge(i, r_offset), l, r);
    }
}
