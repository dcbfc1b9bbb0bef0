//! Oblivious shuffling.
//!
//! ORShuffle: mark a uniformly random half of the elements, move the marked
//! elements to the front with [`compact`], then shuffle both halves
//! recursively. The memory-access pattern depends only on the slice length.

use crate::{CtSwap, compact, mask};
use alloc::vec::Vec;
use rand_core::{CryptoRng, RngCore};
use subtle::Choice;

/// Randomly permute `data` using `rng`, without data-dependent memory accesses.
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
pub fn shuffle<T, R>(data: &mut [T], rng: &mut R)
where
    T: CtSwap,
    R: CryptoRng + ?Sized,
{
    let n = data.len();
    if n < 2 {
        return;
    }

    if n == 2 {
        let (l, r) = data.split_at_mut(1);
        let coin = Choice::from((rng.next_u32() & 1) as u8);
        T::ct_swap(coin, &mut l[0], &mut r[0]);
        return;
    }

    let marked = mark_half(n, rng);
    let half = compact(data, &marked);
    debug_assert_eq!(half, n.div_ceil(2));

    let (l_data, r_data) = data.split_at_mut(half);
    shuffle(l_data, rng);
    shuffle(r_data, rng);
}

/// Mark exactly `ceil(n / 2)` of `n` positions, chosen uniformly at random.
///
/// Position `i` is marked with probability `remaining_marks / (n - i)`.
fn mark_half<R: CryptoRng + ?Sized>(n: usize, rng: &mut R) -> Vec<bool> {
    let mut remaining_marks = n.div_ceil(2);

    (0..n)
        .map(|i| {
            let r = random_below(rng, (n - i) as u64) as usize;
            let take = mask::lt_bit(r, remaining_marks);
            remaining_marks -= take as usize;
            bool::from(Choice::from(take))
        })
        .collect()
}

/// Uniformly random value in `0..bound`.
///
/// Uses Lemire's multiply-and-reject method. Only the number of samples drawn
/// varies, never the arithmetic performed on the accepted sample.
fn random_below<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    let mut product = u128::from(rng.next_u64()) * u128::from(bound);
    let mut low = product as u64;
    if low < bound {
        let threshold = bound.wrapping_neg() % bound;
        while low < threshold {
            product = u128::from(rng.next_u64()) * u128::from(bound);
            low = product as u64;
        }
    }
    (product >> 64) as u64
}
