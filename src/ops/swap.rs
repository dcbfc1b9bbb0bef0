//! Constant-time conditional swap.

use crate::{CtSwap, mask};
use subtle::Choice;

macro_rules! impl_ct_swap {
    ($($int:ty => $uint:ty, $wide:ty);+ $(;)?) => {
        $(
            impl CtSwap for $int {
                /// XOR swap gated by a mask: when the mask is zero the middle step
                /// is a no-op and the outer two cancel out.
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn ct_swap(cond: Choice, a: &mut Self, b: &mut Self) {
                    let mask = mask::choice_to_mask(cond) as $uint;
                    let mut x = *a as $uint;
                    let mut y = *b as $uint;
                    x ^= y;
                    y ^= x & mask;
                    x ^= y;
                    *a = x as Self;
                    *b = y as Self;
                }
            }
        )+
    };
}

for_each_int!(impl_ct_swap);

impl<T: CtSwap, const N: usize> CtSwap for [T; N] {
    #[inline]
    fn ct_swap(cond: Choice, a: &mut Self, b: &mut Self) {
        for (x, y) in a.iter_mut().zip(b.iter_mut()) {
            T::ct_swap(cond, x, y);
        }
    }
}

/// Exchange the values behind `a` and `b` if `cond` is true.
///
/// Both locations are always read and written, so the memory-access pattern
/// is the same whether or not the values are exchanged.
#[inline]
pub fn swap<T: CtSwap>(cond: bool, a: &mut T, b: &mut T) {
    T::ct_swap(mask::choice_from_bool(cond), a, b);
}

macro_rules! swap_fns {
    ($($name:ident: $int:ty),+ $(,)?) => {
        $(
            #[doc = concat!("[`swap`] for `", stringify!($int), "` operands.")]
            #[inline]
            pub fn $name(cond: bool, a: &mut $int, b: &mut $int) {
                swap(cond, a, b);
            }
        )+
    };
}

swap_fns!(
    swap_u8: u8,
    swap_u16: u16,
    swap_u32: u32,
    swap_u64: u64,
);
