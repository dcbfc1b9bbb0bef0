//! Constant-time three-way comparison.
//!
//! Both operands are widened to a signed type with at least one extra bit of
//! range before subtracting, so `MIN - MAX` cannot overflow. An arithmetic shift
//! by `BITS - 1` turns each difference into `-1` (negative) or `0`, and
//! `sign(a - b) - sign(b - a)` is then exactly `-1`, `0` or `1`.
//!
//! Unsigned operands are zero-extended into the wider signed type, so they are
//! ordered by numeric value. 64-bit and pointer-sized operands widen to `i128`.

use crate::{CtCompare, CtEqual, CtSelect};
use subtle::Choice;

macro_rules! impl_ct_compare {
    ($($int:ty => $uint:ty, $wide:ty);+ $(;)?) => {
        $(
            impl CtCompare for $int {
                #[inline]
                fn ct_compare(a: Self, b: Self) -> i8 {
                    const SHIFT: u32 = <$wide>::BITS - 1;
                    let a = a as $wide;
                    let b = b as $wide;
                    let ordering = ((a - b) >> SHIFT) - ((b - a) >> SHIFT);
                    debug_assert!((-1..=1).contains(&ordering));
                    ordering as i8
                }
            }
        )+
    };
}

for_each_int!(impl_ct_compare);

/// Lexicographic comparison, starting at index `0`.
///
/// Every element pair is compared; the first non-zero result is kept by
/// selection rather than by stopping early.
impl<T: CtCompare, const N: usize> CtCompare for [T; N] {
    fn ct_compare(a: Self, b: Self) -> i8 {
        let mut ordering = 0i8;
        for (&x, &y) in a.iter().zip(b.iter()) {
            let undecided: Choice = i8::ct_equal(ordering, 0);
            ordering = i8::ct_select(undecided, T::ct_compare(x, y), ordering);
        }
        ordering
    }
}

/// Compare `a` with `b` without branching on either operand.
///
/// # Returns
///
/// `-1` if `a < b`, `0` if `a == b` and `1` if `a > b`.
#[inline]
pub fn compare<T: CtCompare>(a: T, b: T) -> i8 {
    T::ct_compare(a, b)
}

macro_rules! compare_fns {
    ($($name:ident: $int:ty),+ $(,)?) => {
        $(
            #[doc = concat!("[`compare`] for `", stringify!($int), "` operands.")]
            #[inline]
            pub fn $name(a: $int, b: $int) -> i8 {
                compare(a, b)
            }
        )+
    };
}

compare_fns!(
    compare_i8: i8,
    compare_i16: i16,
    compare_i32: i32,
    compare_i64: i64,
);
