//! Constant-time equality.
//!
//! The operands are XORed and the difference is reduced to a single bit with
//! `(x | -x) >> (BITS - 1)`, which is `1` for any non-zero `x`. Equality is the
//! inverse of that bit.
//!
//! Turning the final bit into a host `bool` (see [`equal`]) relies on the
//! compiler not lowering the conversion to a conditional jump. This holds on
//! the targets we know of but cannot be expressed in the type system: prefer
//! [`CtEqual::ct_equal`], which keeps the result as a [`Choice`], when the
//! answer feeds further constant-time code.

use crate::CtEqual;
use subtle::Choice;

macro_rules! impl_ct_equal {
    ($($int:ty => $uint:ty, $wide:ty);+ $(;)?) => {
        $(
            impl CtEqual for $int {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn ct_equal(a: Self, b: Self) -> Choice {
                    let diff = (a as $uint) ^ (b as $uint);
                    let nonzero = (diff | diff.wrapping_neg()) >> (<$uint>::BITS - 1);
                    Choice::from((nonzero as u8) ^ 1)
                }
            }
        )+
    };
}

for_each_int!(impl_ct_equal);

impl<T: CtEqual, const N: usize> CtEqual for [T; N] {
    #[inline]
    fn ct_equal(a: Self, b: Self) -> Choice {
        a.iter()
            .zip(b.iter())
            .fold(Choice::from(1), |acc, (&x, &y)| acc & T::ct_equal(x, y))
    }
}

/// Returns `true` iff `a` and `b` have identical bit patterns, without
/// branching on either operand.
#[inline]
pub fn equal<T: CtEqual>(a: T, b: T) -> bool {
    T::ct_equal(a, b).into()
}

macro_rules! equal_fns {
    ($($name:ident: $int:ty),+ $(,)?) => {
        $(
            #[doc = concat!("[`equal`] for `", stringify!($int), "` operands.")]
            #[inline]
            pub fn $name(a: $int, b: $int) -> bool {
                equal(a, b)
            }
        )+
    };
}

equal_fns!(
    equal_i8: i8,
    equal_i16: i16,
    equal_i32: i32,
    equal_i64: i64,
);
