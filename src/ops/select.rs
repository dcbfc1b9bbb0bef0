//! Constant-time selection support.

use crate::{CtSelect, mask};
use subtle::Choice;

macro_rules! impl_ct_select {
    ($($int:ty => $uint:ty, $wide:ty);+ $(;)?) => {
        $(
            impl CtSelect for $int {
                #[inline]
                #[allow(trivial_numeric_casts)]
                fn ct_select(cond: Choice, a: Self, b: Self) -> Self {
                    let mask = mask::choice_to_mask(cond) as $uint;
                    ((mask & a as $uint) | (!mask & b as $uint)) as Self
                }
            }
        )+
    };
}

for_each_int!(impl_ct_select);

impl<T: CtSelect, const N: usize> CtSelect for [T; N] {
    #[inline]
    fn ct_select(cond: Choice, a: Self, b: Self) -> Self {
        core::array::from_fn(|i| T::ct_select(cond, a[i], b[i]))
    }
}

/// Return `a` if `cond` is true, otherwise return `b`, without branching on `cond`.
#[inline]
pub fn select<T: CtSelect>(cond: bool, a: T, b: T) -> T {
    T::ct_select(mask::choice_from_bool(cond), a, b)
}

macro_rules! select_fns {
    ($($name:ident: $int:ty),+ $(,)?) => {
        $(
            #[doc = concat!("[`select`] for `", stringify!($int), "` operands.")]
            #[inline]
            pub fn $name(cond: bool, a: $int, b: $int) -> $int {
                select(cond, a, b)
            }
        )+
    };
}

select_fns!(
    select_i8: i8,
    select_i16: i16,
    select_i32: i32,
    select_i64: i64,
);

#[cfg(test)]
mod tests {
    use super::{select, select_i8, select_i16, select_i32, select_i64};
    use crate::CtSelect;
    use subtle::Choice;

    #[test]
    fn select_signed() {
        assert_eq!(select_i8(true, -2, -1), -2);
        assert_eq!(select_i8(false, -2, -1), -1);
        assert_eq!(select_i16(true, -2, -1), -2);
        assert_eq!(select_i16(false, -2, -1), -1);
        assert_eq!(select_i32(true, -2, -1), -2);
        assert_eq!(select_i32(false, -2, -1), -1);
        assert_eq!(select_i64(true, -2, -1), -2);
        assert_eq!(select_i64(false, -2, -1), -1);
    }

    #[test]
    fn select_unsigned() {
        assert_eq!(select::<u8>(true, 2, 1), 2);
        assert_eq!(select::<u8>(false, 2, 1), 1);
        assert_eq!(select::<u16>(true, 2, 1), 2);
        assert_eq!(select::<u16>(false, 2, 1), 1);
        assert_eq!(select::<u32>(true, 2, 1), 2);
        assert_eq!(select::<u32>(false, 2, 1), 1);
        assert_eq!(select::<u64>(true, 2, 1), 2);
        assert_eq!(select::<u64>(false, 2, 1), 1);
        assert_eq!(select::<usize>(true, 2, 1), 2);
        assert_eq!(select::<usize>(false, 2, 1), 1);
    }

    #[test]
    fn select_extremes() {
        assert_eq!(select_i8(true, i8::MIN, i8::MAX), i8::MIN);
        assert_eq!(select_i8(false, i8::MIN, i8::MAX), i8::MAX);
        assert_eq!(select_i64(true, 0, -1), 0);
        assert_eq!(select_i64(false, 0, -1), -1);
        assert_eq!(select::<u64>(true, u64::MAX, 0), u64::MAX);
        assert_eq!(select::<u64>(false, u64::MAX, 0), 0);
    }

    #[test]
    fn select_same_value() {
        assert_eq!(select_i32(true, 7, 7), 7);
        assert_eq!(select_i32(false, 7, 7), 7);
    }

    #[test]
    fn ct_select_array() {
        let a = [1u16, 2, 3];
        let b = [4u16, 5, 6];
        assert_eq!(<[u16; 3]>::ct_select(Choice::from(1), a, b), a);
        assert_eq!(<[u16; 3]>::ct_select(Choice::from(0), a, b), b);
    }
}
