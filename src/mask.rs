//! Conversions between [`Choice`]s, 0/1 bits and full-width bitmasks.
//!
//! Everything which turns a condition into a mask lives here so that the
//! operation modules share a single derivation.

use subtle::Choice;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// Convert a `bool` into a [`Choice`].
///
/// The conversion goes through `Choice::from(u8)`, which hides the value from
/// the optimizer.
#[inline]
pub(crate) fn choice_from_bool(cond: bool) -> Choice {
    Choice::from(cond as u8)
}

/// Create a 64-bit bitmask from a [`Choice`].
///
/// # Returns
/// - `0` for a falsy choice
/// - `u64::MAX` for a truthy choice
///
/// Narrower masks are obtained by truncation, which keeps both patterns intact.
#[inline]
pub(crate) fn choice_to_mask(choice: Choice) -> u64 {
    mask_from_lsb(choice.unwrap_u8())
}

/// Returns `u64::MAX` if `bit == 1` and `0` if `bit == 0`.
#[inline]
pub(crate) const fn mask_from_lsb(bit: u8) -> u64 {
    debug_assert!(bit == 0 || bit == 1);
    (bit as u64).wrapping_neg()
}

/// Returns `1` if `x < y`, and `0` otherwise.
#[inline]
pub(crate) const fn lt_bit(x: usize, y: usize) -> u8 {
    // See "Hacker's Delight" 2nd ed, section 2-12 (Comparison predicates)
    let bit = (((!x) & y) | (((!x) | y) & (x.wrapping_sub(y)))) >> (usize::BITS - 1);
    bit as u8
}

/// Returns the truthy value if `x < y`, and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_lt(x: usize, y: usize) -> Choice {
    Choice::from(lt_bit(x, y))
}

/// Returns the truthy value if `x >= y`, and the falsy value otherwise.
#[inline]
pub(crate) fn choice_from_ge(x: usize, y: usize) -> Choice {
    !choice_from_lt(x, y)
}

/// Returns `1` if a three-way comparison result reports "greater", `0` otherwise.
///
/// `ordering` must be one of `-1`, `0` or `1`: only `1` has a set sign bit
/// after negation.
#[inline]
pub(crate) const fn gt_bit(ordering: i8) -> u8 {
    debug_assert!(ordering.unsigned_abs() <= 1);
    (ordering.wrapping_neg() as u8) >> (u8::BITS - 1)
}
