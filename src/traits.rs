//! Traits provided by this crate

use subtle::Choice;

/// Constant-time conditional selection.
pub trait CtSelect: Copy {
    /// Return `a` if `cond` is truthy, otherwise return `b`.
    ///
    /// The result is computed by masking both operands, so the same
    /// instructions execute regardless of `cond`.
    fn ct_select(cond: Choice, a: Self, b: Self) -> Self;
}

/// Constant-time bitwise equality.
pub trait CtEqual: Copy {
    /// Determine if `a` and `b` have identical bit patterns.
    ///
    /// # Returns
    ///
    /// If equal, returns `Choice(1)`. Otherwise, returns `Choice(0)`.
    fn ct_equal(a: Self, b: Self) -> Choice;
}

/// Constant-time three-way comparison.
pub trait CtCompare: Copy {
    /// Compare `a` with `b`.
    ///
    /// # Returns
    ///
    /// - `-1` if `a < b`
    /// - `0` if `a == b`
    /// - `1` if `a > b`
    fn ct_compare(a: Self, b: Self) -> i8;
}

/// Constant-time conditional swap.
pub trait CtSwap {
    /// Exchange the values of `a` and `b` if `cond` is truthy, otherwise leave
    /// them unchanged.
    ///
    /// Both locations are read and written in either case.
    fn ct_swap(cond: Choice, a: &mut Self, b: &mut Self);
}
