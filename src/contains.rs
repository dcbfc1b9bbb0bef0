//! Oblivious membership test.

use crate::CtEqual;
use subtle::Choice;

/// Returns `true` if `item` occurs in `list`.
///
/// Every element is compared against `item`; the scan never stops early, so
/// its running time depends only on `list.len()` and not on whether or where
/// a match occurs.
pub fn contains<T: CtEqual>(list: &[T], item: &T) -> bool {
    list.iter()
        .fold(Choice::from(0), |found, &elem| found | T::ct_equal(elem, *item))
        .into()
}
