//! Constant-time primitive operations on fixed-width integers, and the oblivious
//! algorithms built from them.
//!
//! # About
//! This library provides branch-free conditional select, equality, three-way
//! comparison and conditional swap over 8, 16, 32 and 64-bit integers. None of
//! these operations contain control flow or memory accesses which depend on the
//! values of their operands, which makes them suitable building blocks for code
//! that handles secrets.
//!
//! On top of the primitives the crate offers a handful of *oblivious* algorithms
//! whose memory-access pattern depends only on the length of their input:
//!
//! - [`contains`]: membership test which never short-circuits.
//! - [`sort`] / [`sort_descending`]: a bitonic sorting network for slices of any length.
//! - [`compact`]: order-preserving compaction (ORCompact).
//! - `filter` (requires `alloc`): compaction driven by a predicate.
//! - `shuffle` (requires `rand`): oblivious random permutation (ORShuffle).
//!
//! With the `std` feature, `sort_parallel`, `sort_descending_parallel`,
//! `compact_parallel` and `filter_parallel` spread the same networks over a
//! caller-chosen number of scoped threads.
//!
//! # Goals
//! - No heap allocations in the primitives i.e. `no_std`-friendly.
//! - Conditions are passed through [`subtle::Choice`], which acts as an
//!   optimization barrier before being expanded into bitmasks.
//! - One implementation per operation, shared by every width through macros.
//!
//! # Usage
//! ```
//! use ct_ops::{compare_i8, equal_i8, select_i8, swap_u8};
//!
//! assert_eq!(select_i8(true, 5, -5), 5);
//! assert_eq!(select_i8(false, 5, -5), -5);
//! assert!(!equal_i8(5, -5));
//! assert_eq!(compare_i8(5, -5), 1);
//! assert_eq!(compare_i8(i8::MIN, i8::MAX), -1);
//!
//! let (mut a, mut b) = (200u8, 50u8);
//! swap_u8(true, &mut a, &mut b);
//! assert_eq!((a, b), (50, 200));
//! ```
//!
//! # Caveats
//! Rust offers no way to guarantee that the optimizer will not turn bitwise
//! code back into a conditional jump. The operations in this crate are written
//! so that current compilers emit branch-free code for them, and the `dudect`
//! harness in this repository checks for measurable timing leaks, but the
//! generated machine code for a given target should still be inspected before
//! relying on it.
//!
//! Only timing and memory-access side channels are in scope: power and
//! electromagnetic leakage are not addressed.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod compact;
mod contains;
mod mask;
mod ops;
mod sort;
mod traits;

#[cfg(feature = "rand")]
mod shuffle;

pub use crate::{
    compact::compact,
    contains::contains,
    ops::*,
    sort::{sort, sort_descending},
    traits::*,
};
pub use subtle;

#[cfg(feature = "alloc")]
pub use crate::compact::filter;

#[cfg(feature = "std")]
pub use crate::{
    compact::{compact_parallel, filter_parallel},
    sort::{sort_descending_parallel, sort_parallel},
};

#[cfg(feature = "rand")]
pub use crate::shuffle::shuffle;

#[cfg(feature = "rand_core")]
pub use rand_core;
