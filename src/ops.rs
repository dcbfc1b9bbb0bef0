//! Constant-time primitive operations.
//!
//! Every operation is implemented once, as a trait impl generated for all
//! supported integer types, and exposed through:
//! - a generic free function taking a `bool` condition, e.g. [`select`]
//! - monomorphic wrappers for each width, e.g. [`select_i8`]

mod compare;
mod equal;
mod select;
mod swap;

pub use self::{
    compare::{compare, compare_i8, compare_i16, compare_i32, compare_i64},
    equal::{equal, equal_i8, equal_i16, equal_i32, equal_i64},
    select::{select, select_i8, select_i16, select_i32, select_i64},
    swap::{swap, swap_u8, swap_u16, swap_u32, swap_u64},
};
