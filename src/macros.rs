//! Macro definitions shared by the operation modules.

/// Invoke `$mac` once with every supported integer type.
///
/// Each entry is `int => uint, wide` where:
/// - `uint` is the unsigned type with the same width as `int`, used for bitwise work
/// - `wide` is a signed type with at least one more bit of range than `int`,
///   used to subtract without overflow
macro_rules! for_each_int {
    ($mac:ident) => {
        $mac! {
            i8 => u8, i16;
            i16 => u16, i32;
            i32 => u32, i64;
            i64 => u64, i128;
            isize => usize, i128;
            u8 => u8, i16;
            u16 => u16, i32;
            u32 => u32, i64;
            u64 => u64, i128;
            usize => usize, i128;
        }
    };
}
