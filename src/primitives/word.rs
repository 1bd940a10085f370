//! Native 32-bit word operations
//!
//! These are the fixed-width counterparts of the `Bits` operations, used by
//! the compression engine. Each one must agree bit for bit with its
//! bit-vector twin: `rotr` with `Bits::rotate_right`, `shr` with
//! `Bits::shift_right` and `add` with `Bits::wrapping_add`.

#[inline(always)]
pub fn rotr(x: u32, n: u32) -> u32 {
    x.rotate_right(n)
}

/// Logical right shift; shifting by 32 or more yields zero.
#[inline(always)]
pub fn shr(x: u32, n: u32) -> u32 {
    x.checked_shr(n).unwrap_or(0)
}

/// Addition modulo 2^32.
#[inline(always)]
pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}
