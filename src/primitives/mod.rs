//! Primitive types
//!
//! Low-level building blocks used by the hash implementation:
//! - `Bits`: an explicit MSB-first bit vector with width-checked operations
//! - `word`: the native `u32` equivalents of those operations
//! - `Digest`: the 256-bit hash output and its hexadecimal formatter

mod bits;
mod digest;

pub mod word;

pub use bits::{Bits, majority};
pub(crate) use bits::pack;
pub use digest::Digest;
