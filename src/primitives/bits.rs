//! Bit-vector primitive
//!
//! `Bits` is an explicit sequence of single-bit values, each stored as `0`
//! or `1`, ordered from the most significant bit to the least significant
//! one. It is the working representation of the padder and of the
//! bit-level reference compression.
//!
//! Every binary operation requires both operands to have the same width.
//! A mismatch is reported as `Sha256Error::InternalInvariant`; operands are
//! never truncated or extended to make them fit.

use crate::error::{Result, Sha256Error};

/// Owned, MSB-first bit vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bits(Vec<u8>);

/// Per-bit majority vote: returns whichever value occurs at least twice.
#[inline(always)]
pub fn majority(x: u8, y: u8, z: u8) -> u8 {
    (x & y) | (x & z) | (y & z)
}

/// Packs up to 32 MSB-first bits into a native word.
#[inline(always)]
pub(crate) fn pack(bits: &[u8]) -> u32 {
    bits.iter().fold(0u32, |acc, &b| (acc << 1) | u32::from(b))
}

impl Bits {
    pub const fn new() -> Self {
        Bits(Vec::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Bits(Vec::with_capacity(capacity))
    }

    /// A vector of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Bits(vec![0; len])
    }

    /// The 32 bits of `word`, most significant first.
    pub fn from_word(word: u32) -> Self {
        Bits((0..32).rev().map(|i| ((word >> i) & 1) as u8).collect())
    }

    /// The 64 bits of `value`, most significant first.
    pub fn from_u64(value: u64) -> Self {
        Bits((0..64).rev().map(|i| ((value >> i) & 1) as u8).collect())
    }

    /// Expands every byte to 8 bits, MSB first, in input order.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut out = Bits::with_capacity(bytes.len() * 8);

        for &byte in bytes {
            for i in (0..8).rev() {
                out.0.push((byte >> i) & 1);
            }
        }

        out
    }

    /// Builds a vector from arbitrary values; any non-zero value becomes `1`.
    pub fn from_bit_values(values: &[u8]) -> Self {
        Bits(values.iter().map(|&v| u8::from(v != 0)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(u8::from(bit));
    }

    pub fn extend(&mut self, other: &Bits) {
        self.0.extend_from_slice(&other.0);
    }

    /// Zero-fills (or cuts) the vector to exactly `len` bits.
    pub fn resize(&mut self, len: usize) {
        self.0.resize(len, 0);
    }

    /// Converts a 32-bit vector back into a native word.
    ///
    /// # Errors
    /// `InternalInvariant` if the width is not exactly 32.
    pub fn to_word(&self) -> Result<u32> {
        if self.len() != 32 {
            return Err(Sha256Error::InternalInvariant {
                operation: "to_word",
                left: self.len(),
                right: 32,
            });
        }

        Ok(pack(&self.0))
    }

    fn same_width(&self, other: &Bits, operation: &'static str) -> Result<()> {
        if self.len() != other.len() {
            return Err(Sha256Error::InternalInvariant {
                operation,
                left: self.len(),
                right: other.len(),
            });
        }

        Ok(())
    }

    fn zip_with(&self, other: &Bits, operation: &'static str, f: fn(u8, u8) -> u8) -> Result<Bits> {
        self.same_width(other, operation)?;

        Ok(Bits(
            self.0.iter().zip(other.0.iter()).map(|(&l, &r)| f(l, r)).collect(),
        ))
    }

    pub fn bit_and(&self, other: &Bits) -> Result<Bits> {
        self.zip_with(other, "and", |l, r| l & r)
    }

    pub fn bit_xor(&self, other: &Bits) -> Result<Bits> {
        self.zip_with(other, "xor", |l, r| l ^ r)
    }

    pub fn bit_not(&self) -> Bits {
        Bits(self.0.iter().map(|&b| b ^ 1).collect())
    }

    /// Circular right rotation by `n` positions within the current width.
    pub fn rotate_right(&self, n: usize) -> Bits {
        let mut out = self.0.clone();

        let width = out.len();
        if width > 0 {
            out.rotate_right(n % width);
        }

        Bits(out)
    }

    /// Logical right shift: the lowest `n` bits are dropped and zeros enter
    /// from the left.
    pub fn shift_right(&self, n: usize) -> Bits {
        let width = self.len();
        let n = n.min(width);

        let mut out = Bits::zeros(n);
        out.0.extend_from_slice(&self.0[..width - n]);

        out
    }

    /// Ripple-carry addition modulo 2^width.
    ///
    /// The carry out of each position is the majority of the two operand bits
    /// and the incoming carry. The final carry is discarded.
    pub fn wrapping_add(&self, other: &Bits) -> Result<Bits> {
        self.same_width(other, "add")?;

        let mut out = Bits::zeros(self.len());
        let mut carry = 0u8;

        for i in (0..self.len()).rev() {
            let (a, b) = (self.0[i], other.0[i]);

            out.0[i] = a ^ b ^ carry;
            carry = majority(a, b, carry);
        }

        Ok(out)
    }

    /// Element-wise majority of three vectors (the SHA-256 `Maj` function).
    pub fn majority_of(x: &Bits, y: &Bits, z: &Bits) -> Result<Bits> {
        x.same_width(y, "majority")?;
        x.same_width(z, "majority")?;

        Ok(Bits(
            x.0.iter()
                .zip(y.0.iter())
                .zip(z.0.iter())
                .map(|((&a, &b), &c)| majority(a, b, c))
                .collect(),
        ))
    }
}

impl From<u32> for Bits {
    fn from(word: u32) -> Self {
        Bits::from_word(word)
    }
}

impl AsRef<[u8]> for Bits {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
