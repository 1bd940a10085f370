//! 256-bit digest value
//!
//! `Digest` holds the final SHA-256 state serialized as 32 big-endian bytes
//! (h0 first). Its textual form is the canonical 64-character lowercase
//! hexadecimal string, without separators or prefix.

use std::fmt::{Display, Formatter, Result};

/// Nibble-to-character table used by the formatter.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A SHA-256 digest, stored big-endian.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 32]);

impl Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Converts the digest back into the eight state words h0..h7.
    pub fn words(&self) -> [u32; 8] {
        let mut out = [0u32; 8];

        for (o, chunk) in out.iter_mut().zip(self.0.chunks_exact(4)) {
            *o = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }

    /// Formats the digest as 64 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(Self::LEN * 2);

        for &byte in self.0.iter() {
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0f) as usize] as char);
        }

        out
    }
}

/// Serializes the eight state words, h0 first, each big-endian.
impl From<[u32; 8]> for Digest {
    fn from(state: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(state.into_iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest(out)
    }
}

impl From<Digest> for [u8; 32] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_hex())
    }
}
