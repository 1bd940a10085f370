//! SHA-256 message padding
//!
//! The message is first expanded into a flat bit sequence of length `L`,
//! then a single `1` bit, zero bits and the 64-bit big-endian encoding of
//! `L` are appended. Three cases are distinguished:
//!
//! - `L < 448`: pad to 448 bits and append the length (one block)
//! - `448 <= L <= 512`: pad to 1024 bits and overwrite the last 64 bits with
//!   the length (two blocks, the second one almost empty)
//! - `L > 512`: pad to a multiple of 512 minus 64 and append the length
//!
//! All three cases produce the standard FIPS 180-4 layout.

use tracing::trace;

use crate::primitives::{Bits, pack};

/// A 512-bit block as sixteen big-endian words.
pub type Block = [u32; 16];

pub const BLOCK_BITS: usize = 512;
pub const LENGTH_BITS: usize = 64;
const LENGTH_OFFSET: usize = BLOCK_BITS - LENGTH_BITS;

/// Pads a byte message and splits it into blocks.
pub fn pad(message: &[u8]) -> Vec<Block> {
    pad_bits(&Bits::from_bytes(message))
}

/// Pads an arbitrary-length bit message and splits it into blocks.
///
/// The length field always encodes the unpadded bit length.
pub fn pad_bits(message: &Bits) -> Vec<Block> {
    let len = message.len();
    let length_field = Bits::from_u64(len as u64);

    let mut padded = Bits::with_capacity(len + 1 + BLOCK_BITS + LENGTH_BITS);
    padded.extend(message);
    padded.push(true);

    let branch = if len < LENGTH_OFFSET {
        padded.resize(LENGTH_OFFSET);
        padded.extend(&length_field);

        "single"
    } else if len <= BLOCK_BITS {
        padded.resize(2 * BLOCK_BITS);

        // At most 513 bits are in use, so the field never overlaps the message.
        let offset = 2 * BLOCK_BITS - LENGTH_BITS;
        padded.as_mut_slice()[offset..].copy_from_slice(length_field.as_slice());

        "two-block"
    } else {
        let total = (len + 1 + LENGTH_BITS).div_ceil(BLOCK_BITS) * BLOCK_BITS;
        padded.resize(total - LENGTH_BITS);
        padded.extend(&length_field);

        "multi"
    };

    let blocks = split_blocks(&padded);
    trace!(bits = len, branch, blocks = blocks.len(), "message padded");

    blocks
}

fn split_blocks(padded: &Bits) -> Vec<Block> {
    debug_assert_eq!(padded.len() % BLOCK_BITS, 0);

    padded
        .as_slice()
        .chunks_exact(BLOCK_BITS)
        .map(|chunk| {
            let mut block = [0u32; 16];

            for (word, bits) in block.iter_mut().zip(chunk.chunks_exact(32)) {
                *word = pack(bits);
            }

            block
        })
        .collect()
}
