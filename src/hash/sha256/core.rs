//! SHA-256 hashing functions
//!
//! Block chaining over the padded message plus the public entry points:
//! - `sha256_bytes` hashes raw bytes and cannot fail
//! - `sha256_message_bits` hashes a message of any bit length
//! - `sha256` / `sha256_with` hash text and return the hexadecimal digest,
//!   failing only when the text cannot be encoded under the chosen policy

use tracing::trace;

use super::H256_INIT;
use super::computations::{all_rounds, schedule};
use super::padding::{Block, pad_bits};
use crate::config::HashOptions;
use crate::error::Result;
use crate::primitives::{Bits, Digest};

/// Compresses a single 512-bit block into `state`.
#[inline(always)]
pub fn compress_block(state: &mut [u32; 8], block: &Block) {
    let w = schedule(block);
    all_rounds(state, &w);
}

/// Runs the compression function over `blocks` in order, starting from
/// `initial`, and returns the final state.
pub fn compress(initial: [u32; 8], blocks: &[Block]) -> [u32; 8] {
    let mut state = initial;

    for block in blocks {
        compress_block(&mut state, block);
    }

    state
}

/// Computes the SHA-256 digest of `input`.
pub fn sha256_bytes(input: &[u8]) -> Digest {
    sha256_message_bits(&Bits::from_bytes(input))
}

/// Computes the digest of a message given as raw bits.
///
/// The bit length does not have to be a multiple of 8.
pub fn sha256_message_bits(message: &Bits) -> Digest {
    let blocks = pad_bits(message);
    let digest = Digest::from(compress(H256_INIT, &blocks));

    trace!(bits = message.len(), digest = %digest, "sha256 computed");

    digest
}

/// Hashes `input` as strict Latin-1 text and returns the lowercase hex digest.
///
/// # Errors
/// `InvalidInputEncoding` if a character is above U+00FF.
pub fn sha256(input: &str) -> Result<String> {
    sha256_with(input, &HashOptions::default())
}

/// Hashes `input` using the text encoding from `options`.
pub fn sha256_with(input: &str, options: &HashOptions) -> Result<String> {
    let bytes = options.encoding.encode(input)?;

    Ok(sha256_bytes(&bytes).to_hex())
}
