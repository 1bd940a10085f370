//! Host-facing adapter
//!
//! Exposes a single `crypto::sha256(str) -> String` function for embedding
//! environments that expect a plain text-to-text call.
//!
//! Text whose characters all lie in U+0000..=U+00FF is hashed one byte per
//! character, exactly like `crate::sha256`. Any character above U+00FF
//! switches the whole string to its UTF-8 encoding so that every input still
//! yields a digest; use `crate::sha256` to get an error instead.

use crate::config::TextEncoding;
use crate::hash::sha256_bytes;

/// Calculate a SHA256 checksum
pub fn sha256(input: &str) -> String {
    let bytes = TextEncoding::Latin1
        .encode(input)
        .unwrap_or_else(|_| input.as_bytes().to_vec());

    sha256_bytes(&bytes).to_hex()
}
