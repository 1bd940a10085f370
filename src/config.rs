//! Hashing options
//!
//! SHA-256 itself is defined over bytes. Text input first has to be turned
//! into a byte sequence, and this module decides how.
//!
//! Two policies exist:
//! - `Latin1` (default): every character is one byte. Characters above
//!   U+00FF are rejected instead of being silently truncated.
//! - `Utf8`: the string is hashed as its UTF-8 encoding, which accepts every
//!   `&str`.
//!
//! For pure ASCII input both policies produce the same bytes and therefore
//! the same digest.

use crate::error::{Result, Sha256Error};

/// Text-to-byte policy applied before hashing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// One byte per character; code points above 0xFF are an error.
    #[default]
    Latin1,
    /// Standard UTF-8 encoding of the string.
    Utf8,
}

impl TextEncoding {
    /// Encodes `input` according to this policy.
    ///
    /// # Errors
    /// `Sha256Error::InvalidInputEncoding` when `Latin1` meets a character
    /// above U+00FF. `position` is the character index, not the byte index.
    pub fn encode(self, input: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Ok(input.as_bytes().to_vec()),
            TextEncoding::Latin1 => input
                .chars()
                .enumerate()
                .map(|(position, c)| {
                    u8::try_from(u32::from(c)).map_err(|_| Sha256Error::InvalidInputEncoding {
                        position,
                        code_point: u32::from(c),
                    })
                })
                .collect(),
        }
    }
}

/// Options for the text entry points (`sha256_with`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HashOptions {
    pub encoding: TextEncoding,
}

impl HashOptions {
    pub const fn new() -> Self {
        Self {
            encoding: TextEncoding::Latin1,
        }
    }

    pub const fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
