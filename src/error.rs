//! Error type shared by the hashing entry points.

use thiserror::Error;

/// SHA-256 error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Sha256Error {
    /// A character does not fit in a single byte under the selected encoding.
    #[error("character U+{code_point:04X} at position {position} is outside the single-byte range")]
    InvalidInputEncoding { position: usize, code_point: u32 },

    /// Two bit vectors of different widths were combined.
    #[error("{operation}: bit-vector width mismatch ({left} vs {right})")]
    InternalInvariant {
        operation: &'static str,
        left: usize,
        right: usize,
    },
}

pub type Result<T> = core::result::Result<T, Sha256Error>;
