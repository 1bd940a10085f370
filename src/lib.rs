//! Bit-accurate SHA-256
//!
//! A from-scratch implementation of the SHA-256 hash function (FIPS 180-4)
//! that favours clarity and auditability over speed.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The bit/word layer. `Bits` is an explicit MSB-first bit vector with
//!   width-checked AND/XOR/NOT, rotation, shift and ripple-carry addition;
//!   `primitives::word` holds the native `u32` equivalents. `Digest` is the
//!   256-bit output value and its lowercase hexadecimal formatter.
//!
//! - `hash`  
//!   The SHA-256 algorithm itself: message padding into 512-bit blocks,
//!   the 64-round compression function, and a bit-level reference engine
//!   used to cross-check the native one.
//!
//! - `config`  
//!   How text is turned into bytes before hashing (strict Latin-1 by
//!   default, UTF-8 on request).
//!
//! - `crypto`  
//!   A thin text-in/text-out adapter for host environments.
//!
//! # Example
//!
//! ```
//! let digest = sha256_bits::sha256("abc").unwrap();
//! assert_eq!(
//!     digest,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! Hashing is synchronous and side-effect free; the constant tables are
//! read-only and every call works on its own state.

pub mod config;
pub mod crypto;
pub mod error;
pub mod hash;
pub mod primitives;

pub use config::{HashOptions, TextEncoding};
pub use error::Sha256Error;
pub use hash::{sha256, sha256_bytes, sha256_message_bits, sha256_with};
pub use primitives::Digest;
