//! Holds utilites for working with the cryptographic digests used in address
//! construction.
//!
//! Each digest is exposed as a `DigestWriter`, a `std::io::Write` that consumes
//! itself to produce a fixed-size output, plus a free function for one-shot use.

/// The `DigestWriter` trait
#[macro_use]
pub mod writer;

/// Tooling for bitcoin-style double-sha2
pub mod hash256;

/// Tooling for bitcoin-style ripemd160(sha2)
pub mod hash160;

/// Tooling for single-round sha2
pub mod sha256;

pub use hash160::*;
pub use hash256::*;
pub use sha256::*;
pub use writer::*;
