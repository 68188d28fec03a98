//! # Coins Addr Core
//!
//! `coins-addr-core` contains the digest and text-codec primitives used by the
//! `coins-addr` crate.
//!
//! ## Crate Layout
//!
//! ### Hashes
//!
//! The hashes module provides `std::io::Write` interfaces over the digests used
//! in address construction. `Hash160` is Bitcoin's `ripemd160(sha2(x))`,
//! `Hash256` is Bitcoin's double-sha2 (used for base58check checksums), and
//! `Sha256` is the single-round digest used for witness script hashes.
//!
//! ### Enc
//!
//! The enc module wraps the `bs58` and `bech32` crates with the framing rules
//! used by addresses: a 4-byte double-sha2 checksum for base58check, and
//! witness version + program length rules for segwit strings. Decoding errors
//! are reported as `EncodingError`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

#[macro_use]
pub mod macros;

pub mod enc;
pub mod hashes;

pub use enc::*;
pub use hashes::*;

#[doc(hidden)]
pub use hex;
