//! # Coins Addr
//!
//! `coins-addr` renders keys, blobs and output scripts as the text forms used by
//! Bitcoin-family networks, and parses address text back into scripts.
//!
//! ## Crate Layout
//!
//! ### Profile
//!
//! A `FormatProfile` holds a network's prefixes: extended key versions, the
//! WIF byte, the SEC text prefix, the legacy address and pay-to-script bytes,
//! and the witness HRP. Every prefix is optional. The `presets` module builds
//! profiles for well-known networks.
//!
//! ### Script
//!
//! Output script builders and the `ScriptClassifier` trait, which maps a
//! script to a `ScriptInfo`. `StandardClassifier` recognizes the standard
//! templates.
//!
//! ### Codec
//!
//! The `AddressCodec` is the main entry point. Encoders return an
//! `EncodedText`, which is either text, a diagnostic (for null-data outputs),
//! or an `Unencodable` reason. Unencodable values display as `"???"`.
//!
//! ### Parse
//!
//! The `TextParser` trait and its `StandardParser` implementation turn
//! address, WIF, extended key and SEC texts back into bytes. Parsing errors
//! are reported as `ParseError`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod codec;
pub mod hashes;
pub mod parse;
pub mod presets;
pub mod profile;
pub mod script;
pub mod text;

pub use codec::AddressCodec;
pub use hashes::{BitcoinHashes, HashScheme};
pub use parse::{ParseError, Parsed, StandardParser, TextFamily, TextParser};
pub use profile::{FormatProfile, FormatProfileBuilder, Prefix, PrefixKind};
pub use script::{Script, ScriptClassifier, ScriptInfo, StandardClassifier};
pub use text::{EncodedText, Unencodable, SENTINEL};
