//! Contains simplified access to the `bech32` and `base58check` encoders/decoders used by
//! addresses and keys. Also defines common encoder errors.

/// Base58check framing over `bs58`
pub mod base58;

/// Segwit framing over `bech32`
pub mod segwit;

pub use base58::*;
pub use segwit::*;

use thiserror::Error;

/// Errors that can be returned while decoding (or strictly encoding) text forms.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Bubbled up error from bs58 library
    #[error(transparent)]
    Base58(#[from] bs58::decode::Error),

    /// Base58check payload failed checksum verification
    #[error("Checksum mismatch on b58 deserialization")]
    BadChecksum,

    /// Base58 payload was too short to contain a checksum
    #[error("Base58check payload of {0} bytes is too short to contain a checksum")]
    PayloadTooShort(usize),

    /// Bubbled up error from bech32 library
    #[error("BechError: {:?}", .0)]
    Bech32(#[from] bech32::Error),

    /// Bech32 HRP does not match the current network.
    #[error("Bech32 HRP does not match. \nGot {:?} expected {:?} Hint: Is this address for another network?", got, expected)]
    WrongHrp {
        /// The actual HRP.
        got: String,
        /// The expected HRP.
        expected: String,
    },

    /// Invalid Segwit Version
    #[error("SegwitVersionError: {:?}", .0)]
    SegwitVersion(u8),

    /// Witness program length is not allowed for its version
    #[error("Witness program of {len} bytes is invalid for version {version}")]
    ProgramLength {
        /// The witness version
        version: u8,
        /// The program length
        len: usize,
    },

    /// The checksum variant does not match the witness version (bech32 for v0, bech32m after)
    #[error("Bech32 checksum variant does not match the witness version")]
    WrongVariant,

    /// Segwit string carried no witness version
    #[error("Segwit string carries no data")]
    EmptyData,
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;
