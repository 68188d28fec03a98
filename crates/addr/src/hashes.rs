//! The digests an `AddressCodec` applies to keys and scripts. These are a network convention,
//! so they sit behind the `HashScheme` trait.

use coins_addr_core::hashes::{hash160, sha256, Hash160Digest, Sha256Digest};

/// The digests used to commit to public keys and scripts in addresses.
pub trait HashScheme {
    /// The 20-byte digest used for pubkey hashes and legacy script hashes.
    fn hash160(preimage: &[u8]) -> Hash160Digest;

    /// The 32-byte digest used for witness script hashes.
    fn witness_hash(preimage: &[u8]) -> Sha256Digest;
}

/// Bitcoin's digests: `ripemd160(sha256(x))` and a single round of `sha256`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BitcoinHashes;

impl HashScheme for BitcoinHashes {
    fn hash160(preimage: &[u8]) -> Hash160Digest {
        hash160(preimage)
    }

    fn witness_hash(preimage: &[u8]) -> Sha256Digest {
        sha256(preimage)
    }
}
