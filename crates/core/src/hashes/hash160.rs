use digest::Digest;
use ripemd::Ripemd160;
use sha2::Sha256;

use crate::hashes::DigestWriter;

/// A bitcoin-style ripemd160(sha2) digest. Used for pubkey hashes and legacy script hashes.
pub type Hash160Digest = [u8; 20];

/// A struct that exposes a Bitcoin-style Hash160 `Write` interface. Input is fed to an internal
/// SHA2 instance, and the SHA2 output is hashed again with RIPEMD160 on `finish`.
#[derive(Default)]
pub struct Hash160Writer {
    internal: Sha256,
}

impl_digest_write!(Hash160Writer);

impl DigestWriter for Hash160Writer {
    type Digest = Hash160Digest;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.internal, data);
    }

    fn finish(self) -> Hash160Digest {
        let first = self.internal.finalize();
        let second = Ripemd160::digest(first);
        let mut digest = Hash160Digest::default();
        digest[..].copy_from_slice(&second[..]);
        digest
    }
}

/// Hash data with bitcoin's ripemd160(sha2)
pub fn hash160(preimage: &[u8]) -> Hash160Digest {
    Hash160Writer::digest(preimage)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn it_hashes_the_empty_string() {
        assert_eq!(
            hex::encode(hash160(&[])),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
    }

    #[test]
    fn it_hashes_compressed_pubkeys() {
        let pubkey =
            hex::decode("0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798")
                .unwrap();
        assert_eq!(
            hex::encode(hash160(&pubkey)),
            "751e76e8199196d454941c45d1b3a323f1433bd6"
        );

        // split writes produce the same digest
        let mut w = Hash160Writer::default();
        w.write_all(&pubkey[..10]).unwrap();
        w.write_all(&pubkey[10..]).unwrap();
        assert_eq!(w.finish(), hash160(&pubkey));
    }
}
