use digest::Digest;
use sha2::Sha256;

use crate::hashes::DigestWriter;

/// A bitcoin-style double-sha2 digest.
pub type Hash256Digest = [u8; 32];

/// Double-sha2 behind a `Write` interface. Used for base58check checksums.
///
/// ```
/// use std::io::Write;
/// use coins_addr_core::hashes::{hash256, DigestWriter, Hash256Writer};
///
/// let mut w = Hash256Writer::default();
/// w.write_all(b"coins").unwrap();
/// w.write_all(b"-addr").unwrap();
/// assert_eq!(w.finish(), hash256(b"coins-addr"));
/// ```
#[derive(Default)]
pub struct Hash256Writer {
    internal: Sha256,
}

impl_digest_write!(Hash256Writer);

impl DigestWriter for Hash256Writer {
    type Digest = Hash256Digest;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.internal, data);
    }

    fn finish(self) -> Hash256Digest {
        let first = self.internal.finalize();
        let second = Sha256::digest(first);
        let mut digest = Hash256Digest::default();
        digest[..].copy_from_slice(&second[..]);
        digest
    }
}

/// Hash data with bitcoin's double-sha2
pub fn hash256(preimage: &[u8]) -> Hash256Digest {
    Hash256Writer::digest(preimage)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn it_ignores_flush() {
        let mut w = Hash256Writer::default();
        w.write_all(&[0]).unwrap();
        w.flush().unwrap();
        assert_eq!(
            hex::encode(w.finish()),
            "1406e05881e299367766d313e26c05564ec91bf721d31726bd6e46e60689539a"
        );
    }

    #[test]
    fn it_hashes_the_empty_string() {
        assert_eq!(
            hex::encode(hash256(&[])),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }
}
