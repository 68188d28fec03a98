use digest::Digest;
use sha2::Sha256;

use crate::hashes::DigestWriter;

/// A single-round sha2 digest. Used for witness script hashes.
pub type Sha256Digest = [u8; 32];

/// A struct that exposes a single-round Sha256 `Write` interface.
#[derive(Default)]
pub struct Sha256Writer {
    internal: Sha256,
}

impl_digest_write!(Sha256Writer);

impl DigestWriter for Sha256Writer {
    type Digest = Sha256Digest;

    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.internal, data);
    }

    fn finish(self) -> Sha256Digest {
        let result = self.internal.finalize();
        let mut digest = Sha256Digest::default();
        digest[..].copy_from_slice(&result[..]);
        digest
    }
}

/// Hash data with a single round of sha2
pub fn sha256(preimage: &[u8]) -> Sha256Digest {
    Sha256Writer::digest(preimage)
}
