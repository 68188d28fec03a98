use std::io::Write;

/// A hasher exposing a `Write` interface. Writing more than once updates the
/// hasher. Call `finish` to consume the writer and produce the digest.
pub trait DigestWriter: Default + Write {
    /// The fixed-size digest output
    type Digest;

    /// Feed bytes to the hasher.
    fn update(&mut self, data: &[u8]);

    /// Consume the writer and produce the digest.
    fn finish(self) -> Self::Digest;

    /// Hash a preimage in one shot.
    fn digest(preimage: &[u8]) -> Self::Digest {
        let mut w = Self::default();
        w.update(preimage);
        w.finish()
    }
}

/// Implement `std::io::Write` by passing through to `DigestWriter::update`
macro_rules! impl_digest_write {
    ($writer:ty) => {
        impl std::io::Write for $writer {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                $crate::hashes::DigestWriter::update(self, buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
    };
}
