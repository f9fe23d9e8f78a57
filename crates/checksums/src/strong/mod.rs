//! Strong (cryptographic-style) digests.
//!
//! Every algorithm in this module implements [`StrongDigest`], which lets
//! helpers such as [`crate::hash_reader`] and the batch API drive hashers
//! generically.

mod validus;

pub use validus::{BLOCK_LEN, BLOCK_WORDS, BitCounter, PAD_MARKER, Validus, compress};

/// Streaming digest with a fixed output.
pub trait StrongDigest: Sized {
    /// Finalised output type.
    type Digest: Copy + Eq + std::fmt::Debug;

    /// Length of [`Self::Digest`] in octets.
    const DIGEST_LEN: usize;

    /// Creates a hasher with an empty state.
    fn new() -> Self;

    /// Feeds additional bytes into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> Self::Digest;

    /// Computes the digest of `data` in one shot.
    fn digest(data: &[u8]) -> Self::Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}
