//! Batch hashing across a rayon thread pool.
//!
//! Each input is hashed by its own [`Validus`] state; no hasher is ever shared
//! between threads. Results are returned in input order.
//!
//! ```
//! use checksums::parallel::digest_batch;
//!
//! let fingerprints = digest_batch(&[b"abc".as_slice(), b"ABC".as_slice()]);
//! assert_eq!(
//!     fingerprints[1].to_string(),
//!     "9c2730919216af67c3d9a3254401ade85920b7c1d707c65d"
//! );
//! ```

use std::path::Path;

use rayon::prelude::*;

use crate::strong::Validus;
use crate::{Fingerprint, HashError, hash_file};

/// Computes the fingerprint of every buffer in parallel.
pub fn digest_batch<T>(inputs: &[T]) -> Vec<Fingerprint>
where
    T: AsRef<[u8]> + Sync,
{
    logging::trace_hash!(inputs = inputs.len(), "parallel digest batch");
    inputs
        .par_iter()
        .map(|input| Validus::digest(input.as_ref()))
        .collect()
}

/// Hashes every file in parallel.
///
/// A failure on one path does not affect the others; each slot carries its own
/// result.
pub fn hash_files<P>(paths: &[P]) -> Vec<Result<Fingerprint, HashError>>
where
    P: AsRef<Path> + Sync,
{
    logging::trace_hash!(files = paths.len(), "parallel file batch");
    paths.par_iter().map(hash_file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn batch_preserves_input_order() {
        let inputs: Vec<Vec<u8>> = (0..64_usize)
            .map(|n| (0..n * 37).map(|i| i as u8).collect())
            .collect();

        let parallel = digest_batch(&inputs);
        let sequential: Vec<Fingerprint> =
            inputs.iter().map(|input| Validus::digest(input)).collect();

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn empty_batch_yields_nothing() {
        let inputs: [&[u8]; 0] = [];
        assert!(digest_batch(&inputs).is_empty());
    }

    #[test]
    fn file_batch_reports_failures_per_slot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let present = dir.path().join("present.txt");
        fs::write(&present, b"validus").expect("write fixture");
        let missing = dir.path().join("missing.txt");

        let results = hash_files(&[present.clone(), missing.clone(), present]);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().expect("present file hashes").to_string(),
            "a16bbad7293dac2904cc18076636125c2c68c29ccffa779d"
        );
        let err = results[1].as_ref().unwrap_err();
        assert_eq!(err.path(), Some(missing.as_path()));
        assert_eq!(results[0].as_ref().ok(), results[2].as_ref().ok());
    }
}
