//! Hashing helpers for readers, files and strings.
//!
//! Every helper owns a fresh [`Validus`] state, feeds it through the streaming
//! API and finalises it once. An I/O failure drops the partially-updated state
//! and surfaces the error; no fingerprint is produced for a partial read.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Fingerprint;
use crate::strong::{StrongDigest, Validus};

/// Read chunk size used by [`hash_reader`] and [`hash_file`].
pub const FILE_BLOCK_SIZE: usize = 8192;

/// Maximum number of octets of a string that [`hash_string`] feeds to the hasher.
pub const MAX_STRING_LEN: usize = 2048;

/// Errors raised while hashing an input source.
#[derive(Debug, Error)]
pub enum HashError {
    /// The file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading from the source failed part-way through.
    #[error("failed to read {}: {source}", display_source(.path.as_deref()))]
    Read {
        /// Path of the source, when it is a file.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl HashError {
    /// Path associated with the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Open { path, .. } => Some(path),
            Self::Read { path, .. } => path.as_deref(),
        }
    }

    /// Kind of the underlying I/O error.
    #[must_use]
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Read { source, .. } => source.kind(),
        }
    }

    fn with_path(self, path: &Path) -> Self {
        match self {
            Self::Read { source, .. } => Self::Read {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        }
    }
}

fn display_source(path: Option<&Path>) -> String {
    path.map_or_else(|| "input".to_owned(), |path| path.display().to_string())
}

/// Hashes everything `reader` yields until end of input.
///
/// Reads are issued in [`FILE_BLOCK_SIZE`] chunks. Interrupted reads are
/// retried.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// let fingerprint = checksums::hash_reader(Cursor::new(b"abc"))?;
/// assert_eq!(
///     fingerprint.to_string(),
///     "f7ffabe54ddb09a93ebde51b90d1796a63ea3cc1a5ed093f"
/// );
/// # Ok::<(), checksums::HashError>(())
/// ```
pub fn hash_reader<R: Read>(reader: R) -> Result<Fingerprint, HashError> {
    digest_reader::<Validus, R>(reader)
}

/// Drives any [`StrongDigest`] over a reader.
fn digest_reader<D: StrongDigest, R: Read>(mut reader: R) -> Result<D::Digest, HashError> {
    let mut hasher = D::new();
    let mut buffer = [0_u8; FILE_BLOCK_SIZE];
    let mut total = 0_u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                tracing::warn!(
                    target: "validus::hash",
                    octets = total,
                    error = %source,
                    "read failed; discarding partial state"
                );
                return Err(HashError::Read { path: None, source });
            }
        };
        hasher.update(&buffer[..read]);
        total += read as u64;
    }

    logging::trace_hash!(octets = total, "reader hashed");
    Ok(hasher.finalize())
}

/// Hashes the contents of the file at `path`.
///
/// # Examples
///
/// ```no_run
/// let fingerprint = checksums::hash_file("Cargo.toml")?;
/// println!("{fingerprint}");
/// # Ok::<(), checksums::HashError>(())
/// ```
pub fn hash_file<P: AsRef<Path>>(path: P) -> Result<Fingerprint, HashError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| {
        tracing::warn!(
            target: "validus::hash",
            path = %path.display(),
            error = %source,
            "open failed"
        );
        HashError::Open {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let fingerprint = hash_reader(file).map_err(|error| error.with_path(path))?;
    logging::trace_hash!(path = %path.display(), %fingerprint, "file hashed");
    Ok(fingerprint)
}

/// Hashes the UTF-8 octets of `text`, truncated to [`MAX_STRING_LEN`] octets.
#[must_use]
pub fn hash_string(text: &str) -> Fingerprint {
    let octets = text.as_bytes();
    let used = octets.len().min(MAX_STRING_LEN);
    if used < octets.len() {
        tracing::debug!(
            target: "validus::hash",
            len = octets.len(),
            used,
            "string truncated"
        );
    }
    Validus::digest(&octets[..used])
}
