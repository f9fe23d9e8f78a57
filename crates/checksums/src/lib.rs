#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fingerprint;
mod source;
pub mod strong;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub mod parallel;

pub use fingerprint::{Fingerprint, FingerprintParseError};
pub use source::{FILE_BLOCK_SIZE, HashError, MAX_STRING_LEN, hash_file, hash_reader, hash_string};
pub use strong::{StrongDigest, Validus};
