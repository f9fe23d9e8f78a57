//! File and reader hashing against temporary fixtures.

use std::fs;
use std::io::Write;

use checksums::strong::Validus;
use checksums::{FILE_BLOCK_SIZE, HashError, hash_file};
use tempfile::{NamedTempFile, tempdir};

#[test]
fn file_contents_hash_like_in_memory_data() {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(b"hello, world").expect("write fixture");
    file.flush().expect("flush fixture");

    let fingerprint = hash_file(file.path()).expect("file hashes");
    assert_eq!(
        fingerprint.to_string(),
        "a54b0badf8061b9b6f14c5420d2bd8239fbb7f6750b67af7"
    );
}

#[test]
fn empty_file_hashes_like_empty_message() {
    let file = NamedTempFile::new().expect("temp file");
    assert_eq!(
        hash_file(file.path()).expect("empty file hashes").to_string(),
        "d3f0ad337979091769135e44eb28aeda40e5423dd2e956e7"
    );
}

#[test]
fn multi_chunk_file_matches_one_shot_digest() {
    // Spans several read chunks and ends mid-block.
    let data: Vec<u8> = (0..FILE_BLOCK_SIZE * 5 + 101)
        .map(|i| (i * 31 + 7) as u8)
        .collect();
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("payload.bin");
    fs::write(&path, &data).expect("write fixture");

    assert_eq!(
        hash_file(&path).expect("file hashes"),
        Validus::digest(&data)
    );
}

#[test]
fn directory_is_not_hashable() {
    let dir = tempdir().expect("tempdir");
    let err = hash_file(dir.path()).expect_err("directories cannot be read");
    assert_eq!(err.path(), Some(dir.path()));
    assert!(err.to_string().contains(&dir.path().display().to_string()));
}

#[test]
fn missing_file_error_names_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nope");
    match hash_file(&path) {
        Err(HashError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected open error, got {other:?}"),
    }
}
