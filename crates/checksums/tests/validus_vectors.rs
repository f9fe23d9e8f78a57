//! Known-answer tests for the Validus hasher.
//!
//! This module validates the implementation against:
//! 1. The published reference fingerprints
//! 2. Messages that straddle block boundaries
//! 3. Long and repetitive inputs
//! 4. Single-octet input changes (avalanche)

use checksums::strong::{BLOCK_LEN, StrongDigest, Validus};
use checksums::{Fingerprint, hash_string};

/// Convert a byte slice to a lowercase hex string.
fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(&mut out, "{byte:02x}").expect("write! to String cannot fail");
    }
    out
}

/// Octets `0, 1, 2, ...` wrapping at 256.
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

// ============================================================================
// Published Reference Fingerprints
// ============================================================================

mod reference_vectors {
    use super::*;

    const VECTORS: [(&str, &str); 8] = [
        ("", "d3f0ad337979091769135e44eb28aeda40e5423dd2e956e7"),
        ("abc", "f7ffabe54ddb09a93ebde51b90d1796a63ea3cc1a5ed093f"),
        ("ABC", "9c2730919216af67c3d9a3254401ade85920b7c1d707c65d"),
        ("validus", "a16bbad7293dac2904cc18076636125c2c68c29ccffa779d"),
        ("1111111", "4f7879dfe986f48e047190fe0961783a177b6dc19d5f30d1"),
        ("1111112", "5f26b88dd4c24f7de828d3ed18dc0a0545f26eb0c0b09061"),
        ("hello, world", "a54b0badf8061b9b6f14c5420d2bd8239fbb7f6750b67af7"),
        ("dlrow ,olleh", "3a39f172c900b9d86efe31ddc065bdf9e02c483750f9af86"),
    ];

    #[test]
    fn one_shot_digest_matches() {
        for (input, expected) in VECTORS {
            assert_eq!(
                Validus::digest(input.as_bytes()).to_string(),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn octet_form_matches_hex_form() {
        for (input, expected) in VECTORS {
            let bytes = Validus::digest(input.as_bytes()).to_bytes();
            assert_eq!(to_hex(&bytes), expected);
        }
    }

    #[test]
    fn string_helper_matches() {
        for (input, expected) in VECTORS {
            assert_eq!(hash_string(input).to_string(), expected);
        }
    }

    #[test]
    fn parsed_fingerprint_equals_computed() {
        for (input, expected) in VECTORS {
            let parsed: Fingerprint = expected.parse().expect("valid fingerprint");
            assert_eq!(parsed, Validus::digest(input.as_bytes()));
        }
    }

    #[test]
    fn hasher_is_usable_through_trait() {
        fn via_trait<D: StrongDigest>(data: &[u8]) -> D::Digest {
            D::digest(data)
        }

        let fingerprint = via_trait::<Validus>(b"abc");
        assert_eq!(
            fingerprint.to_string(),
            "f7ffabe54ddb09a93ebde51b90d1796a63ea3cc1a5ed093f"
        );
        assert_eq!(<Validus as StrongDigest>::DIGEST_LEN, 24);
    }
}

// ============================================================================
// Block Boundaries
// ============================================================================

mod block_boundaries {
    use super::*;

    const BOUNDARY_VECTORS: [(usize, &str); 8] = [
        (1, "a54db2d850e5d898fda3eb517a63ff691564d5ec72a0677a"),
        (191, "fabb8fc9aa99e02cb3da6fcab69e32b6157ebfdca109698b"),
        (192, "e45db1e7363ccea3a889bad33c8017eb562003137afb4b5b"),
        (193, "2b90a83c4463aeaa6c4ffcc2443bc694656b81c9dc15d54f"),
        (383, "6c7e982f38b212de8c3af5ec7c049ed88928d6040cea6c32"),
        (384, "cea0ed5ad73bacd735b38be86c475003a0cb00708a1f1a62"),
        (385, "a5c62eee260b628eb351fe9963aa6d36553bb953c6af6e66"),
        (1000, "11be036886ca1634bb1db72228eb85fa27fe44c06f97ad4d"),
    ];

    #[test]
    fn pattern_lengths_around_block_edges() {
        for (len, expected) in BOUNDARY_VECTORS {
            assert_eq!(
                Validus::digest(&pattern(len)).to_string(),
                expected,
                "length {len}"
            );
        }
    }

    #[test]
    fn block_edge_lengths_stream_octet_by_octet() {
        for (len, expected) in BOUNDARY_VECTORS {
            let mut hasher = Validus::new();
            for octet in pattern(len) {
                hasher.update(&[octet]);
            }
            assert_eq!(hasher.finalize().to_string(), expected, "length {len}");
        }
    }

    #[test]
    fn split_exactly_on_block_edge() {
        let data = pattern(2 * BLOCK_LEN + 1);
        let mut hasher = Validus::new();
        hasher.update(&data[..BLOCK_LEN]);
        hasher.update(&data[BLOCK_LEN..2 * BLOCK_LEN]);
        hasher.update(&data[2 * BLOCK_LEN..]);
        assert_eq!(
            hasher.finalize().to_string(),
            "a5c62eee260b628eb351fe9963aa6d36553bb953c6af6e66"
        );
    }

    #[test]
    fn adjacent_lengths_differ() {
        let shorter = Validus::digest(&pattern(BLOCK_LEN - 1));
        let exact = Validus::digest(&pattern(BLOCK_LEN));
        let longer = Validus::digest(&pattern(BLOCK_LEN + 1));
        assert_ne!(shorter, exact);
        assert_ne!(exact, longer);
    }

    #[test]
    fn trailing_zeros_change_the_fingerprint() {
        // The zero-filled tail of a partial block is distinguished by the
        // length block.
        let mut padded = b"abc".to_vec();
        padded.resize(BLOCK_LEN, 0);
        assert_ne!(Validus::digest(b"abc"), Validus::digest(&padded));
    }
}

// ============================================================================
// Long Inputs
// ============================================================================

mod long_inputs {
    use super::*;

    #[test]
    fn thousand_a() {
        assert_eq!(
            Validus::digest(&[b'a'; 1000]).to_string(),
            "8d6f8c79a991af18c75d46a61d00a80fbcc1bc05a8a31ff6"
        );
    }

    #[test]
    fn hundred_thousand_ee() {
        let data = vec![0xEE_u8; 100_000];
        assert_eq!(
            Validus::digest(&data).to_string(),
            "babd3e072523b10a8891b8581596ab73d3c1be90bea96210"
        );
    }

    #[test]
    fn sentences() {
        assert_eq!(
            Validus::digest(b"The quick brown fox jumps over the lazy dog").to_string(),
            "9bf7c1f8d06f192d0fd10c8a3c0b4adb95fe7726c936c119"
        );
        assert_eq!(
            Validus::digest(b"hash function").to_string(),
            "65f6674726425f9910f48c93812e616aaba52726761900c3"
        );
    }
}

// ============================================================================
// Avalanche
// ============================================================================

mod avalanche {
    use super::*;

    fn differing_bits(a: Fingerprint, b: Fingerprint) -> u32 {
        a.words()
            .iter()
            .zip(b.words())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum()
    }

    #[test]
    fn last_character_change() {
        let original = Validus::digest(b"hello, world");
        let changed = Validus::digest(b"hello, worle");
        assert_eq!(
            changed.to_string(),
            "98502307fa5197d8ac2cea7c969ba5c264cc260ee3b97820"
        );
        let bits = differing_bits(original, changed);
        assert!((48..=144).contains(&bits), "{bits} bits differ");
    }

    #[test]
    fn every_single_bit_flip_changes_many_words() {
        let base = pattern(100);
        let reference = Validus::digest(&base);
        for bit in 0..base.len() * 8 {
            let mut flipped = base.clone();
            flipped[bit / 8] ^= 1 << (bit % 8);
            let changed = Validus::digest(&flipped);
            let words_changed = reference
                .words()
                .iter()
                .zip(changed.words())
                .filter(|(x, y)| **x != *y)
                .count();
            assert!(words_changed >= 4, "bit {bit} changed {words_changed} words");
        }
    }
}
