use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// 192-bit Validus fingerprint.
///
/// The six words are kept in accumulator order (`f0` first). Both the textual
/// and the octet forms put the most significant word first, with each word
/// written big-endian, so [`to_bytes`](Self::to_bytes) rendered as hex equals
/// the [`Display`](fmt::Display) output.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Fingerprint([u32; 6]);

impl Fingerprint {
    /// Fingerprint length in octets.
    pub const LEN: usize = 24;

    /// Fingerprint length in hexadecimal digits.
    pub const HEX_LEN: usize = Self::LEN * 2;

    /// Wraps six accumulator words.
    #[must_use]
    pub const fn from_words(words: [u32; 6]) -> Self {
        Self(words)
    }

    /// Returns the six fingerprint words, `f0` first.
    #[must_use]
    pub const fn words(&self) -> [u32; 6] {
        self.0
    }

    /// Returns the fingerprint as 24 octets.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0_u8; Self::LEN];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Rebuilds a fingerprint from its 24-octet form.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; Self::LEN]) -> Self {
        let mut words = [0_u32; 6];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
            *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Self(words)
    }
}

impl From<[u32; 6]> for Fingerprint {
    fn from(words: [u32; 6]) -> Self {
        Self::from_words(words)
    }
}

impl From<Fingerprint> for [u8; Fingerprint::LEN] {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.to_bytes()
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Error returned when parsing a fingerprint from text fails.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FingerprintParseError {
    /// The input does not contain exactly 48 characters.
    #[error("fingerprint must be {expected} hex digits, got {len}")]
    InvalidLength {
        /// Number of characters supplied.
        len: usize,
        /// Number of characters required.
        expected: usize,
    },
    /// The input contains a character that is not a hexadecimal digit.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit {
        /// Offending character.
        found: char,
        /// Zero-based character position.
        position: usize,
    },
}

impl FromStr for Fingerprint {
    type Err = FingerprintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::HEX_LEN {
            return Err(FingerprintParseError::InvalidLength {
                len,
                expected: Self::HEX_LEN,
            });
        }

        let mut words = [0_u32; 6];
        for (position, found) in s.chars().enumerate() {
            let nibble = found
                .to_digit(16)
                .ok_or(FingerprintParseError::InvalidDigit { found, position })?;
            let word = &mut words[position / 8];
            *word = (*word << 4) | nibble;
        }
        Ok(Self(words))
    }
}
