//! Streaming Validus hasher.
//!
//! Validus produces a 192-bit fingerprint from 192-octet blocks. Each block is
//! folded into six accumulator words by a four-round compression function; the
//! message is closed by one extra block carrying a marker octet and the 64-bit
//! bit length.
//!
//! Input may be supplied in arbitrarily sized pieces. Trailing octets that do
//! not fill a block are held back until more input arrives or the hasher is
//! finalised, so the fingerprint depends only on the concatenated input.

mod block;
mod counter;
mod schedule;

use std::fmt;

use super::StrongDigest;
use crate::Fingerprint;

pub use block::{BLOCK_LEN, BLOCK_WORDS, PAD_MARKER};
pub use counter::BitCounter;

use block::{length_block, load_words};
use schedule::{INITIAL_STATE, SCHEDULE, STEPS_PER_ROUND, Step};

/// Number of accumulator registers.
const REGISTERS: usize = 6;

/// Register written by the first step of every round (`d`).
const FIRST_TARGET: usize = 3;

/// Streaming Validus hasher.
///
/// # Examples
///
/// ```
/// use checksums::strong::Validus;
///
/// let mut hasher = Validus::new();
/// hasher.update(b"hello, ");
/// hasher.update(b"world");
/// assert_eq!(
///     hasher.finalize().to_string(),
///     "a54b0badf8061b9b6f14c5420d2bd8239fbb7f6750b67af7"
/// );
/// ```
#[derive(Clone)]
pub struct Validus {
    state: [u32; REGISTERS],
    counter: BitCounter,
    buffer: [u8; BLOCK_LEN],
    buffered: usize,
}

impl fmt::Debug for Validus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validus")
            .field("bits", &self.counter.bits())
            .field("buffered", &self.buffered)
            .finish_non_exhaustive()
    }
}

impl Default for Validus {
    fn default() -> Self {
        Self::new()
    }
}

impl Validus {
    /// Creates a hasher loaded with the initial accumulator words.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            counter: BitCounter::new(),
            buffer: [0; BLOCK_LEN],
            buffered: 0,
        }
    }

    /// Returns the hasher to its freshly constructed state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feeds additional bytes into the digest state.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.counter.add_octets(data.len());
        let mut data = data;

        if self.buffered > 0 {
            let take = (BLOCK_LEN - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_LEN {
                return;
            }
            compress(&mut self.state, &load_words(&self.buffer));
            self.buffered = 0;
        }

        let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
        for block in blocks {
            compress(&mut self.state, &load_words(block));
        }

        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Number of message bits fed so far.
    #[must_use]
    pub const fn bit_count(&self) -> u64 {
        self.counter.bits()
    }

    /// Finalises the digest and returns the 192-bit fingerprint.
    ///
    /// A held-back partial block is zero-filled and compressed first, then the
    /// length block is compressed. The length block is always appended, even
    /// when the message length is a multiple of [`BLOCK_LEN`].
    #[must_use]
    pub fn finalize(mut self) -> Fingerprint {
        if self.buffered > 0 {
            self.buffer[self.buffered..].fill(0);
            compress(&mut self.state, &load_words(&self.buffer));
        }

        compress(&mut self.state, &load_words(&length_block(&self.counter)));
        Fingerprint::from_words(self.state)
    }

    /// Convenience helper that computes the fingerprint of `data` in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Fingerprint {
        <Self as StrongDigest>::digest(data)
    }
}

/// Folds one block into the accumulator.
///
/// The six accumulator words are copied into working registers, mixed by
/// 4 × 48 steps, and added back word by word.
pub fn compress(accumulator: &mut [u32; REGISTERS], words: &[u32; BLOCK_WORDS]) {
    let mut regs = *accumulator;

    run_round(&mut regs, words, &SCHEDULE[0], |a, b, c, d, e| {
        (a & b) ^ (c & d) ^ e
    });
    run_round(&mut regs, words, &SCHEDULE[1], |a, b, c, d, e| {
        (a & b) ^ b ^ (c & d) ^ e
    });
    run_round(&mut regs, words, &SCHEDULE[2], |a, b, c, d, e| {
        (a & (b ^ c)) ^ (!d & e) ^ c
    });
    run_round(&mut regs, words, &SCHEDULE[3], |a, b, c, d, e| {
        (a & b) ^ (c & (d ^ e)) ^ e
    });

    for (acc, reg) in accumulator.iter_mut().zip(regs) {
        *acc = acc.wrapping_add(reg);
    }
}

#[inline(always)]
fn run_round<M>(
    regs: &mut [u32; REGISTERS],
    words: &[u32; BLOCK_WORDS],
    steps: &[Step; STEPS_PER_ROUND],
    mixer: M,
) where
    M: Fn(u32, u32, u32, u32, u32) -> u32,
{
    for (index, step) in steps.iter().enumerate() {
        // The target walks backwards d, c, b, a, f, e; the sources are the
        // five registers preceding it.
        let target = (FIRST_TARGET + REGISTERS - index % REGISTERS) % REGISTERS;
        let back = |n: usize| regs[(target + REGISTERS - n) % REGISTERS];
        let mixed = mixer(back(1), back(2), back(3), back(4), back(5));

        let word = words[step.word];
        let t = regs[target]
            .wrapping_add(mixed)
            .wrapping_add(word.wrapping_add(step.constant).rotate_left(step.rotl));
        regs[target] = t.wrapping_add(word).rotate_right(step.rotr);
    }
}

impl StrongDigest for Validus {
    type Digest = Fingerprint;
    const DIGEST_LEN: usize = Fingerprint::LEN;

    fn new() -> Self {
        Validus::new()
    }

    fn update(&mut self, data: &[u8]) {
        Validus::update(self, data);
    }

    fn finalize(self) -> Self::Digest {
        Validus::finalize(self)
    }
}

impl digest::HashMarker for Validus {}

impl digest::OutputSizeUser for Validus {
    type OutputSize = digest::consts::U24;
}

impl digest::Update for Validus {
    fn update(&mut self, data: &[u8]) {
        Validus::update(self, data);
    }
}

impl digest::FixedOutput for Validus {
    fn finalize_into(self, out: &mut digest::Output<Self>) {
        out.copy_from_slice(&Validus::finalize(self).to_bytes());
    }
}

impl digest::Reset for Validus {
    fn reset(&mut self) {
        Validus::reset(self);
    }
}
