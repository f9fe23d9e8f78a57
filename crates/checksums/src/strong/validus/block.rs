//! Octet/word conversion for 192-octet blocks.
//!
//! The compression function operates on 32-bit words, and the algorithm defines
//! each word as four consecutive octets with the first octet least
//! significant. Words are always assembled from octets here, so the result
//! does not depend on host byte order or on the alignment of the caller's
//! buffer.

use super::counter::BitCounter;

/// Size of a message block in octets.
pub const BLOCK_LEN: usize = 192;

/// Number of 32-bit words in a message block.
pub const BLOCK_WORDS: usize = BLOCK_LEN / 4;

/// First octet of the length block.
pub const PAD_MARKER: u8 = 0xAA;

const HIGH_LEN_OFFSET: usize = BLOCK_LEN - 8;
const LOW_LEN_OFFSET: usize = BLOCK_LEN - 4;

/// Converts a block of octets into the word layout consumed by the compression
/// function.
#[inline]
pub(super) fn load_words(block: &[u8; BLOCK_LEN]) -> [u32; BLOCK_WORDS] {
    let mut words = [0_u32; BLOCK_WORDS];
    for (word, octets) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([octets[0], octets[1], octets[2], octets[3]]);
    }
    words
}

/// Builds the final block that encodes the message length.
///
/// Layout: the marker octet, zeros, then the high and low halves of the bit
/// count in the last eight octets. Each half is stored in the same octet order
/// [`load_words`] reads, so words 46 and 47 of the block equal the high and
/// low halves.
pub(super) fn length_block(counter: &BitCounter) -> [u8; BLOCK_LEN] {
    let mut block = [0_u8; BLOCK_LEN];
    block[0] = PAD_MARKER;
    block[HIGH_LEN_OFFSET..LOW_LEN_OFFSET].copy_from_slice(&counter.high().to_le_bytes());
    block[LOW_LEN_OFFSET..].copy_from_slice(&counter.low().to_le_bytes());
    block
}
