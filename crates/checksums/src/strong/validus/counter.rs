/// Running message length in bits, kept as two 32-bit halves.
///
/// The halves are what the length block encodes, so the counter stores them
/// directly instead of a `u64` that would have to be split on every finalise.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BitCounter {
    low: u32,
    high: u32,
}

impl BitCounter {
    /// Creates a counter with zero bits recorded.
    #[must_use]
    pub const fn new() -> Self {
        Self { low: 0, high: 0 }
    }

    /// Builds a counter from explicit halves.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) const fn from_parts(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// Records `len` additional octets.
    ///
    /// Octets beyond `2^61` wrap, matching the 64-bit counter of the reference
    /// algorithm.
    pub fn add_octets(&mut self, len: usize) {
        let len = len as u64;
        let shifted_in = (len << 3) as u32;

        self.high = self.high.wrapping_add((len >> 29) as u32);
        self.low = self.low.wrapping_add(shifted_in);
        if self.low < shifted_in {
            self.high = self.high.wrapping_add(1);
        }
    }

    /// Low 32 bits of the bit count.
    #[must_use]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// High 32 bits of the bit count.
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// Total bit count as a single value.
    #[must_use]
    pub const fn bits(&self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }
}
