//! Sequential MSB-first bit reader over a fixed byte buffer.
//!
//! Every decode call constructs its own cursor scoped to that call. Sharing
//! one cursor across concurrent decodes interleaves reads and corrupts
//! results, so the cursor is a plain value type with no global state.

/// Forward-only bit cursor over a borrowed byte slice.
#[derive(Debug)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> BitCursor<'a> {
        BitCursor { data, position: 0 }
    }

    /// Rewind to the start of the buffer.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Bits left before the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Read `count` bits (at most 32) as an unsigned integer, MSB first.
    ///
    /// Reading past the end of the buffer is a caller bug; the field
    /// layouts all fit the 56-bit payload exactly.
    pub fn read_bits(&mut self, count: u32) -> u32 {
        debug_assert!(count <= 32);
        debug_assert!(count as usize <= self.remaining());
        let mut result = 0u32;
        for _ in 0..count {
            let byte = self.data[self.position / 8];
            let bit = (byte >> (7 - (self.position % 8))) & 1;
            result = (result << 1) | bit as u32;
            self.position += 1;
        }
        result
    }

    /// Read a single bit as a boolean.
    pub fn read_bit(&mut self) -> bool {
        self.read_bits(1) == 1
    }

    /// Advance past `count` bits without decoding them.
    pub fn skip(&mut self, count: u32) {
        debug_assert!(count as usize <= self.remaining());
        self.position += count as usize;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
