//! Byte-position table
//!
//! Maps the significance of each byte of a 64-bit value to its physical
//! offset inside the 8-byte window. The table is computed once per
//! endianness (in a `const` context) and every byte read or write of the
//! crate goes through it.

use crate::primitives::Words;

/// Byte order of a variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Most-significant byte at the lowest offset.
    Big,
    /// Least-significant byte at the lowest offset.
    Little,
}

/// Fixed mapping from byte significance to physical offset.
///
/// `high` and `low` are the offsets (0 or 4) of the two 32-bit halves.
/// `within[i]` is the offset, inside a half, of its `i`-th most
/// significant byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ByteTable {
    high: usize,
    low: usize,
    within: [usize; 4],
}

impl ByteTable {
    /// Derives the table for `endian`.
    pub const fn new(endian: Endian) -> Self {
        match endian {
            Endian::Big => Self {
                high: 0,
                low: 4,
                within: [0, 1, 2, 3],
            },
            Endian::Little => Self {
                high: 4,
                low: 0,
                within: [3, 2, 1, 0],
            },
        }
    }

    /// Offset of the high half inside the window.
    pub const fn high(&self) -> usize {
        self.high
    }

    /// Offset of the low half inside the window.
    pub const fn low(&self) -> usize {
        self.low
    }

    /// Offset inside the window of the byte with the given significance.
    ///
    /// Significance `0` is the most significant byte of the 64-bit value,
    /// `7` the least significant.
    pub const fn offset_of(&self, significance: usize) -> usize {
        let half = if significance < 4 { self.high } else { self.low };

        half + self.within[significance % 4]
    }

    /// Reads both words of the window starting at `offset`.
    pub fn read(&self, bytes: &[u8], offset: usize) -> Words {
        Words::new(
            self.read_word(bytes, offset + self.high),
            self.read_word(bytes, offset + self.low),
        )
    }

    /// Writes both words into the window starting at `offset`.
    pub fn write(&self, bytes: &mut [u8], offset: usize, words: Words) {
        self.write_word(bytes, offset + self.high, words.high);
        self.write_word(bytes, offset + self.low, words.low);
    }

    /// Writes eight bytes given from most to least significant.
    pub fn write_significant(&self, bytes: &mut [u8], offset: usize, significant: [u8; 8]) {
        for (significance, byte) in significant.into_iter().enumerate() {
            bytes[offset + self.offset_of(significance)] = byte;
        }
    }

    #[cfg(not(feature = "speed"))]
    fn read_word(&self, bytes: &[u8], base: usize) -> u32 {
        self.within
            .iter()
            .fold(0u32, |acc, &pos| (acc << 8) | bytes[base + pos] as u32)
    }

    #[cfg(feature = "speed")]
    fn read_word(&self, bytes: &[u8], base: usize) -> u32 {
        let [p0, p1, p2, p3] = self.within;

        ((bytes[base + p0] as u32) << 24)
            | ((bytes[base + p1] as u32) << 16)
            | ((bytes[base + p2] as u32) << 8)
            | (bytes[base + p3] as u32)
    }

    #[cfg(not(feature = "speed"))]
    fn write_word(&self, bytes: &mut [u8], base: usize, word: u32) {
        for (&pos, byte) in self.within.iter().zip(word.to_be_bytes()) {
            bytes[base + pos] = byte;
        }
    }

    #[cfg(feature = "speed")]
    fn write_word(&self, bytes: &mut [u8], base: usize, word: u32) {
        let [p0, p1, p2, p3] = self.within;

        bytes[base + p0] = (word >> 24) as u8;
        bytes[base + p1] = (word >> 16) as u8;
        bytes[base + p2] = (word >> 8) as u8;
        bytes[base + p3] = word as u8;
    }
}
