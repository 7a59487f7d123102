//! 64-bit word bit unpacker
//!
//! Mirrors [`crate::bitpacker::BitPacker`]: words are consumed one at a
//! time, MSB-first. At each code boundary the unpacker first checks
//! whether the next bits spell the 9-bit category-11 prefix, then
//! whether they spell the 8-bit sentinel, before falling back to the
//! remaining (mutually exclusive) category prefixes. Categories 0
//! through 10 are genuinely prefix-free; category 11's prefix is the
//! only one that shares its leading eight bits with the sentinel, which
//! is why it is special-cased ahead of the plain sentinel check.

use icf_core::{IcfError, IcfResult};

use crate::codebook::{decode_value, CATEGORIES};

const CATEGORY_11_PREFIX: u64 = 0b1_1111_1110;
const CATEGORY_11_PREFIX_LEN: u32 = 9;
const CATEGORY_11_PAYLOAD_LEN: u32 = 11;
const SENTINEL_PATTERN: u64 = 0xFF;
const SENTINEL_LEN: u32 = 8;

fn unexpected_eof() -> IcfError {
    IcfError::IoError(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "bit unpacker ran out of words before the block was fully decoded",
    ))
}

/// Reads category-coded values out of a sequence of 64-bit words.
pub struct BitUnpacker<'a> {
    words: &'a [u64],
    next_word: usize,
    window: u64,
    consumed: u32,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(words: &'a [u64]) -> IcfResult<Self> {
        let mut unpacker = Self { words, next_word: 0, window: 0, consumed: 64 };
        unpacker.load_next_word()?;
        Ok(unpacker)
    }

    fn bits_left(&self) -> u32 {
        64 - self.consumed
    }

    fn load_next_word(&mut self) -> IcfResult<()> {
        let word = *self.words.get(self.next_word).ok_or_else(unexpected_eof)?;
        self.window = word;
        self.next_word += 1;
        self.consumed = 0;
        Ok(())
    }

    /// Peek the next `n` bits without consuming them, or `None` if fewer
    /// than `n` bits remain in the current word (a code never spans a
    /// word boundary).
    fn peek(&self, n: u32) -> Option<u64> {
        if n == 0 || n > self.bits_left() {
            return None;
        }
        Some((self.window << self.consumed) >> (64 - n))
    }

    fn consume(&mut self, n: u32) {
        self.consumed += n;
    }

    fn read_bits(&mut self, n: u32) -> IcfResult<u64> {
        let bits = self.peek(n).ok_or_else(unexpected_eof)?;
        self.consume(n);
        Ok(bits)
    }

    /// Decode the next signed value, transparently skipping word-boundary
    /// sentinels and loading new words as needed.
    pub fn next_value(&mut self) -> IcfResult<i32> {
        loop {
            if self.bits_left() == 0 {
                self.load_next_word()?;
                continue;
            }

            if self.peek(CATEGORY_11_PREFIX_LEN) == Some(CATEGORY_11_PREFIX) {
                self.consume(CATEGORY_11_PREFIX_LEN);
                let payload = self.read_bits(CATEGORY_11_PAYLOAD_LEN)? as u32;
                return Ok(decode_value(11, payload));
            }

            if self.peek(SENTINEL_LEN) == Some(SENTINEL_PATTERN) {
                self.consume(SENTINEL_LEN);
                self.load_next_word()?;
                continue;
            }

            return self.decode_regular_category();
        }
    }

    /// Consume a block's terminating sentinel and discard whatever zero
    /// padding follows it in the current word, so the next call to
    /// [`Self::next_value`] starts a fresh block on a fresh word. Must be
    /// called exactly once after a block's 64 coefficients have been read.
    pub fn finish_block(&mut self) -> IcfResult<()> {
        let sentinel = self.read_bits(SENTINEL_LEN)?;
        debug_assert_eq!(sentinel, SENTINEL_PATTERN, "expected block-terminating sentinel");
        self.consumed = 64;
        Ok(())
    }

    fn decode_regular_category(&mut self) -> IcfResult<i32> {
        for entry in CATEGORIES[..11].iter() {
            let len = entry.prefix_len as u32;
            if self.peek(len) == Some(entry.prefix as u64) {
                self.consume(len);
                if entry.payload_len == 0 {
                    return Ok(0);
                }
                let payload = self.read_bits(entry.payload_len as u32)? as u32;
                return Ok(decode_value(entry.category as usize, payload));
            }
        }
        Err(IcfError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "no category prefix matched the bit stream",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitpacker::BitPacker;

    #[test]
    fn round_trips_a_handful_of_values() {
        let values = [0, 1, -1, 5, -5, 1500, -1500, 2047, -2047];
        let mut packer = BitPacker::new();
        for &v in &values {
            let code = crate::codebook::encode_value(v);
            packer.emit(code.bits, code.width);
        }
        packer.end_block();
        let words = packer.into_words();

        let mut unpacker = BitUnpacker::new(&words).unwrap();
        for &expected in &values {
            assert_eq!(unpacker.next_value().unwrap(), expected);
        }
    }

    #[test]
    fn sentinel_forces_a_word_boundary() {
        // category 9 codes are 16 bits wide; three of them leave only 16
        // bits of room, not enough for a fourth code plus an 8-bit
        // sentinel (16 < 16+8), so the fourth forces a flush.
        let mut packer = BitPacker::new();
        for _ in 0..4 {
            let code = crate::codebook::encode_value(500);
            packer.emit(code.bits, code.width);
        }
        packer.end_block();
        let words = packer.into_words();
        assert_eq!(words.len(), 2);

        let mut unpacker = BitUnpacker::new(&words).unwrap();
        for _ in 0..4 {
            assert_eq!(unpacker.next_value().unwrap(), 500);
        }
    }

    #[test]
    fn category_eleven_round_trips_despite_sentinel_overlap() {
        let mut packer = BitPacker::new();
        let code = crate::codebook::encode_value(1500);
        packer.emit(code.bits, code.width);
        packer.end_block();
        let words = packer.into_words();

        let mut unpacker = BitUnpacker::new(&words).unwrap();
        assert_eq!(unpacker.next_value().unwrap(), 1500);
    }
}
