//! Constants used throughout the codec pipeline

/// Side length of a block in samples or coefficients
pub const BLOCK_SIZE: usize = 8;

/// Number of samples/coefficients in one block
pub const BLOCK_LEN: usize = BLOCK_SIZE * BLOCK_SIZE;

/// Number of color channels (Y, Cb, Cr)
pub const NUM_CHANNELS: usize = 3;

/// Reserved end-of-word sentinel byte. Eight consecutive 1-bits; no
/// category prefix in the code book begins with eight 1-bits when aligned.
pub const SENTINEL_BYTE: u8 = 0xFF;

/// Width in bits of the word the bit packer flushes to the output stream
pub const WORD_BITS: u32 = 64;

/// Smallest and largest signed value the code book can represent
pub const CODE_VALUE_MIN: i32 = -2047;
pub const CODE_VALUE_MAX: i32 = 2047;

/// Largest run length a single run-length code can carry; longer zero
/// runs are split into multiple (zero, run) pairs.
pub const MAX_RUN_LENGTH: i32 = CODE_VALUE_MAX;
