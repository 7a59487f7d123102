//! Fixed code book and 64-bit word bit packing/unpacking
//!
//! This crate turns a block of signed, zigzag-delta coefficients into a
//! packed bit stream and back: [`codebook`] assigns each value its
//! fixed-width code, [`bitpacker`] and [`bitunpacker`] move codes in and
//! out of 64-bit words, and [`entropy`] applies the run-length
//! convention for zero coefficients over a whole 64-value block.

pub mod bitpacker;
pub mod bitunpacker;
pub mod codebook;
pub mod entropy;

pub use bitpacker::BitPacker;
pub use bitunpacker::BitUnpacker;
pub use codebook::{decode_value, encode_value, Code};
pub use entropy::{decode_block, encode_block};
