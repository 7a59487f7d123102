//! # icf - lossy still-image codec
//!
//! A high-level entry point for compressing and decompressing bitmap
//! images with this codec's private bitstream format.
//!
//! ## Quick start
//!
//! ### Compressing
//!
//! ```no_run
//! icf::compress_file("input.bmp", "output.icf").unwrap();
//! ```
//!
//! ### Decompressing
//!
//! ```no_run
//! icf::decompress_file("output.icf", "roundtrip.bmp").unwrap();
//! ```

use std::io::{Read, Write};
use std::path::Path;

pub use icf_core::consts;
pub use icf_core::{BitmapHeader, Channel, IcfError, IcfResult};

/// Compress a BMP file into this codec's packed bitstream format.
pub fn compress_file<P: AsRef<Path>>(input: P, output: P) -> IcfResult<()> {
    icf_encoder::encode_file(input, output)
}

/// Compress from any reader to any writer.
pub fn compress<R: Read, W: Write>(reader: R, writer: W) -> IcfResult<()> {
    icf_encoder::encode(reader, writer)
}

/// Decompress this codec's packed bitstream format back into a BMP file.
pub fn decompress_file<P: AsRef<Path>>(input: P, output: P) -> IcfResult<()> {
    icf_decoder::decode_file(input, output)
}

/// Decompress from any reader to any writer.
pub fn decompress<R: Read, W: Write>(reader: R, writer: W) -> IcfResult<()> {
    icf_decoder::decode(reader, writer)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
