//! Color space conversion for the codec pipeline
//!
//! This crate implements the RGB <-> YCbCr transform used on read and
//! write of the image.

pub mod ycbcr;

pub use ycbcr::*;
