//! Block-domain transforms: DCT, quantization, block partitioning, zigzag delta
//!
//! This crate implements the numeric core of the codec pipeline: the 8×8
//! DCT-II and its inverse, scalar quantization against fixed luminance/
//! chrominance tables, partitioning a channel plane into 8×8 blocks, and
//! the zigzag-order DC-relative delta transform.

pub mod block_store;
pub mod dct;
pub mod quantization;
pub mod zigzag;

pub use block_store::*;
pub use dct::*;
pub use quantization::*;
pub use zigzag::*;
