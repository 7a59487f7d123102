//! Bitmap container header and pixel-region I/O
//!
//! Reads and writes the fixed bitmap-container header bytes and locates
//! the pixel-data region; otherwise opaque to the rest of the pipeline.

pub mod container;

pub use container::{
    pixel_data_len, read_bitmap, read_header, read_packed, write_bitmap, write_header, write_packed,
};
