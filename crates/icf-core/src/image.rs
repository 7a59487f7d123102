//! Bitmap header and image descriptor

use crate::consts::BLOCK_SIZE;
use crate::{Channel, CoeffBlock, IcfError, IcfResult, SampleBlock};

/// The 54-byte BMP header, preserved byte-identically across a
/// compress/decompress round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub signature: u16,
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
    pub dib_header_size: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: u32,
    pub y_pixels_per_meter: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BitmapHeader {
    /// Number of 8×8 blocks in one channel plane. Truncates rather than
    /// pads when width/height are not multiples of 8.
    pub fn blocks_x(&self) -> usize {
        self.width as usize / BLOCK_SIZE
    }

    pub fn blocks_y(&self) -> usize {
        self.height as usize / BLOCK_SIZE
    }

    pub fn block_count(&self) -> usize {
        self.blocks_x() * self.blocks_y()
    }
}

/// An image descriptor owns the preserved header and three channel block
/// streams, one per [`Channel`], in block-raster order. Blocks are
/// co-owned with the descriptor and released as part of its teardown.
#[derive(Debug, Clone)]
pub struct ImageDescriptor {
    pub header: BitmapHeader,
    y: Vec<SampleBlock>,
    cb: Vec<SampleBlock>,
    cr: Vec<SampleBlock>,
}

impl ImageDescriptor {
    /// Builds a descriptor from a header and three equally-sized channel
    /// streams (invariant ii: block counts are identical across channels).
    pub fn new(
        header: BitmapHeader,
        y: Vec<SampleBlock>,
        cb: Vec<SampleBlock>,
        cr: Vec<SampleBlock>,
    ) -> IcfResult<Self> {
        let expected = header.block_count();
        if y.len() != expected || cb.len() != expected || cr.len() != expected {
            return Err(IcfError::AllocationFailure);
        }
        Ok(Self { header, y, cb, cr })
    }

    pub fn blocks(&self, channel: Channel) -> &[SampleBlock] {
        match channel {
            Channel::Y => &self.y,
            Channel::Cb => &self.cb,
            Channel::Cr => &self.cr,
        }
    }

    pub fn blocks_mut(&mut self, channel: Channel) -> &mut [SampleBlock] {
        match channel {
            Channel::Y => &mut self.y,
            Channel::Cb => &mut self.cb,
            Channel::Cr => &mut self.cr,
        }
    }
}

/// The quantized counterpart of [`ImageDescriptor`], carrying integer
/// coefficient blocks instead of floating-point sample blocks. Produced by
/// the quantizer, consumed by zigzag-delta and the code book.
#[derive(Debug, Clone)]
pub struct QuantizedImage {
    pub header: BitmapHeader,
    y: Vec<CoeffBlock>,
    cb: Vec<CoeffBlock>,
    cr: Vec<CoeffBlock>,
}

impl QuantizedImage {
    pub fn new(
        header: BitmapHeader,
        y: Vec<CoeffBlock>,
        cb: Vec<CoeffBlock>,
        cr: Vec<CoeffBlock>,
    ) -> IcfResult<Self> {
        let expected = header.block_count();
        if y.len() != expected || cb.len() != expected || cr.len() != expected {
            return Err(IcfError::AllocationFailure);
        }
        Ok(Self { header, y, cb, cr })
    }

    pub fn blocks(&self, channel: Channel) -> &[CoeffBlock] {
        match channel {
            Channel::Y => &self.y,
            Channel::Cb => &self.cb,
            Channel::Cr => &self.cr,
        }
    }

    pub fn blocks_mut(&mut self, channel: Channel) -> &mut [CoeffBlock] {
        match channel {
            Channel::Y => &mut self.y,
            Channel::Cb => &mut self.cb,
            Channel::Cr => &mut self.cr,
        }
    }
}
