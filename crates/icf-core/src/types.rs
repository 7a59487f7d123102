//! Core block/coefficient types and the channel tag

/// An 8×8 block of floating-point samples, row-major (index = row*8 + col).
/// Used for pixel planes and for DCT input/output.
pub type SampleBlock = [f64; 64];

/// An 8×8 block of integer coefficients, row-major. Populated by the
/// quantizer; every entry is representable in 12 signed bits.
pub type CoeffBlock = [i32; 64];

/// One of the three channels a block stream belongs to. The channel
/// selects which quantization table applies; it never changes how a
/// block is transformed otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Luminance
    Y,
    /// Blue-difference chrominance
    Cb,
    /// Red-difference chrominance
    Cr,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Y, Channel::Cb, Channel::Cr];

    /// True for the luminance channel, which uses its own quantization table.
    pub fn is_luma(&self) -> bool {
        matches!(self, Channel::Y)
    }
}
