//! Scalar quantization with fixed luminance/chrominance tables

use icf_core::{Channel, CoeffBlock, SampleBlock};

/// Fixed 8×8 quantization table, row-major, all entries strictly positive.
pub type QuantTable = [u16; 64];

/// Luminance quantization table (JPEG-standard base matrix).
pub const LUMA_TABLE: QuantTable = [
    16, 11, 10, 16, 24, 40, 51, 61, 12, 12, 14, 19, 26, 58, 60, 55, 14, 13, 16, 24, 40, 57, 69, 56,
    14, 17, 22, 29, 51, 87, 80, 62, 18, 22, 37, 56, 68, 109, 103, 77, 24, 35, 55, 64, 81, 104, 113,
    92, 49, 64, 78, 87, 103, 121, 120, 101, 72, 92, 95, 98, 112, 100, 103, 99,
];

/// Chrominance quantization table (JPEG-standard base matrix), shared by
/// both the Cb and Cr channels.
pub const CHROMA_TABLE: QuantTable = [
    17, 18, 24, 47, 99, 99, 99, 99, 18, 21, 26, 66, 99, 99, 99, 99, 24, 26, 56, 99, 99, 99, 99, 99,
    47, 66, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
    99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99, 99,
];

/// Selects the quantization table for a channel. The channel only changes
/// which table applies, never the code path.
pub fn table_for(channel: Channel) -> &'static QuantTable {
    if channel.is_luma() {
        &LUMA_TABLE
    } else {
        &CHROMA_TABLE
    }
}

fn round_half_away_from_zero(value: f64) -> i32 {
    if value >= 0.0 {
        (value + 0.5).floor() as i32
    } else {
        (value - 0.5).ceil() as i32
    }
}

/// Forward quantize: `output[p] = round(block[p] / table[p])`, rounding
/// half away from zero.
pub fn quantize(block: &SampleBlock, table: &QuantTable, output: &mut CoeffBlock) {
    for p in 0..64 {
        output[p] = round_half_away_from_zero(block[p] / table[p] as f64);
    }
}

/// Inverse quantize: `output[p] = block[p] * table[p]`.
pub fn dequantize(block: &CoeffBlock, table: &QuantTable, output: &mut SampleBlock) {
    for p in 0..64 {
        output[p] = block[p] as f64 * table[p] as f64;
    }
}
