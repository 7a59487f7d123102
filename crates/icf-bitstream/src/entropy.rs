//! Per-block entropy coding: run-length zeros over the fixed code book
//!
//! A block is a sequence of 64 values already in zigzag-delta order. A
//! zero is never coded by itself: it is immediately followed by a second
//! code giving the run length (count of consecutive zeros, at least 1).
//! Runs longer than [`MAX_RUN_LENGTH`] are split into multiple
//! `(zero, run)` pairs. The decoder relies on the fixed 64-coefficient
//! count to know when a block is complete; there is no end-of-block
//! marker in the stream.

use icf_core::consts::{BLOCK_LEN, MAX_RUN_LENGTH};
use icf_core::{CoeffBlock, IcfResult};

use crate::bitpacker::BitPacker;
use crate::bitunpacker::BitUnpacker;
use crate::codebook::encode_value;

/// Encode one block's 64 values (already in zigzag-delta order) and
/// terminate it with the packer's block sentinel.
pub fn encode_block(values: &CoeffBlock, packer: &mut BitPacker) {
    let mut i = 0;
    while i < BLOCK_LEN {
        let v = values[i];
        if v == 0 {
            let mut run = 0i32;
            while i < BLOCK_LEN && values[i] == 0 && run < MAX_RUN_LENGTH {
                run += 1;
                i += 1;
            }
            let zero_code = encode_value(0);
            packer.emit(zero_code.bits, zero_code.width);
            let run_code = encode_value(run);
            packer.emit(run_code.bits, run_code.width);
        } else {
            let code = encode_value(v);
            packer.emit(code.bits, code.width);
            i += 1;
        }
    }
    packer.end_block();
}

/// Decode one block's 64 values (zigzag-delta order) from the unpacker.
pub fn decode_block(unpacker: &mut BitUnpacker) -> IcfResult<CoeffBlock> {
    let mut values: CoeffBlock = [0; BLOCK_LEN];
    let mut i = 0;
    while i < BLOCK_LEN {
        let v = unpacker.next_value()?;
        if v == 0 {
            let run = unpacker.next_value()?.max(0) as usize;
            let run = run.min(BLOCK_LEN - i);
            for _ in 0..run {
                values[i] = 0;
                i += 1;
            }
        } else {
            values[i] = v;
            i += 1;
        }
    }
    unpacker.finish_block()?;
    Ok(values)
}
