//! Encode pipeline driver
//!
//! Reads a bitmap, walks it through color transform, block partitioning,
//! forward DCT, quantization, zigzag-delta, and entropy coding, and
//! writes the packed bitstream back out with the original header
//! preserved verbatim.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use icf_bitstream::{encode_block, BitPacker};
use icf_color::{bgr_buffer_to_ycbcr, rgb_to_ycbcr};
use icf_container::{read_bitmap, write_packed};
use icf_core::consts::BLOCK_LEN;
use icf_core::{Channel, IcfError, IcfResult, ImageDescriptor, QuantizedImage};
use icf_transform::{blocks_to_plane, dct_forward, plane_to_blocks, quantize, table_for, zigzag_delta_encode};

/// Encode a bitmap file into this codec's packed bitstream format.
pub fn encode_file<P: AsRef<Path>>(input: P, output: P) -> IcfResult<()> {
    let input_path = input.as_ref();
    let output_path = output.as_ref();
    if input_path.as_os_str().is_empty() || output_path.as_os_str().is_empty() {
        return Err(IcfError::MissingPath);
    }

    let reader = File::open(input_path)
        .map_err(|e| IcfError::OpenFailure(format!("{}: {e}", input_path.display())))?;
    let writer = File::create(output_path)
        .map_err(|e| IcfError::CreateFailure(format!("{}: {e}", output_path.display())))?;

    encode(BufReader::new(reader), BufWriter::new(writer))
}

/// Encode from any reader to any writer.
pub fn encode<R: Read, W: Write>(mut reader: R, mut writer: W) -> IcfResult<()> {
    let (header, bgr) = read_bitmap(&mut reader)?;
    if header.block_count() == 0 {
        return Err(IcfError::MissingImage);
    }
    log::info!(
        "encoding {}x{} bitmap ({} blocks per channel)",
        header.width,
        header.height,
        header.block_count()
    );

    let pixel_count = header.width as usize * header.height as usize;
    let mut y_plane = vec![0.0; pixel_count];
    let mut cb_plane = vec![0.0; pixel_count];
    let mut cr_plane = vec![0.0; pixel_count];
    bgr_buffer_to_ycbcr(&bgr, &mut y_plane, &mut cb_plane, &mut cr_plane);

    let width = header.width as usize;
    let height = header.height as usize;
    let y_blocks = plane_to_blocks(&y_plane, width, height);
    let cb_blocks = plane_to_blocks(&cb_plane, width, height);
    let cr_blocks = plane_to_blocks(&cr_plane, width, height);

    let descriptor = ImageDescriptor::new(header, y_blocks, cb_blocks, cr_blocks)?;
    let quantized = transform_and_quantize(descriptor)?;

    let mut packer = BitPacker::new();
    for channel in Channel::ALL {
        for block in quantized.blocks(channel) {
            let mut coded = *block;
            zigzag_delta_encode(&mut coded);
            encode_block(&coded, &mut packer);
        }
    }

    write_packed(&mut writer, &quantized.header, &packer.into_words())?;
    log::info!("encoding complete");
    Ok(())
}

fn transform_and_quantize(mut descriptor: ImageDescriptor) -> IcfResult<QuantizedImage> {
    let header = descriptor.header;

    for channel in Channel::ALL {
        for block in descriptor.blocks_mut(channel) {
            dct_forward(block);
        }
    }

    let block_count = header.block_count();
    let mut y = vec![[0i32; BLOCK_LEN]; block_count];
    let mut cb = vec![[0i32; BLOCK_LEN]; block_count];
    let mut cr = vec![[0i32; BLOCK_LEN]; block_count];

    for channel in Channel::ALL {
        let table = table_for(channel);
        let src = descriptor.blocks(channel);
        let dst = match channel {
            Channel::Y => &mut y,
            Channel::Cb => &mut cb,
            Channel::Cr => &mut cr,
        };
        for (block, out) in src.iter().zip(dst.iter_mut()) {
            quantize(block, table, out);
        }
    }

    QuantizedImage::new(header, y, cb, cr)
}
