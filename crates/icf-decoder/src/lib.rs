//! Decode pipeline driver
//!
//! Reads the packed bitstream, reverses entropy coding, zigzag-delta,
//! quantization, and the DCT per block, merges blocks back into planes,
//! and writes out a bitmap with the original header preserved verbatim.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use icf_bitstream::{decode_block, BitUnpacker};
use icf_color::ycbcr_to_bgr_buffer;
use icf_container::{read_packed, write_bitmap};
use icf_core::consts::BLOCK_LEN;
use icf_core::{BitmapHeader, Channel, IcfError, IcfResult, ImageDescriptor, QuantizedImage};
use icf_transform::{blocks_to_plane, dct_inverse, dequantize, table_for, zigzag_delta_decode};

/// Decode this codec's packed bitstream format back into a bitmap file.
pub fn decode_file<P: AsRef<Path>>(input: P, output: P) -> IcfResult<()> {
    let input_path = input.as_ref();
    let output_path = output.as_ref();
    if input_path.as_os_str().is_empty() || output_path.as_os_str().is_empty() {
        return Err(IcfError::MissingPath);
    }

    let reader = File::open(input_path)
        .map_err(|e| IcfError::OpenFailure(format!("{}: {e}", input_path.display())))?;
    let writer = File::create(output_path)
        .map_err(|e| IcfError::CreateFailure(format!("{}: {e}", output_path.display())))?;

    decode(BufReader::new(reader), BufWriter::new(writer))
}

/// Decode from any reader to any writer.
pub fn decode<R: Read, W: Write>(mut reader: R, mut writer: W) -> IcfResult<()> {
    let (header, words) = read_packed(&mut reader)?;
    if header.block_count() == 0 {
        return Err(IcfError::MissingImage);
    }
    log::info!(
        "decoding {}x{} bitmap ({} blocks per channel)",
        header.width,
        header.height,
        header.block_count()
    );

    let quantized = unpack_and_dequantize(header, &words)?;
    let descriptor = inverse_dct(quantized)?;

    let width = header.width as usize;
    let height = header.height as usize;
    let y_plane = blocks_to_plane(descriptor.blocks(Channel::Y), width, height);
    let cb_plane = blocks_to_plane(descriptor.blocks(Channel::Cb), width, height);
    let cr_plane = blocks_to_plane(descriptor.blocks(Channel::Cr), width, height);

    let mut bgr = vec![0u8; width * height * 3];
    ycbcr_to_bgr_buffer(&y_plane, &cb_plane, &cr_plane, &mut bgr);

    write_bitmap(&mut writer, &header, &bgr)?;
    log::info!("decoding complete");
    Ok(())
}

fn unpack_and_dequantize(header: BitmapHeader, words: &[u64]) -> IcfResult<QuantizedImage> {
    let block_count = header.block_count();
    let mut unpacker = BitUnpacker::new(words)?;

    let mut y = Vec::with_capacity(block_count);
    let mut cb = Vec::with_capacity(block_count);
    let mut cr = Vec::with_capacity(block_count);

    for channel in Channel::ALL {
        let dst = match channel {
            Channel::Y => &mut y,
            Channel::Cb => &mut cb,
            Channel::Cr => &mut cr,
        };
        for _ in 0..block_count {
            let mut block = decode_block(&mut unpacker)?;
            zigzag_delta_decode(&mut block);
            dst.push(block);
        }
    }

    QuantizedImage::new(header, y, cb, cr)
}

fn inverse_dct(quantized: QuantizedImage) -> IcfResult<ImageDescriptor> {
    let header = quantized.header;
    let block_count = header.block_count();

    let mut y = vec![[0.0; BLOCK_LEN]; block_count];
    let mut cb = vec![[0.0; BLOCK_LEN]; block_count];
    let mut cr = vec![[0.0; BLOCK_LEN]; block_count];

    for channel in Channel::ALL {
        let table = table_for(channel);
        let src = quantized.blocks(channel);
        let dst = match channel {
            Channel::Y => &mut y,
            Channel::Cb => &mut cb,
            Channel::Cr => &mut cr,
        };
        for (block, out) in src.iter().zip(dst.iter_mut()) {
            dequantize(block, table, out);
        }
    }

    let mut descriptor = ImageDescriptor::new(header, y, cb, cr)?;
    for channel in Channel::ALL {
        for block in descriptor.blocks_mut(channel) {
            dct_inverse(block);
        }
    }

    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_a_non_bitmap_stream() {
        use std::io::Cursor;
        let garbage = vec![0u8; 64];
        let result = icf_container::read_header(&mut Cursor::new(garbage));
        assert!(matches!(result, Err(IcfError::NotABitmap)));
    }

    #[test]
    fn rejects_an_image_with_no_full_blocks() {
        use icf_core::BitmapHeader;

        let header = BitmapHeader {
            signature: icf_core::BMP_SIGNATURE,
            file_size: 54,
            reserved1: 0,
            reserved2: 0,
            pixel_data_offset: 54,
            dib_header_size: 40,
            width: 4,
            height: 4,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 2835,
            y_pixels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        };
        let mut input = Vec::new();
        icf_container::write_packed(&mut input, &header, &[]).unwrap();

        let mut output = Vec::new();
        let result = decode(std::io::Cursor::new(input), &mut output);
        assert!(matches!(result, Err(IcfError::MissingImage)));
    }
}
