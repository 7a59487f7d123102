//! Bitmap container header I/O
//!
//! Reads and writes the fixed 54-byte bitmap header, and locates the
//! pixel-data region it describes. The header's field values are opaque
//! to the rest of the pipeline beyond width/height/block accounting; it
//! is otherwise read and written byte-identically, little-endian
//! throughout.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use icf_core::{BitmapHeader, IcfError, IcfResult, BMP_HEADER_SIZE, BMP_SIGNATURE};

/// Read the 54-byte header in field order, verifying the `BM` signature.
pub fn read_header<R: Read>(reader: &mut R) -> IcfResult<BitmapHeader> {
    let signature = reader.read_u16::<LittleEndian>()?;
    if signature != BMP_SIGNATURE {
        return Err(IcfError::NotABitmap);
    }

    let header = BitmapHeader {
        signature,
        file_size: reader.read_u32::<LittleEndian>()?,
        reserved1: reader.read_u16::<LittleEndian>()?,
        reserved2: reader.read_u16::<LittleEndian>()?,
        pixel_data_offset: reader.read_u32::<LittleEndian>()?,
        dib_header_size: reader.read_u32::<LittleEndian>()?,
        width: reader.read_u32::<LittleEndian>()?,
        height: reader.read_u32::<LittleEndian>()?,
        planes: reader.read_u16::<LittleEndian>()?,
        bits_per_pixel: reader.read_u16::<LittleEndian>()?,
        compression: reader.read_u32::<LittleEndian>()?,
        image_size: reader.read_u32::<LittleEndian>()?,
        x_pixels_per_meter: reader.read_u32::<LittleEndian>()?,
        y_pixels_per_meter: reader.read_u32::<LittleEndian>()?,
        colors_used: reader.read_u32::<LittleEndian>()?,
        colors_important: reader.read_u32::<LittleEndian>()?,
    };

    // Skip any bytes between the fixed header and the pixel-data region
    // (e.g. a palette); this core does not round-trip their content.
    if header.pixel_data_offset as usize > BMP_HEADER_SIZE {
        let gap = header.pixel_data_offset as usize - BMP_HEADER_SIZE;
        log::debug!("skipping {gap} header-gap bytes before pixel data");
        let mut discard = vec![0u8; gap];
        reader.read_exact(&mut discard)?;
    }

    Ok(header)
}

/// Write the 54-byte header back out in the same field order.
pub fn write_header<W: Write>(writer: &mut W, header: &BitmapHeader) -> IcfResult<()> {
    writer.write_u16::<LittleEndian>(header.signature)?;
    writer.write_u32::<LittleEndian>(header.file_size)?;
    writer.write_u16::<LittleEndian>(header.reserved1)?;
    writer.write_u16::<LittleEndian>(header.reserved2)?;
    writer.write_u32::<LittleEndian>(header.pixel_data_offset)?;
    writer.write_u32::<LittleEndian>(header.dib_header_size)?;
    writer.write_u32::<LittleEndian>(header.width)?;
    writer.write_u32::<LittleEndian>(header.height)?;
    writer.write_u16::<LittleEndian>(header.planes)?;
    writer.write_u16::<LittleEndian>(header.bits_per_pixel)?;
    writer.write_u32::<LittleEndian>(header.compression)?;
    writer.write_u32::<LittleEndian>(header.image_size)?;
    writer.write_u32::<LittleEndian>(header.x_pixels_per_meter)?;
    writer.write_u32::<LittleEndian>(header.y_pixels_per_meter)?;
    writer.write_u32::<LittleEndian>(header.colors_used)?;
    writer.write_u32::<LittleEndian>(header.colors_important)?;
    Ok(())
}

/// Number of raw pixel bytes for a 24-bpp bitmap of this header's
/// dimensions, assuming no row padding.
pub fn pixel_data_len(header: &BitmapHeader) -> usize {
    header.width as usize * header.height as usize * 3
}

/// Read an uncompressed bitmap: header followed by `width*height*3` raw
/// bottom-up B, G, R bytes.
pub fn read_bitmap<R: Read>(reader: &mut R) -> IcfResult<(BitmapHeader, Vec<u8>)> {
    let header = read_header(reader)?;
    let mut pixels = vec![0u8; pixel_data_len(&header)];
    reader.read_exact(&mut pixels)?;
    Ok((header, pixels))
}

/// Write an uncompressed bitmap: header followed by raw pixel bytes.
pub fn write_bitmap<W: Write>(writer: &mut W, header: &BitmapHeader, pixels: &[u8]) -> IcfResult<()> {
    write_header(writer, header)?;
    writer.write_all(pixels)?;
    Ok(())
}

/// Read a compressed container: header followed by a stream of 64-bit
/// little-endian words occupying the pixel-data region.
pub fn read_packed<R: Read>(reader: &mut R) -> IcfResult<(BitmapHeader, Vec<u64>)> {
    let header = read_header(reader)?;
    let mut words = Vec::new();
    loop {
        match reader.read_u64::<LittleEndian>() {
            Ok(word) => words.push(word),
            Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(IcfError::IoError(e)),
        }
    }
    Ok((header, words))
}

/// Write a compressed container: header followed by the packed word stream.
pub fn write_packed<W: Write>(writer: &mut W, header: &BitmapHeader, words: &[u64]) -> IcfResult<()> {
    write_header(writer, header)?;
    for &word in words {
        writer.write_u64::<LittleEndian>(word)?;
    }
    Ok(())
}
