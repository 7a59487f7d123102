//! End-to-end compress/decompress benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use icf_core::BitmapHeader;
use std::io::Cursor;

fn gradient_bmp(width: u32, height: u32) -> Vec<u8> {
    let header = BitmapHeader {
        signature: icf_core::BMP_SIGNATURE,
        file_size: 54 + width * height * 3,
        reserved1: 0,
        reserved2: 0,
        pixel_data_offset: 54,
        dib_header_size: 40,
        width,
        height,
        planes: 1,
        bits_per_pixel: 24,
        compression: 0,
        image_size: width * height * 3,
        x_pixels_per_meter: 2835,
        y_pixels_per_meter: 2835,
        colors_used: 0,
        colors_important: 0,
    };

    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(128);
            pixels.push(((y * 255) / height.max(1)) as u8);
            pixels.push(((x * 255) / width.max(1)) as u8);
        }
    }

    let mut buffer = Vec::new();
    icf_container::write_bitmap(&mut buffer, &header, &pixels).unwrap();
    buffer
}

fn bench_compress_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compress by Image Size");

    for &size in &[64u32, 128, 256, 512] {
        let bmp = gradient_bmp(size, size);
        let pixel_count = (size * size) as u64;

        group.throughput(Throughput::Elements(pixel_count));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &bmp, |b, bmp| {
            b.iter(|| {
                let mut compressed = Vec::new();
                icf::compress(Cursor::new(black_box(bmp)), black_box(&mut compressed)).unwrap();
                compressed
            });
        });
    }

    group.finish();
}

fn bench_decompress_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decompress by Image Size");

    for &size in &[64u32, 128, 256, 512] {
        let bmp = gradient_bmp(size, size);
        let mut compressed = Vec::new();
        icf::compress(Cursor::new(&bmp), &mut compressed).unwrap();
        let pixel_count = (size * size) as u64;

        group.throughput(Throughput::Elements(pixel_count));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let mut decompressed = Vec::new();
                    icf::decompress(Cursor::new(black_box(compressed)), black_box(&mut decompressed)).unwrap();
                    decompressed
                });
            },
        );
    }

    group.finish();
}

fn bench_roundtrip_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Roundtrip by Image Size");

    for &size in &[64u32, 128, 256] {
        let bmp = gradient_bmp(size, size);
        let pixel_count = (size * size) as u64;

        group.throughput(Throughput::Elements(pixel_count));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{size}x{size}")), &bmp, |b, bmp| {
            b.iter(|| {
                let mut compressed = Vec::new();
                icf::compress(Cursor::new(black_box(bmp)), &mut compressed).unwrap();
                let mut decompressed = Vec::new();
                icf::decompress(Cursor::new(&compressed), &mut decompressed).unwrap();
                decompressed
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress_by_size, bench_decompress_by_size, bench_roundtrip_by_size);
criterion_main!(benches);
