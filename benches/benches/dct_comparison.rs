//! Block-domain transform benchmarks: DCT, quantization, zigzag-delta.
//!
//! Run with: cargo bench --bench dct_comparison

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use icf_core::SampleBlock;
use icf_transform::{dct_forward, dct_inverse, quantize, zigzag_delta_encode, LUMA_TABLE};

fn bench_dct_8x8(c: &mut Criterion) {
    let mut group = c.benchmark_group("DCT 8x8");
    let input: SampleBlock = core::array::from_fn(|i| (i as f64) / 64.0 - 0.5);
    group.throughput(Throughput::Elements(64));

    group.bench_function("forward", |b| {
        b.iter(|| {
            let mut block = input;
            dct_forward(black_box(&mut block));
            block
        });
    });

    group.bench_function("inverse", |b| {
        let mut freq = input;
        dct_forward(&mut freq);
        b.iter(|| {
            let mut block = freq;
            dct_inverse(black_box(&mut block));
            block
        });
    });

    group.finish();
}

fn bench_quantize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Quantize 8x8");
    let input: SampleBlock = core::array::from_fn(|i| (i as f64) * 3.0 - 90.0);
    group.throughput(Throughput::Elements(64));

    group.bench_function("luma", |b| {
        b.iter(|| {
            let mut coeffs = [0i32; 64];
            quantize(black_box(&input), &LUMA_TABLE, black_box(&mut coeffs));
            coeffs
        });
    });

    group.finish();
}

fn bench_zigzag_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("ZigzagDelta 8x8");
    let block: [i32; 64] = core::array::from_fn(|i| (i as i32) - 32);
    group.throughput(Throughput::Elements(64));

    group.bench_function("encode", |b| {
        b.iter(|| {
            let mut coded = block;
            zigzag_delta_encode(black_box(&mut coded));
            coded
        });
    });

    group.finish();
}

criterion_group!(benches, bench_dct_8x8, bench_quantize, bench_zigzag_delta);
criterion_main!(benches);
