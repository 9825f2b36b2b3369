//! Benchmarks for the sif pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sif::{checksum, decode, flatten, to_rgba_image};

const WIDTH: usize = 25;
const HEIGHT: usize = 6;

/// Generate `layers` layers of pixel digits, mostly transparent at the
/// front so flattening has to look deep.
fn digits(layers: usize) -> String {
    let mut s = String::with_capacity(layers * WIDTH * HEIGHT);
    for layer in 0..layers {
        for i in 0..WIDTH * HEIGHT {
            let d = if (i + layer * 7) % (layers - layer + 1) == 0 {
                (i + layer) % 2
            } else {
                2
            };
            s.push(char::from(b'0' + d as u8));
        }
    }
    s
}

// -- Decoding benchmarks --

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    let small = digits(10);
    let large = digits(100);

    group.bench_function("decode_small", |b| {
        b.iter(|| decode(black_box(&small), WIDTH, HEIGHT).unwrap())
    });

    group.bench_function("decode_large", |b| {
        b.iter(|| decode(black_box(&large), WIDTH, HEIGHT).unwrap())
    });

    group.finish();
}

// -- Analysis and flattening benchmarks --

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let image = decode(&digits(100), WIDTH, HEIGHT).unwrap();
    let flat = flatten(&image).unwrap();

    group.bench_function("checksum", |b| b.iter(|| checksum(black_box(&image)).unwrap()));

    group.bench_function("flatten", |b| b.iter(|| flatten(black_box(&image)).unwrap()));

    group.bench_function("rasterize_scaled", |b| {
        b.iter(|| to_rgba_image(black_box(&flat), 8).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_decoding, bench_pipeline);
criterion_main!(benches);
