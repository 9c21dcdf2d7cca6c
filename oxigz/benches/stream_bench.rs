//! Performance benchmarks for GZIP stream operations.
//!
//! This benchmark suite evaluates:
//! - Compression and decompression throughput across data sizes
//! - Header validation cost, with and without optional fields

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxigz::{DecompressOptions, compress, decompress, validate};
use std::hint::black_box;

/// Generate test data for benchmarking
mod test_data {
    /// Text-like data
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

/// Benchmark compression across data sizes
fn bench_compress_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_sizes");

    let sizes = [
        ("256B", 256),
        ("4KB", 4 * 1024),
        ("64KB", 64 * 1024),
        ("1MB", 1024 * 1024),
    ];

    for (size_name, size) in sizes {
        let data = test_data::text_like(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size_name), &data, |b, data| {
            b.iter(|| {
                let stream = compress(black_box(data)).unwrap();
                black_box(stream);
            });
        });
    }

    group.finish();
}

/// Benchmark decompression across data sizes
fn bench_decompress_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_sizes");

    let sizes = [
        ("256B", 256),
        ("4KB", 4 * 1024),
        ("64KB", 64 * 1024),
        ("1MB", 1024 * 1024),
    ];

    for (size_name, size) in sizes {
        let stream = compress(&test_data::text_like(size)).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size_name),
            &stream,
            |b, stream| {
                b.iter(|| {
                    let restored =
                        decompress(black_box(stream), DecompressOptions::default()).unwrap();
                    black_box(restored);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark decompression with verification disabled
fn bench_decompress_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress_verification");

    let size = 64 * 1024;
    let stream = compress(&test_data::text_like(size)).unwrap();

    let variants = [
        ("full", DecompressOptions::default()),
        (
            "no_checks",
            DecompressOptions::new()
                .verify_checksum(false)
                .verify_length(false),
        ),
    ];

    for (name, options) in variants {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &stream, |b, stream| {
            b.iter(|| {
                let restored = decompress(black_box(stream), options).unwrap();
                black_box(restored);
            });
        });
    }

    group.finish();
}

/// Benchmark header validation with and without optional fields
fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let minimal = compress(b"benchmark payload").unwrap();

    // Same payload behind extra, filename, and comment fields.
    let mut decorated = vec![0x1F, 0x8B, 0x08, 0x04 | 0x08 | 0x10, 0, 0, 0, 0, 0, 0xFF];
    decorated.extend_from_slice(&[4, 1, 2, 3, 4]);
    decorated.extend_from_slice(b"bench.dat\0");
    decorated.extend_from_slice(b"benchmark stream\0");
    decorated.extend_from_slice(&minimal[10..]);

    let variants = [("minimal", &minimal), ("optional_fields", &decorated)];

    for (name, stream) in variants {
        group.bench_with_input(BenchmarkId::from_parameter(name), stream, |b, stream| {
            b.iter(|| {
                let header = validate(black_box(stream), DecompressOptions::default()).unwrap();
                black_box(header);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress_sizes,
    bench_decompress_sizes,
    bench_decompress_verification,
    bench_validate,
);
criterion_main!(benches);
