use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzw::{BitOrder, Compressor, Decompressor};
use std::hint::black_box;
use std::time::Duration;

fn generate_compressed_data(size: usize, pattern: &str, order: BitOrder) -> Vec<u8> {
    let original: Vec<u8> = match pattern {
        "text" => {
            let base = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
            let mut data = Vec::with_capacity(size);
            while data.len() < size {
                data.extend_from_slice(base);
            }
            data.truncate(size);
            data
        }
        "binary" => (0..size).map(|i| ((i * 17 + 11) % 256) as u8).collect(),
        "random" => (0..size)
            .map(|i| {
                let x = i as u32;
                (x.wrapping_mul(1664525).wrapping_add(1013904223) >> 24) as u8
            })
            .collect(),
        _ => panic!("Unknown pattern: {}", pattern),
    };

    Compressor::new(true, 16, order)
        .expect("Invalid configuration")
        .compress(&original)
}

fn decompression_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for size in [1024, 102400, 1048576].iter() {
        let size_label = match *size {
            1024 => "1KB",
            102400 => "100KB",
            1048576 => "1MB",
            _ => "unknown",
        };

        for pattern in ["text", "binary", "random"].iter() {
            for order in [BitOrder::LsbFirst, BitOrder::MsbFirst] {
                let compressed = generate_compressed_data(*size, pattern, order);
                let decompressor = Decompressor::new(order);

                let benchmark_id =
                    BenchmarkId::from_parameter(format!("{}/{}/{}", size_label, pattern, order));

                group.throughput(Throughput::Bytes(*size as u64));
                group.bench_with_input(benchmark_id, &compressed, |b, compressed| {
                    b.iter(|| {
                        decompressor
                            .decompress(black_box(compressed))
                            .expect("Decompression failed")
                    });
                });
            }
        }
    }

    group.finish();
}

criterion_group!(benches, decompression_throughput);
criterion_main!(benches);
