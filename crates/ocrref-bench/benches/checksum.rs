//! Group 1: digit extraction and weighted summation.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ocrref_bench::{SizeTier, generate_inputs};
use ocrref_core::{ChecksumOptions, calculate_checksum_reversed};

fn bench_checksum(c: &mut Criterion) {
    let mut group = c.benchmark_group("checksum");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let inputs = generate_inputs(&tier.config(42));
        let bytes: usize = inputs.iter().map(String::len).sum();
        group.throughput(Throughput::Bytes(bytes as u64));

        group.bench_with_input(BenchmarkId::new("generation", name), &inputs, |b, inputs| {
            let options = ChecksumOptions::default();
            b.iter(|| {
                inputs
                    .iter()
                    .filter(|input| calculate_checksum_reversed(input, &options).is_ok())
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("fixed_13", name), &inputs, |b, inputs| {
            let options = ChecksumOptions {
                fixed_length: Some(13),
                ..ChecksumOptions::default()
            };
            b.iter(|| {
                inputs
                    .iter()
                    .filter(|input| calculate_checksum_reversed(input, &options).is_ok())
                    .count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_checksum);
criterion_main!(benches);
