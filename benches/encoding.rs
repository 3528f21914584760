use bfh::{decode, decode_strict, encode, encode_strict, is_acceptable, is_well_formatted};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in SIZES.iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = sample(*size + 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in SIZES.iter() {
        let encoded = encode(&sample(*size + 1));

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_strict(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_strict");

    for size in SIZES.iter() {
        // Round down to whole blocks
        let data = sample(size - size % 5);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode_strict(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_strict(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_strict");

    for size in SIZES.iter() {
        let data = sample(size - size % 5);
        let encoded = encode_strict(&data).unwrap();

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode_strict(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    for size in SIZES.iter() {
        let encoded = encode(&sample(*size + 1));

        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("acceptable", size),
            &encoded,
            |b, encoded| b.iter(|| is_acceptable(black_box(encoded))),
        );
        group.bench_with_input(
            BenchmarkId::new("well_formatted", size),
            &encoded,
            |b, encoded| b.iter(|| is_well_formatted(black_box(encoded))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_encode_strict,
    bench_decode_strict,
    bench_validate
);
criterion_main!(benches);
