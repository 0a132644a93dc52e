use arith::{compress, decode, decompress, encode, Model};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_coder(c: &mut Criterion) {
    let mut group = c.benchmark_group("coder");
    // 4000 symbols over a small skewed alphabet
    let message: Vec<u8> = (0..4000u32)
        .map(|i| match i % 10 {
            0 => b'b',
            1..=2 => b'c',
            _ => b'a',
        })
        .collect();
    let model = Model::build(&message).unwrap();

    group.bench_function("encode", |b| {
        b.iter(|| encode(&model, &message).unwrap())
    });

    let bits = encode(&model, &message).unwrap();
    group.bench_function("decode", |b| {
        b.iter(|| decode(&model, &bits).unwrap())
    });
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    let message: Vec<u8> = (0..4000u32).map(|i| (i % 7) as u8 + b'a').collect();

    group.bench_function("compress", |b| b.iter(|| compress(&message).unwrap()));

    let blob = compress(&message).unwrap();
    group.bench_function("decompress", |b| b.iter(|| decompress(&blob).unwrap()));
}

criterion_group!(benches, bench_coder, bench_frame);
criterion_main!(benches);
