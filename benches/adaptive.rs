use adaptive_huffman::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

pub const DATA: usize = 1 << 16;

/// Bytes whose value is the rounded square of a uniform value, which gives a
/// skewed distribution.
pub fn gen_skewed_data(n: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..n)
        .map(|_| {
            let x = rng.random::<f64>();
            (x * x * 255.0) as u8
        })
        .collect()
}

pub fn gen_uniform_data(n: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(0);
    (0..n).map(|_| rng.random::<u8>()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive");
    group.throughput(Throughput::Bytes(DATA as u64));

    for (name, data) in [
        ("skewed", gen_skewed_data(DATA)),
        ("uniform", gen_uniform_data(DATA)),
    ] {
        let config = CoderConfig::default();
        let compressed = compress(&data, &config).unwrap();
        println!(
            "{}: {} bytes into {} bytes",
            name,
            data.len(),
            compressed.len()
        );

        group.bench_with_input(BenchmarkId::new("compress", name), &data, |b, data| {
            b.iter(|| black_box(compress(black_box(data), &config).unwrap()))
        });
        group.bench_with_input(
            BenchmarkId::new("decompress", name),
            &compressed,
            |b, compressed| b.iter(|| black_box(decompress(black_box(compressed), &config).unwrap())),
        );
    }
    group.finish();

    let symbols: Vec<u32> = gen_skewed_data(DATA).into_iter().map(u32::from).collect();
    c.bench_function("write_symbol<LE>", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new(Alphabet::BYTES).unwrap();
            let mut writer =
                BufBitWriter::<LE, _>::new(MemWordWriterVec::<u64, _>::new(Vec::new()));
            for &symbol in &symbols {
                encoder.write_symbol::<LE, _>(symbol, &mut writer).unwrap();
            }
            black_box(writer.into_inner().unwrap().into_inner())
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(5));
    targets = criterion_benchmark
}
criterion_main!(benches);
