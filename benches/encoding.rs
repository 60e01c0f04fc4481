use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tagbase::{Alphabet, EncodeOptions, builtin, decode, encode};

fn get_alphabet(name: &str) -> Alphabet<'static> {
    Alphabet::parse_owned(builtin(name).unwrap()).unwrap()
}

/// Alphabet of `base` multi-byte symbols.
fn wide_alphabet(base: usize) -> Alphabet<'static> {
    let source: Vec<u8> = (0..base)
        .flat_map(|i| format!("<{i}>\n").into_bytes())
        .collect();
    Alphabet::parse_owned(source).unwrap()
}

fn digest(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 131 % 251) as u8 | 1).collect()
}

fn bench_encode(c: &mut Criterion, group_name: &str, alphabet: &Alphabet<'_>) {
    let mut group = c.benchmark_group(group_name);
    let options = EncodeOptions::default();

    for size in [16, 32, 64, 256, 1024].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = digest(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| encode(black_box(data.clone()), black_box(alphabet), &options).unwrap());
        });
    }
    group.finish();
}

fn bench_encode_base94(c: &mut Criterion) {
    bench_encode(c, "encode_base94", &get_alphabet("base94"));
}

fn bench_encode_base2(c: &mut Criterion) {
    bench_encode(c, "encode_base2", &get_alphabet("base2"));
}

fn bench_encode_wide_4096(c: &mut Criterion) {
    bench_encode(c, "encode_wide_4096", &wide_alphabet(4096));
}

fn bench_decode_base94(c: &mut Criterion) {
    let alphabet = get_alphabet("base94");
    let mut group = c.benchmark_group("decode_base94");

    for size in [16, 32, 64, 256].iter() {
        let encoded = encode(digest(*size), &alphabet, &EncodeOptions::default()).unwrap();

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded), black_box(&alphabet), *size).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_encode_base94,
    bench_encode_base2,
    bench_encode_wide_4096,
    bench_decode_base94,
);
criterion_main!(benches);
