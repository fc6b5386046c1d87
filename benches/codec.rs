use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hashrle::{decode, decompose, encode, scan};

fn long_runs(size: usize) -> String {
    (0..size)
        .map(|i| {
            let ch = char::from(b'a' + (i % 26) as u8);
            std::iter::repeat(ch).take(5 + i % 20).collect::<String>()
        })
        .collect()
}

fn mixed_text(size: usize) -> String {
    (0..size)
        .map(|i| match i % 5 {
            0 => "111".to_string(),
            1 => "###".to_string(),
            2 => "z".repeat(12),
            3 => "ab".to_string(),
            _ => "\n".to_string(),
        })
        .collect()
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000].iter() {
        let text = long_runs(*size);
        group.bench_with_input(BenchmarkId::new("long_runs", size), &text, |b, text| {
            b.iter(|| encode(black_box(text)))
        });

        let text = mixed_text(*size);
        group.bench_with_input(BenchmarkId::new("mixed", size), &text, |b, text| {
            b.iter(|| encode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000].iter() {
        let encoded = encode(&long_runs(*size));
        group.bench_with_input(BenchmarkId::new("long_runs", size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)))
        });

        let encoded = encode(&mixed_text(*size));
        group.bench_with_input(BenchmarkId::new("mixed", size), &encoded, |b, encoded| {
            b.iter(|| decode(black_box(encoded)))
        });
    }
    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let text = mixed_text(500);
    let encoded = encode(&text);

    let mut group = c.benchmark_group("stages");
    group.bench_function("decompose", |b| b.iter(|| decompose(black_box(&text))));
    group.bench_function("scan", |b| b.iter(|| scan(black_box(&encoded))));
    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = "The quick brown fox jumps over the lazy dog 1234567890 ### ".repeat(50);

    c.bench_function("roundtrip_prose", |b| {
        b.iter(|| {
            let encoded = encode(black_box(&text));
            let _decoded = decode(black_box(&encoded)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_stages,
    benchmark_roundtrip
);
criterion_main!(benches);
