// Criterion benchmarks for the buffer routines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use embedded_exercises::data::{from_ascii, to_ascii, MAX_ASCII_LEN};
use embedded_exercises::memory::{move_within, reverse};
use embedded_exercises::stats::{sort_descending, SAMPLE_DATA};

fn benchmark_sort(c: &mut Criterion) {
    c.bench_function("sort_descending_sample", |b| {
        b.iter(|| {
            let mut data = SAMPLE_DATA;
            sort_descending(black_box(&mut data));
            data
        })
    });
}

fn benchmark_move_directions(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_within");
    let len = 4096;
    group.throughput(Throughput::Bytes((len / 2) as u64));

    for (name, src, dst) in [("forward", len / 4, 0), ("backward", 0, len / 4)] {
        let mut buf: Vec<u8> = (0..len).map(|i| i as u8).collect();
        group.bench_with_input(BenchmarkId::new(name, len), &(src, dst), |b, &(src, dst)| {
            b.iter(|| {
                move_within(black_box(&mut buf), src, dst, len / 2).map(|range| range.len())
            })
        });
    }

    group.finish();
}

fn benchmark_reverse(c: &mut Criterion) {
    let mut buf: Vec<u8> = (0..1024).map(|i| i as u8).collect();
    c.bench_function("reverse_1k", |b| {
        b.iter(|| reverse(black_box(&mut buf), 1024).map(|range| range[0]))
    });
}

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascii_round_trip");

    for base in [2u32, 10, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(base), &base, |b, &base| {
            b.iter(|| {
                let mut text = [0u8; MAX_ASCII_LEN];
                let len = to_ascii(black_box(i32::MIN), &mut text, base).ok()?;
                from_ascii(&text, len, base).ok()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sort,
    benchmark_move_directions,
    benchmark_reverse,
    benchmark_conversion
);
criterion_main!(benches);
