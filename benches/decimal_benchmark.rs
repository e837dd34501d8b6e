// ============================================================================
// Decimal Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - add/multiply/divide at both widths, checked and unchecked
// 2. Comparison - same-scale fast path against the decomposing compare
// 3. Formatting - text layout at both widths
// ============================================================================

use columnar_decimal::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn narrow(v: i64, scale: u8) -> Decimal {
    Decimal::narrow(v, scale, 18).unwrap()
}

fn wide(v: i128, scale: u8) -> Decimal {
    Decimal::wide(v, scale, 38).unwrap()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    let (nl, nr) = (narrow(123_456_789, 4), narrow(987_654, 2));
    let nty = DecimalType::narrow_max(4);
    group.bench_function("narrow_checked", |b| {
        b.iter(|| black_box(add::<i64, Checked>(black_box(nl), black_box(nr), nty)))
    });
    group.bench_function("narrow_unchecked", |b| {
        b.iter(|| black_box(add::<i64, Unchecked>(black_box(nl), black_box(nr), nty)))
    });

    let (wl, wr) = (wide(123_456_789_012_345_678_901, 10), wide(987_654_321, 6));
    let wty = DecimalType::wide_max(10);
    group.bench_function("wide_checked", |b| {
        b.iter(|| black_box(add::<i128, Checked>(black_box(wl), black_box(wr), wty)))
    });
    group.bench_function("wide_unchecked", |b| {
        b.iter(|| black_box(add::<i128, Unchecked>(black_box(wl), black_box(wr), wty)))
    });

    group.finish();
}

fn benchmark_multiply_divide(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_divide");

    let (l, r) = (narrow(1_500_000, 4), narrow(2_250, 3));
    group.bench_function("narrow_multiply", |b| {
        b.iter(|| black_box(multiply::<i64, Checked>(black_box(l), black_box(r), DecimalType::narrow_max(7))))
    });
    group.bench_function("narrow_divide", |b| {
        b.iter(|| black_box(divide::<i64, Checked>(black_box(l), black_box(r), DecimalType::narrow_max(6))))
    });

    let (wl, wr) = (wide(15_000_000_000_000_000_000, 10), wide(2_250, 3));
    group.bench_function("wide_multiply", |b| {
        b.iter(|| black_box(multiply::<i128, Checked>(black_box(wl), black_box(wr), DecimalType::wide_max(13))))
    });
    group.bench_function("wide_divide", |b| {
        b.iter(|| black_box(divide::<i128, Checked>(black_box(wl), black_box(wr), DecimalType::wide_max(10))))
    });

    group.finish();
}

// ============================================================================
// Comparison Benchmarks
// ============================================================================

fn benchmark_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let cases = [
        ("same_scale", narrow(420, 10), narrow(421, 10)),
        ("cross_scale", narrow(420, 11), narrow(42, 10)),
        ("cross_width", narrow(420, 2), wide(4_200_000_000_000_000_000_000, 22)),
    ];

    for (name, l, r) in cases.iter() {
        group.bench_with_input(BenchmarkId::new("ord", name), &(l, r), |b, (l, r)| {
            b.iter(|| black_box(black_box(*l).cmp(black_box(*r))))
        });
        group.bench_with_input(BenchmarkId::new("compare", name), &(l, r), |b, (l, r)| {
            b.iter(|| black_box(compare(black_box(*l), black_box(*r))))
        });
    }

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for scale in [0u8, 10, 38].iter() {
        let value = wide(-123_456_789_012_345_678_901_234, *scale);
        group.bench_with_input(BenchmarkId::new("wide_text", scale), &value, |b, v| {
            b.iter(|| black_box(v.to_text(false)))
        });
    }

    let value = narrow(-123_456_789, 4);
    group.bench_function("narrow_text", |b| b.iter(|| black_box(value.to_text(false))));
    group.bench_function("parse", |b| {
        b.iter(|| black_box(black_box("-12345.6789").parse::<Decimal>()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_multiply_divide,
    benchmark_compare,
    benchmark_format
);
criterion_main!(benches);
