//! Criterion benchmarks for the four column parsers over representative
//! cell values from the ceramic sample data.

use ceramic_normalizer::parser::{
    fahrenheit_to_celsius, parse_generic_column, parse_melting_point, parse_thermal_expansion,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_thermal_expansion(c: &mut Criterion) {
    c.bench_function("parse_thermal_expansion range", |b| {
        b.iter(|| parse_thermal_expansion(black_box("7.9 - 11 x10 -6 / \u{b0} C")))
    });
}

fn bench_generic_column(c: &mut Criterion) {
    c.bench_function("parse_generic_column temperature pair", |b| {
        b.iter(|| parse_generic_column(black_box(">6.04@23C")))
    });
    c.bench_function("parse_generic_column range", |b| {
        b.iter(|| parse_generic_column(black_box("2.5 to 3 W/mK")))
    });
}

fn bench_melting_point(c: &mut Criterion) {
    c.bench_function("parse_melting_point fahrenheit", |b| {
        b.iter(|| parse_melting_point(black_box("4,919\u{b0} F")))
    });
    c.bench_function("parse_melting_point celsius range", |b| {
        b.iter(|| parse_melting_point(black_box("2681 - 2847 \u{b0}C")))
    });
}

fn bench_fahrenheit_conversion(c: &mut Criterion) {
    c.bench_function("fahrenheit_to_celsius", |b| {
        b.iter(|| fahrenheit_to_celsius(black_box("4919")))
    });
}

criterion_group!(
    benches,
    bench_thermal_expansion,
    bench_generic_column,
    bench_melting_point,
    bench_fahrenheit_conversion
);
criterion_main!(benches);
