//! Benchmarks for color resolution.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use timetable_support::color::{is_hex_color, text_color, to_hex_color, NAMED_COLORS};

/// Benchmark hex literal detection
fn bench_is_hex_color(c: &mut Criterion) {
    c.bench_function("is_hex_color", |b| {
        b.iter(|| {
            is_hex_color(black_box("#4472C4"))
                && !is_hex_color(black_box("SteelBlue"))
                && !is_hex_color(black_box(""))
        })
    });
}

/// Benchmark name resolution across the whole table
fn bench_to_hex_color_names(c: &mut Criterion) {
    c.bench_function("to_hex_color_names", |b| {
        b.iter(|| {
            for (name, _) in NAMED_COLORS {
                black_box(to_hex_color(black_box(name)));
            }
        })
    });
}

/// Benchmark contrast selection over resolved values
fn bench_text_color(c: &mut Criterion) {
    c.bench_function("text_color", |b| {
        b.iter(|| {
            for (_, hex) in NAMED_COLORS {
                black_box(text_color(black_box(hex)));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_is_hex_color,
    bench_to_hex_color_names,
    bench_text_color
);
criterion_main!(benches);
