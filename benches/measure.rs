// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for text height measurement.
//!
//! Measures the wrapping model over message shapes a toast actually sees:
//! a short single line, a wrapping paragraph, and multi-line text.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::measure::{self, FontSpec};
use std::hint::black_box;

fn bench_wrapped_text_height(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let font = FontSpec::default();

    let short = "You are now connected with internet.";
    let paragraph = short.repeat(20);
    let multiline = vec![short; 12].join("\n");

    group.bench_function("short_message", |b| {
        b.iter(|| black_box(measure::wrapped_text_height(black_box(short), 240.0, &font)));
    });

    group.bench_function("wrapping_paragraph", |b| {
        b.iter(|| black_box(measure::wrapped_text_height(black_box(&paragraph), 240.0, &font)));
    });

    group.bench_function("multiline_message", |b| {
        b.iter(|| black_box(measure::wrapped_text_height(black_box(&multiline), 240.0, &font)));
    });

    group.finish();
}

fn bench_card_height(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let font = FontSpec::default();
    let short = "You are now connected with internet.";

    group.bench_function("card_height", |b| {
        b.iter(|| black_box(measure::card_height(black_box(short), 300.0, &font)));
    });

    group.finish();
}

criterion_group!(benches, bench_wrapped_text_height, bench_card_height);
criterion_main!(benches);
