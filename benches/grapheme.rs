//! Grapheme classification, masking and flattening benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use opentui_grapheme::unicode::{NBSP, ZWSP, grapheme_count};
use opentui_grapheme::{Buffer, Line, Masked, Style, StyledGrapheme};
use std::hint::black_box;

fn classify(c: &mut Criterion) {
    let symbols = [" ", "a", ZWSP, NBSP, "\t", "漢", "👨‍👩‍👧"];

    c.bench_function("is_whitespace_mixed", |b| {
        b.iter(|| {
            symbols
                .iter()
                .filter(|s| StyledGrapheme::new(black_box(s), Style::NONE).is_whitespace())
                .count()
        })
    });
}

fn masking(c: &mut Criterion) {
    let ascii = Masked::new("correct horse battery staple", '*');
    c.bench_function("masked_value_ascii", |b| {
        b.iter(|| black_box(&ascii).value())
    });

    let clusters = Masked::new("pässwörd👍🏽🇺🇸e\u{0301}", '•');
    c.bench_function("masked_value_clusters", |b| {
        b.iter(|| black_box(&clusters).value())
    });

    let long = "x".repeat(1000);
    c.bench_function("grapheme_count_ascii_1000", |b| {
        b.iter(|| grapheme_count(black_box(&long)))
    });
}

fn flatten_and_draw(c: &mut Criterion) {
    let line = Line::raw("Hello, 世界! wrap\u{200b}points and\u{00a0}glue");

    c.bench_function("line_styled_graphemes", |b| {
        b.iter(|| black_box(&line).styled_graphemes(Style::bold()).count())
    });

    let mut buf = Buffer::new(80, 1).expect("80x1 buffer");
    c.bench_function("buffer_set_line", |b| {
        b.iter(|| buf.set_line(0, 0, black_box(&line), 80).expect("in bounds"))
    });
}

criterion_group!(benches, classify, masking, flatten_and_draw);
criterion_main!(benches);
