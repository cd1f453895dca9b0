//! Layout and text/pixel mapping benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use caret_ui::text::{LineLayout, MonospaceMetrics, SelectionSpan, multi_line_rects};
use caret_ui::{InputContext, InputOptions, Point};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn prose(words: usize) -> String {
    let vocab = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing"];
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(if i % 40 == 0 { '\n' } else { ' ' });
        }
        text.push_str(vocab[i % vocab.len()]);
    }
    text
}

fn wrap(c: &mut Criterion) {
    let metrics = MonospaceMetrics::new(8.0, 16.0);
    let mut group = c.benchmark_group("wrap");
    for words in [10, 100, 1_000] {
        let text = prose(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| LineLayout::wrap(black_box(text), Some(320.0), &metrics));
        });
    }
    group.finish();

    let text = prose(100);
    c.bench_function("layout_single", |b| {
        b.iter(|| LineLayout::single(black_box(&text)));
    });
}

fn mapping(c: &mut Criterion) {
    let metrics = MonospaceMetrics::new(8.0, 16.0);
    let layout = LineLayout::wrap(&prose(1_000), Some(320.0), &metrics);
    let len = layout.char_count();

    c.bench_function("position_of_mid", |b| {
        b.iter(|| layout.position_of(black_box(len / 2), &metrics, 16.0));
    });

    c.bench_function("index_at_mid", |b| {
        let hit = Point::new(150.0, layout.len() as f32 * 8.0);
        b.iter(|| layout.index_at(black_box(hit), &metrics, 16.0));
    });

    c.bench_function("selection_rects_all", |b| {
        let span = SelectionSpan::new(3, len - 3);
        b.iter(|| multi_line_rects(&layout, black_box(span), &metrics, 16.0));
    });
}

fn typing(c: &mut Criterion) {
    c.bench_function("text_area_set_text_and_redraw", |b| {
        let ctx = InputContext::new(MonospaceMetrics::new(8.0, 16.0));
        let area = ctx.text_area(InputOptions::default()).unwrap();
        area.set_size(320.0, 480.0);
        area.focus();
        let text = prose(200);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            area.set_text(if flip { &text } else { "" });
            area.redraw(std::time::Instant::now());
        });
    });
}

criterion_group!(benches, wrap, mapping, typing);
criterion_main!(benches);
