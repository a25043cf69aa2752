// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_caption::{CaptionState, TextFitter, TextMetrics, WrapMeasure};

/// Greedy word wrap with fixed-width glyphs, roughly what a host text stack
/// does per measurement.
struct Mono;

impl TextMetrics for Mono {
    fn line_height(&self) -> f64 {
        16.0
    }

    fn text_height(&self, text: &str, width: f64) -> f64 {
        let columns = ((width / 8.0) as usize).max(1);
        let mut lines = 1_usize;
        let mut used = 0_usize;
        for word in text.split(' ') {
            let len = word.chars().count();
            let needed = if used == 0 { len } else { used + 1 + len };
            if needed <= columns {
                used = needed;
            } else {
                lines += 1;
                used = len.min(columns);
            }
        }
        lines as f64 * 16.0
    }
}

fn caption(words: usize) -> String {
    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(' ');
        }
        text.push_str(["harbour", "at", "dusk", "with", "boats", "and", "gulls"][i % 7]);
    }
    text
}

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("caption/fit");
    let measure = WrapMeasure::new(&Mono, 366.0);
    let fitter = TextFitter::default();

    // Each removed character costs one measurement, so the cost grows with
    // how far the caption overflows its two lines.
    for words in [8_usize, 32, 128, 512] {
        let text = caption(words);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| black_box(fitter.fit(black_box(text), &measure)));
        });
    }
    group.finish();
}

fn bench_refit(c: &mut Criterion) {
    let mut group = c.benchmark_group("caption/refit_on_rotation");
    let text = caption(128);

    group.bench_function("portrait_to_landscape", |b| {
        let portrait = WrapMeasure::new(&Mono, 366.0);
        let landscape = WrapMeasure::new(&Mono, 766.0);
        let mut state = CaptionState::default();
        state.set_full_text(text.clone(), &portrait);
        let mut wide = false;
        b.iter(|| {
            wide = !wide;
            let change = if wide {
                state.refit(&landscape)
            } else {
                state.refit(&portrait)
            };
            black_box(change);
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fit, bench_refit);
criterion_main!(benches);
