// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use folio_layout::{ChromeMetrics, LayoutEngine};
use folio_pages::{PageRecord, PageSet};
use kurbo::Rect;

fn pages(count: u64) -> PageSet<PageRecord> {
    PageSet::from_pages(
        (0..count).map(|handle| {
            let record = PageRecord::with_handle(handle);
            if handle % 5 == 0 {
                record.video_url("https://example.com/clip.mp4")
            } else {
                record
            }
        }),
        0,
    )
}

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/compute");
    let engine = LayoutEngine::default();
    let viewport = Rect::new(0.0, 0.0, 390.0, 844.0);
    let metrics = ChromeMetrics {
        caption_height: 36.0,
        ..ChromeMetrics::default()
    };

    for count in [10_u64, 100, 1_000, 10_000] {
        let set = pages(count);
        group.throughput(Throughput::Elements(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| black_box(engine.compute(black_box(viewport), set, &metrics)));
        });
    }
    group.finish();
}

fn bench_chrome(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let viewport = Rect::new(0.0, 0.0, 390.0, 844.0);
    let metrics = ChromeMetrics::default();

    c.bench_function("layout/chrome_only", |b| {
        b.iter(|| {
            let header = engine.header(black_box(viewport), &metrics);
            let footer = engine.footer(black_box(viewport), &metrics);
            black_box((header, footer));
        });
    });
}

criterion_group!(benches, bench_compute, bench_chrome);
criterion_main!(benches);
