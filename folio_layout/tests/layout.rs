// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `folio_layout` crate.

use folio_layout::{ChromeConfig, ChromeMetrics, LayoutEngine, PageContent};
use folio_pages::{PageRecord, PageSet};
use kurbo::{Rect, Size};

struct Photo(Size);

impl PageContent for Photo {
    fn media_size(&self) -> Option<Size> {
        Some(self.0)
    }

    fn has_video(&self) -> bool {
        false
    }
}

fn records(count: u64) -> PageSet<PageRecord> {
    PageSet::from_pages((0..count).map(PageRecord::with_handle), 0)
}

#[test]
fn extent_matches_page_pitch() {
    let engine = LayoutEngine::default();
    let viewport = Rect::new(0.0, 0.0, 400.0, 800.0);
    for count in 0..8 {
        let layout = engine.compute(viewport, &records(count), &ChromeMetrics::default());
        let expected = if count == 0 {
            0.0
        } else {
            400.0 * count as f64 + 20.0 * (count as f64 - 1.0)
        };
        assert_eq!(layout.content_extent.width, expected);
        assert_eq!(layout.pages.len() as u64, count);
    }
}

#[test]
fn frames_tile_the_strip_without_gaps() {
    let engine = LayoutEngine::new(16.0);
    let layout = engine.compute(
        Rect::new(0.0, 0.0, 300.0, 600.0),
        &records(5),
        &ChromeMetrics::default(),
    );
    for pair in layout.pages.windows(2) {
        assert_eq!(pair[0].frame.x1, pair[1].frame.x0);
    }
    assert_eq!(layout.pages[0].frame.x0, 0.0);
    assert_eq!(layout.pages[4].frame.x1, layout.content_extent.width);
}

#[test]
fn offset_viewport_moves_chrome_but_not_pages() {
    let engine = LayoutEngine::default();
    let viewport = Rect::new(0.0, 44.0, 400.0, 844.0);
    let layout = engine.compute(viewport, &records(2), &ChromeMetrics::default());

    assert_eq!(layout.overlay, viewport);
    assert_eq!(layout.header.frame.y0, 60.0);
    assert_eq!(layout.footer.frame.y1, 844.0);
    assert_eq!(layout.pages[0].frame.y0, 0.0);
    assert_eq!(layout.pages[0].frame.height(), 800.0);
}

#[test]
fn media_frames_stay_inside_their_pages() {
    let engine = LayoutEngine::default();
    let sizes = [
        Size::new(4000.0, 3000.0),
        Size::new(1080.0, 1920.0),
        Size::new(10.0, 10.0),
    ];
    let pages = PageSet::from_pages(sizes.map(Photo), 0);
    let layout = engine.compute(Rect::new(0.0, 0.0, 400.0, 800.0), &pages, &ChromeMetrics::default());

    for (page, size) in layout.pages.iter().zip(sizes) {
        let media = page.media.unwrap();
        let visible = Rect::from_origin_size(page.frame.origin(), Size::new(400.0, 800.0));
        assert_eq!(media.union(visible), visible, "{media:?} escapes {visible:?}");
        let aspect = size.width / size.height;
        assert!((media.width() / media.height() - aspect).abs() < 1e-9);
    }
}

#[test]
fn custom_chrome_config_is_used() {
    let engine = LayoutEngine {
        spacing: 0.0,
        chrome: ChromeConfig {
            edge_inset: 8.0,
            show_page_indicator: true,
            ..ChromeConfig::default()
        },
    };
    let metrics = ChromeMetrics {
        caption_height: 30.0,
        page_label: Size::new(30.0, 12.0),
        ..ChromeMetrics::default()
    };
    let layout = engine.compute(Rect::new(0.0, 0.0, 400.0, 800.0), &records(3), &metrics);

    assert_eq!(layout.content_extent.width, 1200.0);
    assert_eq!(layout.footer.caption.x0, 8.0);
    assert_eq!(layout.footer.caption.width(), 384.0);
    assert!(layout.footer.page_label.is_some());
    assert_eq!(layout.header.delete_button.x0, 8.0);
}
