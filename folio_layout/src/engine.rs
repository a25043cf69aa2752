// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page strip layout.

use alloc::vec::Vec;

use folio_pages::{PageRecord, PageSet};
use kurbo::{Point, Rect, Size};

use crate::chrome::{ChromeConfig, ChromeMetrics, FooterLayout, HeaderLayout};
use crate::fit::{aspect_fit, center_content};

/// What the layout needs to know about a page.
pub trait PageContent {
    /// Intrinsic size of the page's image, once it is known.
    fn media_size(&self) -> Option<Size>;

    /// Whether the page carries a video and needs a play button.
    fn has_video(&self) -> bool;
}

impl PageContent for PageRecord {
    /// Records alone never know their image size; hosts that track resolved
    /// images wrap records in their own page type.
    fn media_size(&self) -> Option<Size> {
        None
    }

    fn has_video(&self) -> bool {
        self.video().is_some()
    }
}

impl<P: PageContent + ?Sized> PageContent for &P {
    fn media_size(&self) -> Option<Size> {
        (**self).media_size()
    }

    fn has_video(&self) -> bool {
        (**self).has_video()
    }
}

/// Frames for one page of the strip, in content space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    /// The page's slot in the strip, widened by the spacing unless it is the
    /// last page.
    pub frame: Rect,
    /// Aspect-fitted image frame, once the image size is known.
    pub media: Option<Rect>,
    /// Play button frame for video pages.
    pub play_button: Option<Rect>,
}

/// Everything the host positions for one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerLayout {
    /// The viewport this layout was computed for.
    pub viewport: Rect,
    /// Scrollable size of the page strip.
    pub content_extent: Size,
    /// Horizontal content offset that shows the current page.
    pub content_offset: f64,
    /// One entry per page, in page order.
    pub pages: Vec<PageLayout>,
    /// Header frames.
    pub header: HeaderLayout,
    /// Footer frames.
    pub footer: FooterLayout,
    /// Background overlay; always the whole viewport.
    pub overlay: Rect,
}

/// Computes page strip and chrome frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEngine {
    /// Gap between adjacent pages.
    pub spacing: f64,
    /// Chrome spacing and control sizes.
    pub chrome: ChromeConfig,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl LayoutEngine {
    /// Creates an engine with the given inter-page spacing and default
    /// chrome.
    #[must_use]
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            chrome: ChromeConfig::default(),
        }
    }

    /// Distance between the origins of adjacent pages.
    #[must_use]
    pub fn pitch(&self, page_width: f64) -> f64 {
        page_width + self.spacing
    }

    /// Size of the page strip for `page_count` pages of `page_size`.
    ///
    /// An empty strip has zero extent.
    #[must_use]
    pub fn content_extent(&self, page_size: Size, page_count: usize) -> Size {
        if page_count == 0 {
            return Size::ZERO;
        }
        let n = page_count as f64;
        Size::new(
            page_size.width * n + self.spacing * (n - 1.0),
            page_size.height,
        )
    }

    /// Frame of page `index` in content space.
    #[must_use]
    pub fn page_frame(&self, page_size: Size, index: usize, page_count: usize) -> Rect {
        let x = self.content_offset(page_size.width, index);
        let width = if index + 1 < page_count {
            page_size.width + self.spacing
        } else {
            page_size.width
        };
        Rect::from_origin_size(Point::new(x, 0.0), Size::new(width, page_size.height))
    }

    /// Content offset at which page `index` fills the viewport.
    #[must_use]
    pub fn content_offset(&self, page_width: f64, index: usize) -> f64 {
        index as f64 * self.pitch(page_width)
    }

    /// Header frames for `viewport`.
    #[must_use]
    pub fn header(&self, viewport: Rect, metrics: &ChromeMetrics) -> HeaderLayout {
        self.chrome.header(viewport, metrics)
    }

    /// Footer frames for `viewport`.
    #[must_use]
    pub fn footer(&self, viewport: Rect, metrics: &ChromeMetrics) -> FooterLayout {
        self.chrome.footer(viewport, metrics)
    }

    /// Lays out one page of the strip.
    #[must_use]
    pub fn page<P: PageContent>(
        &self,
        page_size: Size,
        index: usize,
        page_count: usize,
        page: &P,
    ) -> PageLayout {
        let frame = self.page_frame(page_size, index, page_count);
        let origin = frame.origin().to_vec2();
        let media = page
            .media_size()
            .map(|size| center_content(aspect_fit(size, page_size), page_size) + origin);
        let play_button = page.has_video().then(|| {
            let anchor = media.unwrap_or_else(|| Rect::from_origin_size(frame.origin(), page_size));
            Rect::from_center_size(anchor.center(), self.chrome.play_button)
        });
        PageLayout {
            frame,
            media,
            play_button,
        }
    }

    /// Computes the full layout for `viewport`.
    ///
    /// Nothing is cached, so this is called again after every viewport,
    /// page-count or caption-height change.
    #[must_use]
    pub fn compute<P: PageContent>(
        &self,
        viewport: Rect,
        pages: &PageSet<P>,
        metrics: &ChromeMetrics,
    ) -> ViewerLayout {
        let page_size = viewport.size();
        let count = pages.len();
        let frames = pages
            .iter()
            .enumerate()
            .map(|(index, page)| self.page(page_size, index, count, page))
            .collect();
        ViewerLayout {
            viewport,
            content_extent: self.content_extent(page_size, count),
            content_offset: self.content_offset(page_size.width, pages.current()),
            pages: frames,
            header: self.header(viewport, metrics),
            footer: self.footer(viewport, metrics),
            overlay: viewport,
        }
    }
}
