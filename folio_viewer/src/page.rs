// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_gesture::{ZoomLimits, ZoomState};
use folio_layout::PageContent;
use folio_pages::PageRecord;
use kurbo::Size;

/// Identity of a page within one viewer.
///
/// Unlike an index it does not shift when earlier pages are removed, so it
/// names the page an asynchronous image request was made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

/// A page as the viewer tracks it: the host's record plus zoom and the
/// resolved image size.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    id: PageId,
    record: PageRecord,
    zoom: ZoomState,
    media_size: Option<Size>,
}

impl Page {
    pub(crate) fn new(id: u64, record: PageRecord, limits: ZoomLimits) -> Self {
        Self {
            id: PageId(id),
            record,
            zoom: ZoomState::new(limits),
            media_size: None,
        }
    }

    /// Identity of the page.
    #[must_use]
    pub fn id(&self) -> PageId {
        self.id
    }

    /// The host's record.
    #[must_use]
    pub fn record(&self) -> &PageRecord {
        &self.record
    }

    /// Zoom state of the page.
    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Intrinsic size of the image, once resolved.
    #[must_use]
    pub fn media_size(&self) -> Option<Size> {
        self.media_size
    }

    pub(crate) fn record_mut(&mut self) -> &mut PageRecord {
        &mut self.record
    }

    pub(crate) fn zoom_mut(&mut self) -> &mut ZoomState {
        &mut self.zoom
    }

    pub(crate) fn set_media_size(&mut self, size: Size) {
        self.media_size = Some(size);
    }

    pub(crate) fn into_record(self) -> PageRecord {
        self.record
    }
}

impl PageContent for Page {
    fn media_size(&self) -> Option<Size> {
        self.media_size
    }

    fn has_video(&self) -> bool {
        self.record.has_video()
    }
}
