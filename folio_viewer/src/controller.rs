// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use folio_caption::{CaptionChange, CaptionState, TextMetrics, WrapMeasure};
use folio_layout::{ChromeMetrics, LayoutEngine, ViewerLayout};
use folio_pages::{PageRecord, PageSet, PageSetError};
use folio_timing::{TimerQueue, TimerSlot};
use kurbo::{Point, Rect, Size};

use crate::chrome::Chrome;
use crate::config::ViewerConfig;
use crate::event::{ChromeAnimation, Input, ViewerEvent};
use crate::page::{Page, PageId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    BackgroundPreview(usize),
    Relayout,
}

/// Presentation state of a paged media viewer.
///
/// The controller owns the pages, the caption of the current page, the chrome
/// state and the last computed layout. Hosts feed it input with
/// [`handle`](Self::handle), advance its timers with [`tick`](Self::tick) and
/// render whatever [`drain_events`](Self::drain_events) reports.
///
/// Every method that may start a deferred update takes the host's current
/// time.
#[derive(Debug)]
pub struct ViewerController<M> {
    config: ViewerConfig,
    engine: LayoutEngine,
    metrics: M,
    chrome_metrics: ChromeMetrics,
    viewport: Rect,
    pages: PageSet<Page>,
    caption: CaptionState,
    chrome: Chrome,
    timers: TimerQueue<Deferred>,
    background: TimerSlot,
    relayout: TimerSlot,
    layout: ViewerLayout,
    events: Vec<ViewerEvent>,
    next_id: u64,
}

impl<M: TextMetrics> ViewerController<M> {
    /// Creates an empty viewer for `viewport`.
    ///
    /// `metrics` measures captions in the font they are rendered with.
    pub fn new(config: ViewerConfig, metrics: M, viewport: Rect) -> Self {
        let engine = config.layout_engine();
        let pages = PageSet::new();
        let chrome_metrics = ChromeMetrics::default();
        let layout = engine.compute(viewport, &pages, &chrome_metrics);
        Self {
            caption: CaptionState::new(config.caption.fitter()),
            config,
            engine,
            metrics,
            chrome_metrics,
            viewport,
            pages,
            chrome: Chrome::new(),
            timers: TimerQueue::new(),
            background: TimerSlot::new(),
            relayout: TimerSlot::new(),
            layout,
            events: Vec::new(),
            next_id: 0,
        }
    }

    /// Replaces all pages and shows `start` (clamped).
    ///
    /// Pending deferred updates are dropped. Remote images are requested with
    /// [`ViewerEvent::ResolveImage`].
    pub fn insert_initial(
        &mut self,
        now: Duration,
        records: impl IntoIterator<Item = PageRecord>,
        start: usize,
    ) {
        self.timers.clear();
        self.background = TimerSlot::new();
        self.relayout = TimerSlot::new();

        let limits = self.config.zoom;
        let next_id = &mut self.next_id;
        self.pages.insert_initial(
            records.into_iter().map(|record| {
                *next_id += 1;
                Page::new(*next_id, record, limits)
            }),
            start,
        );
        log::debug!("loaded {} pages, starting at {}", self.pages.len(), self.pages.current());

        for (index, page) in self.pages.iter().enumerate() {
            if let Some(source) = page.record().image().filter(|source| source.is_remote()) {
                self.events.push(ViewerEvent::ResolveImage {
                    page: page.id(),
                    index,
                    source: source.clone(),
                });
            }
        }

        self.show_current(now);
        self.reflow();
        self.scroll_to_current(false);
    }

    /// Applies one input.
    pub fn handle(&mut self, now: Duration, input: Input) {
        match input {
            Input::Drag {
                velocity_x,
                offset_x,
            } => self.drag_released(now, velocity_x, offset_x),
            Input::Tap(_) => self.tapped(),
            Input::DoubleTap(point) => self.double_tapped(point),
            Input::LongPress => {
                if !self.pages.is_empty() {
                    self.events.push(ViewerEvent::LongPressed(self.pages.current()));
                }
            }
            Input::ZoomChanged(scale) => self.zoomed(scale),
            Input::OverlayTap => {
                let change = self.caption.collapse();
                self.caption_changed(change);
            }
            Input::CaptionTap => {
                let change = self.caption.toggle();
                self.caption_changed(change);
            }
            Input::Delete => self.delete_current(now),
            Input::Close => self.dismiss(),
            Input::Save => {
                if !self.pages.is_empty() {
                    self.events.push(ViewerEvent::SaveRequested(self.pages.current()));
                }
            }
            Input::Play => {
                if let Some(video) = self.pages.current_page().and_then(|p| p.record().video()) {
                    self.events.push(ViewerEvent::PlayRequested(video.clone()));
                }
            }
        }
    }

    /// Fires every deferred update due at `now`.
    pub fn tick(&mut self, now: Duration) {
        while let Some((handle, deferred)) = self.timers.pop_due(now) {
            match deferred {
                Deferred::BackgroundPreview(index) => {
                    if self.background.take_if(handle) && index == self.pages.current() {
                        log::debug!("background preview for page {index}");
                        self.events.push(ViewerEvent::BackgroundPreview(index));
                    }
                }
                Deferred::Relayout => {
                    if self.relayout.take_if(handle) {
                        log::debug!("relayout after deletion");
                        self.reflow();
                        self.scroll_to_current(false);
                    }
                }
            }
        }
    }

    /// Earliest time [`tick`](Self::tick) has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Takes the queued notifications, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = ViewerEvent> + '_ {
        self.events.drain(..)
    }

    /// Lays everything out for a new viewport, for example after rotation.
    ///
    /// The caption is refitted to the new width and every page returns to its
    /// minimum zoom.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.refit_caption();
        self.reflow();
        self.scroll_to_current(false);
    }

    /// Replaces the intrinsic sizes of the chrome controls.
    ///
    /// The caption height is always measured by the controller, so the
    /// `caption_height` in `metrics` is ignored.
    pub fn set_chrome_metrics(&mut self, metrics: ChromeMetrics) {
        self.chrome_metrics = metrics;
        self.refresh_layout();
    }

    /// Reports the outcome of a [`ViewerEvent::ResolveImage`] request.
    ///
    /// `None` means the image could not be loaded; the page keeps its
    /// placeholder. Results for pages that have since been removed are
    /// dropped.
    pub fn image_resolved(&mut self, page: PageId, size: Option<Size>) {
        let Some(size) = size else {
            log::debug!("image for {page:?} did not resolve");
            return;
        };
        let Some(index) = self.pages.iter().position(|p| p.id() == page) else {
            log::warn!("image resolved for {page:?}, which no longer exists");
            return;
        };
        if let Some(page) = self.pages.get_mut(index) {
            page.set_media_size(size);
        }
        if self.config.dynamic_background && index == self.pages.current() {
            self.background.cancel(&mut self.timers);
            self.events.push(ViewerEvent::BackgroundPreview(index));
        }
        self.refresh_layout();
    }

    /// Scrolls to page `index`.
    ///
    /// Returns the target content offset, or `None` if there is no such page.
    pub fn go_to(&mut self, now: Duration, index: usize) -> Option<f64> {
        if index >= self.pages.len() {
            return None;
        }
        self.set_current(now, index);
        Some(self.scroll_to_current(true))
    }

    /// Scrolls to the next page, if any.
    pub fn next(&mut self, now: Duration) -> Option<f64> {
        self.go_to(now, self.pages.current() + 1)
    }

    /// Scrolls to the previous page, if any.
    pub fn previous(&mut self, now: Duration) -> Option<f64> {
        let index = self.pages.current().checked_sub(1)?;
        self.go_to(now, index)
    }

    /// Removes the page at `index`.
    ///
    /// The strip is laid out again once the relayout delay has passed; a
    /// later removal pushes that back.
    pub fn remove_page(&mut self, now: Duration, index: usize) -> Result<PageRecord, PageSetError> {
        let before = self.pages.current();
        let removed = self.pages.remove_at(index).inspect_err(|err| {
            log::warn!("failed to remove page: {err}");
        })?;
        log::debug!("removed page {index}, {} left", self.pages.len());

        if self.pages.is_empty() {
            self.show_current(now);
        } else if index == before || self.pages.current() != before {
            self.show_current(now);
            self.scroll_to_current(true);
        }
        self.relayout.replace(
            &mut self.timers,
            now,
            self.config.relayout_delay,
            Deferred::Relayout,
        );
        Ok(removed.into_record())
    }

    /// Replaces the caption of page `index`.
    pub fn set_caption(&mut self, index: usize, caption: impl Into<String>) -> Result<(), PageSetError> {
        let len = self.pages.len();
        let page = self
            .pages
            .get_mut(index)
            .ok_or(PageSetError::OutOfRange { index, len })?;
        page.record_mut().set_caption(caption);
        if index == self.pages.current() {
            let text = self.current_caption();
            let measure = WrapMeasure::new(&self.metrics, self.caption_width());
            let change = self.caption.set_full_text(text, &measure);
            self.caption_refitted(change);
            self.refresh_layout();
        }
        Ok(())
    }

    /// The configuration the viewer was created with.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The text metrics captions are measured with.
    #[must_use]
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The pages.
    #[must_use]
    pub fn pages(&self) -> &PageSet<Page> {
        &self.pages
    }

    /// Index of the current page.
    #[must_use]
    pub fn current(&self) -> usize {
        self.pages.current()
    }

    /// Caption state of the current page.
    #[must_use]
    pub fn caption(&self) -> &CaptionState {
        &self.caption
    }

    /// Chrome visibility.
    #[must_use]
    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    /// The most recently computed layout.
    #[must_use]
    pub fn layout(&self) -> &ViewerLayout {
        &self.layout
    }

    /// Page indicator text, such as `"2/5"`.
    #[must_use]
    pub fn page_label(&self) -> Option<String> {
        (!self.pages.is_empty()).then(|| format!("{}/{}", self.pages.current() + 1, self.pages.len()))
    }

    fn drag_released(&mut self, now: Duration, velocity_x: f64, offset_x: f64) {
        let page_width = self.viewport.width();
        let plan = self
            .config
            .snap
            .plan(offset_x, velocity_x, page_width, self.config.spacing);
        let index = plan.clamped_index(self.pages.len());
        let last_offset = self
            .engine
            .content_offset(page_width, self.pages.last_index().unwrap_or(0));
        log::debug!(
            "drag released at {offset_x} (velocity {velocity_x}), snapping to {} on page {index}",
            plan.target_offset
        );
        self.events.push(ViewerEvent::ScrollTo {
            offset_x: plan.target_offset.min(last_offset).max(0.0),
            animated: true,
        });
        self.set_current(now, index);
    }

    fn tapped(&mut self) {
        if self.pages.current_page().is_some_and(|p| p.zoom().has_zoomed()) {
            return;
        }
        let visible = self.chrome.toggle_controls().is_visible();
        self.events.push(ViewerEvent::ChromeVisibilityChanged {
            visible,
            animation: ChromeAnimation::immediate(self.config.animation.tap),
        });
    }

    fn double_tapped(&mut self, point: Point) {
        let index = self.pages.current();
        let content_size = self.viewport.size();
        let Some(page) = self.pages.get_mut(index) else {
            return;
        };
        let plan = page.zoom().plan_toggle(point, content_size);
        page.zoom_mut().set_scale(plan.scale);
        let zoomed = page.zoom().has_zoomed();
        log::debug!("double tap on page {index}: zooming to {}", plan.scale);
        self.events.push(ViewerEvent::ZoomTo { index, plan });
        self.zoom_settled(zoomed);
    }

    fn zoomed(&mut self, scale: f64) {
        let Some(page) = self.pages.current_page_mut() else {
            return;
        };
        page.zoom_mut().set_scale(scale);
        let zoomed = page.zoom().has_zoomed();
        self.zoom_settled(zoomed);
    }

    fn zoom_settled(&mut self, zoomed: bool) {
        if !self.chrome.zoom_changed(zoomed) {
            return;
        }
        let timings = self.config.animation;
        self.events.push(ViewerEvent::ChromeVisibilityChanged {
            visible: !zoomed,
            animation: ChromeAnimation {
                duration: if zoomed { timings.zoom_in } else { timings.zoom_out },
                delay: timings.zoom_delay,
            },
        });
    }

    fn delete_current(&mut self, now: Duration) {
        if !self.chrome.is_delete_control_visible() {
            log::debug!("delete ignored while the caption is expanded");
            return;
        }
        match self.pages.len() {
            0 => {}
            1 => {
                log::debug!("deleted the only page");
                self.pages.clear();
                self.show_current(now);
                self.refresh_layout();
                self.dismiss();
            }
            _ => {
                let removed = self.remove_page(now, self.pages.current());
                debug_assert!(removed.is_ok(), "the current page is always in range");
            }
        }
    }

    fn dismiss(&mut self) {
        self.background.cancel(&mut self.timers);
        self.relayout.cancel(&mut self.timers);
        self.events.push(ViewerEvent::RequestDismiss);
    }

    fn set_current(&mut self, now: Duration, index: usize) {
        if self.pages.set_current(index) {
            self.show_current(now);
            self.refresh_layout();
        }
    }

    /// Announces the current page and brings caption and background in line
    /// with it.
    fn show_current(&mut self, now: Duration) {
        self.background.cancel(&mut self.timers);
        let index = self.pages.current();
        if let Some(page) = self.pages.current_page() {
            let image_ready = page.media_size().is_some()
                || page.record().image().is_some_and(|source| !source.is_remote());
            self.events.push(ViewerEvent::PageChanged(index));
            if self.config.dynamic_background && image_ready {
                self.background.replace(
                    &mut self.timers,
                    now,
                    self.config.background_delay,
                    Deferred::BackgroundPreview(index),
                );
            }
        }

        let text = self.current_caption();
        let measure = WrapMeasure::new(&self.metrics, self.caption_width());
        let change = self.caption.set_full_text(text, &measure);
        self.caption_refitted(change);
    }

    fn refit_caption(&mut self) {
        let measure = WrapMeasure::new(&self.metrics, self.caption_width());
        let change = self.caption.refit(&measure);
        self.caption_refitted(change);
    }

    fn caption_refitted(&mut self, change: CaptionChange) {
        if let Some(err) = self.caption.fit_error() {
            log::warn!("showing the full caption: {err}");
        }
        self.apply_caption(change);
    }

    fn caption_changed(&mut self, change: CaptionChange) {
        self.apply_caption(change);
        self.refresh_layout();
    }

    fn apply_caption(&mut self, change: CaptionChange) {
        let expanded = change.expanded;
        self.events.push(ViewerEvent::CaptionChanged(change));

        let update = self.chrome.caption_expanded(expanded);
        let animation = ChromeAnimation::immediate(self.config.animation.caption);
        if let Some(overlay) = update.overlay {
            self.events.push(ViewerEvent::OverlayVisibilityChanged {
                visible: overlay.is_visible(),
                animation,
            });
        }
        if let Some(visible) = update.delete_control {
            self.events.push(ViewerEvent::DeleteControlVisibility(visible));
        }
    }

    fn current_caption(&self) -> String {
        self.pages
            .current_page()
            .map(|page| page.record().caption().to_owned())
            .unwrap_or_default()
    }

    fn caption_width(&self) -> f64 {
        self.config.chrome.caption_width(self.viewport.width())
    }

    fn scroll_to_current(&mut self, animated: bool) -> f64 {
        let offset_x = self
            .engine
            .content_offset(self.viewport.width(), self.pages.current());
        self.events.push(ViewerEvent::ScrollTo { offset_x, animated });
        offset_x
    }

    /// Lays out the strip from scratch, returning every page to its minimum
    /// zoom.
    fn reflow(&mut self) {
        for index in 0..self.pages.len() {
            if let Some(page) = self.pages.get_mut(index) {
                page.zoom_mut().reset();
            }
        }
        let zoomed = self
            .pages
            .current_page()
            .is_some_and(|page| page.zoom().has_zoomed());
        self.zoom_settled(zoomed);
        self.refresh_layout();
    }

    fn refresh_layout(&mut self) {
        let text = self.caption.text();
        let caption_height = if text.is_empty() {
            0.0
        } else {
            WrapMeasure::new(&self.metrics, self.caption_width()).text_height(text)
        };
        let metrics = ChromeMetrics {
            caption_height,
            ..self.chrome_metrics
        };
        self.layout = self.engine.compute(self.viewport, &self.pages, &metrics);
        self.events.push(ViewerEvent::LayoutComputed(self.layout.clone()));
    }
}
