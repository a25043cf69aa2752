// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use folio_caption::CaptionChange;
use folio_gesture::ZoomPlan;
use folio_layout::ViewerLayout;
use folio_pages::{ImageSource, VideoSource};
use kurbo::Point;

use crate::page::PageId;

/// Timing of a requested chrome fade.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeAnimation {
    /// How long the fade takes.
    pub duration: Duration,
    /// How long to wait before starting it.
    pub delay: Duration,
}

impl ChromeAnimation {
    /// A fade starting right away.
    #[must_use]
    pub const fn immediate(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }
}

/// Raw input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// A horizontal drag of the page strip was released.
    Drag {
        /// Horizontal release velocity; only its sign matters.
        velocity_x: f64,
        /// Content offset at release.
        offset_x: f64,
    },
    /// Single tap on the current page.
    Tap(Point),
    /// Double tap on the current page, in the page's unscaled content space.
    DoubleTap(Point),
    /// Long press on the current page.
    LongPress,
    /// The current page's zoom factor changed, for example while pinching.
    ZoomChanged(f64),
    /// Tap on the background overlay.
    OverlayTap,
    /// Tap on the caption.
    CaptionTap,
    /// The delete button was pressed.
    Delete,
    /// The close button was pressed.
    Close,
    /// The save button was pressed.
    Save,
    /// The play button was pressed.
    Play,
}

/// Notifications for the host, drained with
/// [`ViewerController::drain_events`](crate::ViewerController::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    /// A different page became current.
    PageChanged(usize),
    /// The page at this index was long-pressed.
    LongPressed(usize),
    /// Header, footer and play button should fade in or out.
    ChromeVisibilityChanged {
        /// Target visibility.
        visible: bool,
        /// Fade timing.
        animation: ChromeAnimation,
    },
    /// The background overlay should fade in or out.
    OverlayVisibilityChanged {
        /// Target visibility.
        visible: bool,
        /// Fade timing.
        animation: ChromeAnimation,
    },
    /// The delete control should be shown or hidden.
    DeleteControlVisibility(bool),
    /// The caption text or its expanded state changed.
    CaptionChanged(CaptionChange),
    /// Geometry was recomputed.
    LayoutComputed(ViewerLayout),
    /// The page strip should scroll to this content offset.
    ScrollTo {
        /// Target content offset.
        offset_x: f64,
        /// Whether to animate the scroll.
        animated: bool,
    },
    /// A page should zoom to the planned rectangle.
    ZoomTo {
        /// Page being zoomed.
        index: usize,
        /// Target scale and rectangle.
        plan: ZoomPlan,
    },
    /// Show a background preview of the page's image.
    BackgroundPreview(usize),
    /// The page's image has to be fetched; report the outcome with
    /// [`ViewerController::image_resolved`](crate::ViewerController::image_resolved).
    ResolveImage {
        /// Page waiting for its image. Report the result against this id.
        page: PageId,
        /// Position of the page when the request was made.
        index: usize,
        /// Where to fetch it from.
        source: ImageSource,
    },
    /// The viewer should be dismissed.
    RequestDismiss,
    /// The image of this page should be saved.
    SaveRequested(usize),
    /// This video should be played.
    PlayRequested(VideoSource),
}
