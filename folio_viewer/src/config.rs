// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer tunables.

use std::time::Duration;

use folio_caption::{DEFAULT_ELLIPSIS, DEFAULT_MAX_LINES, TextFitter};
use folio_gesture::{SnapConfig, ZoomLimits};
use folio_layout::{ChromeConfig, LayoutEngine};

/// How captions are shortened while collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CaptionConfig {
    /// Visible lines of a collapsed caption.
    pub max_lines: usize,
    /// Marker appended to a shortened caption.
    pub ellipsis: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            ellipsis: DEFAULT_ELLIPSIS.into(),
        }
    }
}

impl CaptionConfig {
    /// Builds the fitter for these settings.
    #[must_use]
    pub fn fitter(&self) -> TextFitter {
        TextFitter::new(self.max_lines, self.ellipsis.clone())
    }
}

/// Durations and delays of the chrome animations the viewer requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimationConfig {
    /// Fade of header and footer after a plain tap.
    pub tap: Duration,
    /// Fade-out after zooming in.
    pub zoom_in: Duration,
    /// Fade-in after zooming back out to the baseline.
    pub zoom_out: Duration,
    /// Delay before either zoom fade starts.
    pub zoom_delay: Duration,
    /// Overlay and delete control fade when the caption expands or
    /// collapses.
    pub caption: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tap: Duration::from_millis(100),
            zoom_in: Duration::from_millis(100),
            zoom_out: Duration::from_millis(500),
            zoom_delay: Duration::from_millis(500),
            caption: Duration::from_millis(250),
        }
    }
}

/// Everything a [`ViewerController`](crate::ViewerController) can be tuned
/// with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewerConfig {
    /// Gap between adjacent pages.
    pub spacing: f64,
    /// Drag release snapping.
    pub snap: SnapConfig,
    /// Zoom limits applied to every page.
    pub zoom: ZoomLimits,
    /// Chrome geometry.
    pub chrome: ChromeConfig,
    /// Caption shortening.
    pub caption: CaptionConfig,
    /// Chrome animation timings.
    pub animation: AnimationConfig,
    /// Whether the viewer asks the host to show a blurred copy of the
    /// current image behind the pages.
    pub dynamic_background: bool,
    /// How long a page must stay current before its background preview is
    /// requested.
    pub background_delay: Duration,
    /// How long after a deletion the strip is laid out again, giving the
    /// removal animation time to finish.
    pub relayout_delay: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            snap: SnapConfig::default(),
            zoom: ZoomLimits::default(),
            chrome: ChromeConfig::default(),
            caption: CaptionConfig::default(),
            animation: AnimationConfig::default(),
            dynamic_background: false,
            background_delay: Duration::from_millis(125),
            relayout_delay: Duration::from_millis(500),
        }
    }
}

impl ViewerConfig {
    /// Builds the layout engine for these settings.
    #[must_use]
    pub fn layout_engine(&self) -> LayoutEngine {
        LayoutEngine {
            spacing: self.spacing,
            chrome: self.chrome,
        }
    }
}
