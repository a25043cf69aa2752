// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Viewer: presentation state for a paged, full-screen media viewer.
//!
//! [`ViewerController`] ties the other Folio crates together. The host
//! reports raw input and the viewport; the controller decides where drags
//! snap, how double taps zoom, what the caption shows and when the chrome
//! fades, then queues [`ViewerEvent`]s describing what to render.
//!
//! The controller never touches a clock or a renderer:
//! - deferred updates (background previews, relayout after a deletion) sit
//!   in a timer queue the host advances with [`ViewerController::tick`];
//! - captions are measured through a host-supplied
//!   [`TextMetrics`](folio_caption::TextMetrics) implementation;
//! - image loading is requested with [`ViewerEvent::ResolveImage`] and
//!   reported back with [`ViewerController::image_resolved`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use folio_caption::TextMetrics;
//! use folio_pages::PageRecord;
//! use folio_viewer::{Input, ViewerConfig, ViewerController, ViewerEvent};
//! use kurbo::Rect;
//!
//! struct OneLine;
//!
//! impl TextMetrics for OneLine {
//!     fn line_height(&self) -> f64 {
//!         20.0
//!     }
//!
//!     fn text_height(&self, _text: &str, _width: f64) -> f64 {
//!         20.0
//!     }
//! }
//!
//! let viewport = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let mut viewer = ViewerController::new(ViewerConfig::default(), OneLine, viewport);
//! viewer.insert_initial(
//!     Duration::ZERO,
//!     [PageRecord::with_handle(1), PageRecord::with_handle(2), PageRecord::with_handle(3)],
//!     0,
//! );
//! viewer.drain_events().for_each(drop);
//!
//! // A flick to the left from the first page moves to the second one.
//! viewer.handle(Duration::ZERO, Input::Drag { velocity_x: 3.0, offset_x: 0.0 });
//! let events: Vec<_> = viewer.drain_events().collect();
//!
//! assert_eq!(viewer.current(), 1);
//! assert!(events.contains(&ViewerEvent::PageChanged(1)));
//! assert!(events.contains(&ViewerEvent::ScrollTo { offset_x: 420.0, animated: true }));
//! ```

mod chrome;
mod config;
mod controller;
mod event;
mod page;

pub use chrome::{CaptionChromeChange, Chrome, Visibility};
pub use config::{AnimationConfig, CaptionConfig, ViewerConfig};
pub use controller::ViewerController;
pub use event::{ChromeAnimation, Input, ViewerEvent};
pub use page::{Page, PageId};
