// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Layout: frames for a horizontally paged media viewer.
//!
//! Given a viewport rectangle, the page set and the intrinsic sizes of the
//! chrome controls, [`LayoutEngine::compute`] produces every frame the host
//! needs to position:
//!
//! - one frame per page in the scrollable page strip, plus the aspect-fitted
//!   media rect and play-button rect inside it when known;
//! - the content extent and the content offset of the current page;
//! - the header (close and delete buttons) and footer (caption, separator,
//!   page indicator, save button);
//! - the overlay, which always covers the viewport.
//!
//! Nothing is cached. Footer height follows the caption height, which changes
//! on every expand/collapse, so hosts simply recompute after any change.
//!
//! ## Coordinate spaces
//!
//! Chrome frames are in the same space as the viewport rectangle, so a
//! viewport with a non-zero origin (for example after safe-area insets) moves
//! all of them. Page frames live in the page strip's content space, whose
//! origin is the start of the first page.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_layout::{ChromeMetrics, LayoutEngine};
//! use folio_pages::{PageRecord, PageSet};
//! use kurbo::Rect;
//!
//! let pages = PageSet::from_pages(
//!     [PageRecord::with_handle(1), PageRecord::with_handle(2), PageRecord::with_handle(3)],
//!     0,
//! );
//! let engine = LayoutEngine::default();
//! let layout = engine.compute(Rect::new(0.0, 0.0, 400.0, 800.0), &pages, &ChromeMetrics::default());
//!
//! assert_eq!(layout.content_extent.width, 1240.0);
//! assert_eq!(layout.pages[1].frame.x0, 420.0);
//! assert_eq!(layout.overlay, Rect::new(0.0, 0.0, 400.0, 800.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod chrome;
mod engine;
mod fit;

pub use chrome::{ChromeConfig, ChromeMetrics, FooterLayout, HeaderLayout};
pub use engine::{LayoutEngine, PageContent, PageLayout, ViewerLayout};
pub use fit::{aspect_fit, center_content};
