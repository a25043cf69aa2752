// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Pages: the ordered page collection behind a paged media viewer.
//!
//! [`PageSet`] is a small, generic container that tracks:
//! - The pages in display order (page index ↔ position on screen).
//! - The **current** page, clamped into range after every mutation.
//! - Whether the last page has ever been current (the **seen** flag).
//! - A monotonically increasing **revision** that bumps whenever pages are
//!   added or removed or the current page moves, so layout code can tell when
//!   it has to recompute.
//!
//! [`PageRecord`] is the record type the Folio viewer stores: an optional
//! image, an optional video and a caption.
//!
//! Out-of-range navigation is routine in an interactive viewer, so
//! [`PageSet::set_current`] clamps rather than failing. Only explicit removal
//! of a page that does not exist is reported as a [`PageSetError`].
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_pages::{PageRecord, PageSet};
//!
//! let mut pages = PageSet::from_pages(
//!     [
//!         PageRecord::with_url("https://example.com/a.jpg"),
//!         PageRecord::with_url("https://example.com/b.jpg"),
//!         PageRecord::with_url("https://example.com/c.jpg"),
//!     ],
//!     1,
//! );
//!
//! // Deleting the page being viewed slides the next one into place.
//! pages.remove_at(1).unwrap();
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages.current(), 1);
//!
//! // Navigation past the end clamps.
//! pages.set_current(10);
//! assert_eq!(pages.current(), 1);
//! assert!(pages.seen());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod record;
mod set;

pub use record::{ImageSource, PageRecord, VideoSource};
pub use set::{PageSet, PageSetError};
