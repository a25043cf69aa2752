// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Caption: fit captions into a bounded number of lines.
//!
//! This crate owns the text side of a media viewer footer. It does not lay out
//! or shape text itself; instead callers supply a measurement, either as a
//! closure returning a line count or as a [`TextMetrics`] implementation backed
//! by their text stack, and the crate decides what string should be shown.
//!
//! - [`TextFitter`] truncates a string with a fixed ellipsis marker until it
//!   fits into `max_lines` visible lines.
//! - [`CaptionState`] wraps a fitter with expand/collapse state and reports a
//!   [`CaptionChange`] for every transition so the host can re-render.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_caption::{CaptionState, TextFitter};
//!
//! // Pretend every 10 bytes wrap onto a new line.
//! let measure = |text: &str| text.len().div_ceil(10);
//!
//! let fitter = TextFitter::new(2, "...");
//! let mut caption = CaptionState::new(fitter);
//! let change = caption.set_full_text("a caption that is far too long to fit", &measure);
//!
//! assert!(caption.is_expandable());
//! assert!(change.text.ends_with("..."));
//! assert!(!change.expanded);
//!
//! let change = caption.toggle();
//! assert!(change.expanded);
//! assert_eq!(change.text, caption.full_text());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fit;
mod measure;
mod state;

pub use fit::{DEFAULT_ELLIPSIS, DEFAULT_MAX_LINES, TextFitter};
pub use measure::{FitError, LineMeasure, TextMetrics, WrapMeasure};
pub use state::{CaptionChange, CaptionState};
