// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Gesture: pure planners for paging and zoom gestures.
//!
//! Gesture recognition itself belongs to the host toolkit. By the time input
//! reaches this crate it has already been classified as a released drag or a
//! double tap; the planners here only decide *where* the gesture should end:
//!
//! - [`SnapConfig::plan`] / [`plan_snap`] turn a drag release (offset and
//!   velocity) into a page-aligned target offset and page index.
//! - [`ZoomState::plan_toggle`] / [`plan_zoom_toggle`] turn a double tap into a
//!   target zoom factor and the content rectangle to zoom to.
//!
//! Both planners are pure: they never mutate scroll or zoom state. Callers
//! apply the returned plan and animate towards it however they like.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_gesture::{SnapConfig, ZoomState};
//! use kurbo::{Point, Size};
//!
//! // A flick towards higher pages always advances at least one page.
//! let snap = SnapConfig::default().plan(0.0, 5.0, 300.0, 20.0);
//! assert_eq!(snap.target_offset, 320.0);
//! assert_eq!(snap.clamped_index(3), 1);
//!
//! // Double tap on an unzoomed page zooms all the way in around the tap.
//! let zoom = ZoomState::default();
//! let plan = zoom.plan_toggle(Point::new(50.0, 50.0), Size::new(300.0, 600.0));
//! assert_eq!(plan.scale, 3.0);
//! assert_eq!(plan.rect.size(), Size::new(100.0, 200.0));
//! ```

mod snap;
mod zoom;

pub use snap::{SnapConfig, SnapPlan, page_offset, plan_snap};
pub use zoom::{BASELINE_SCALE, ZoomLimits, ZoomPlan, ZoomState, plan_zoom_toggle};
