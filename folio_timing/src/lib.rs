// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Timing: a host-agnostic, cancelable timer queue.
//!
//! UI runtimes all have some way to run code later, but they disagree on
//! clocks, threads and callbacks. This crate keeps deferred work as plain data
//! instead: callers schedule a *token* for a deadline, cancel it by handle, and
//! periodically ask which tokens are due. Time is a [`Duration`] measured from
//! whatever epoch the host likes, which keeps the queue deterministic in tests.
//!
//! - [`TimerQueue`] holds pending tokens ordered by deadline.
//! - [`TimerSlot`] remembers the handle for one *purpose* so that scheduling
//!   again cancels the previous timer: the last scheduled update wins and
//!   stale ones never fire.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use folio_timing::{TimerQueue, TimerSlot};
//!
//! let mut queue = TimerQueue::new();
//! let mut preview = TimerSlot::new();
//!
//! let t0 = Duration::ZERO;
//! preview.replace(&mut queue, t0, Duration::from_millis(125), "page 1");
//! // The user pages again before the first timer fired.
//! preview.replace(&mut queue, t0 + Duration::from_millis(50), Duration::from_millis(125), "page 2");
//!
//! let due: Vec<_> = queue.drain_due(Duration::from_secs(1)).map(|(_, token)| token).collect();
//! assert_eq!(due, ["page 2"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use core::time::Duration;
pub use queue::{DrainDue, TimerHandle, TimerQueue, TimerSlot};
