// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

/// Identifies a scheduled timer.
///
/// Handles are never reused within a queue, so a stale handle can be cancelled
/// safely: it simply no longer matches anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Clone, Debug)]
struct Entry<T> {
    handle: TimerHandle,
    deadline: Duration,
    token: T,
}

/// Pending timers ordered by deadline.
///
/// Timers sharing a deadline fire in scheduling order. The queue is meant for
/// the handful of deferred updates a UI component keeps around, so it favors
/// simplicity over asymptotics.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    next_handle: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedules `token` to fire at `deadline`.
    pub fn schedule_at(&mut self, deadline: Duration, token: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            deadline,
            token,
        });
        handle
    }

    /// Schedules `token` to fire `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, token: T) -> TimerHandle {
        self.schedule_at(now.saturating_add(delay), token)
    }

    /// Cancels a pending timer and returns its token.
    ///
    /// Returns `None` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        let index = self.entries.iter().position(|e| e.handle == handle)?;
        Some(self.entries.remove(index).token)
    }

    /// Returns `true` if `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Returns the deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, handle: TimerHandle) -> Option<Duration> {
        self.entries
            .iter()
            .find(|e| e.handle == handle)
            .map(|e| e.deadline)
    }

    /// Returns the earliest pending deadline.
    ///
    /// Hosts use this to arm their own single wake-up timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Removes and returns the earliest timer whose deadline is at or before
    /// `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(TimerHandle, T)> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| (e.deadline, e.handle))
            .map(|(i, _)| i)?;
        let entry = self.entries.remove(index);
        Some((entry.handle, entry.token))
    }

    /// Drains every timer due at `now`, earliest first.
    pub fn drain_due(&mut self, now: Duration) -> DrainDue<'_, T> {
        DrainDue { queue: self, now }
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Iterator returned by [`TimerQueue::drain_due`].
///
/// Timers that are not yet due stay in the queue, including ones left behind
/// when the iterator is dropped early.
#[derive(Debug)]
pub struct DrainDue<'a, T> {
    queue: &'a mut TimerQueue<T>,
    now: Duration,
}

impl<T> Iterator for DrainDue<'_, T> {
    type Item = (TimerHandle, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_due(self.now)
    }
}

/// Remembers the pending timer for one purpose.
///
/// Scheduling through the slot cancels whatever it scheduled before, so at
/// most one timer per purpose is ever pending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerSlot {
    handle: Option<TimerHandle>,
}

impl TimerSlot {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Returns the handle of the timer this slot last scheduled.
    #[must_use]
    pub fn handle(&self) -> Option<TimerHandle> {
        self.handle
    }

    /// Cancels the previous timer, if any, and schedules a new one.
    pub fn replace<T>(
        &mut self,
        queue: &mut TimerQueue<T>,
        now: Duration,
        delay: Duration,
        token: T,
    ) -> TimerHandle {
        self.cancel(queue);
        let handle = queue.schedule_after(now, delay, token);
        self.handle = Some(handle);
        handle
    }

    /// Cancels the pending timer, if any.
    pub fn cancel<T>(&mut self, queue: &mut TimerQueue<T>) -> Option<T> {
        queue.cancel(self.handle.take()?)
    }

    /// Returns `true` if `handle` is the timer this slot is waiting for, and
    /// forgets it.
    ///
    /// Call this when a timer fires to tell whether it is the current one.
    pub fn take_if(&mut self, handle: TimerHandle) -> bool {
        if self.handle == Some(handle) {
            self.handle = None;
            true
        } else {
            false
        }
    }

    /// Returns `true` while this slot's timer is pending in `queue`.
    #[must_use]
    pub fn is_pending<T>(&self, queue: &TimerQueue<T>) -> bool {
        self.handle.is_some_and(|h| queue.is_pending(h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn timers_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_after(ms(0), ms(300), 'c');
        queue.schedule_after(ms(0), ms(100), 'a');
        queue.schedule_after(ms(0), ms(200), 'b');

        assert_eq!(queue.next_deadline(), Some(ms(100)));
        let fired: Vec<char> = queue.drain_due(ms(250)).map(|(_, t)| t).collect();
        assert_eq!(fired, vec!['a', 'b']);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(ms(300)));
    }

    #[test]
    fn equal_deadlines_fire_in_schedule_order() {
        let mut queue = TimerQueue::new();
        queue.schedule_at(ms(10), 1);
        queue.schedule_at(ms(10), 2);
        queue.schedule_at(ms(10), 3);
        let fired: Vec<i32> = queue.drain_due(ms(10)).map(|(_, t)| t).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_fires_early() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_after(ms(5), ms(10), ());
        assert_eq!(queue.pop_due(ms(14)), None);
        assert_eq!(queue.pop_due(ms(15)), Some((handle, ())));
        assert!(queue.is_empty());
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_after(ms(0), ms(10), "x");
        assert!(queue.is_pending(handle));
        assert_eq!(queue.deadline(handle), Some(ms(10)));
        assert_eq!(queue.cancel(handle), Some("x"));
        assert!(!queue.is_pending(handle));
        assert_eq!(queue.cancel(handle), None);
        assert_eq!(queue.pop_due(ms(100)), None);
    }

    #[test]
    fn handles_are_not_reused() {
        let mut queue = TimerQueue::new();
        let first = queue.schedule_at(ms(0), ());
        queue.cancel(first);
        let second = queue.schedule_at(ms(0), ());
        assert_ne!(first, second);
    }

    #[test]
    fn saturating_deadline() {
        let mut queue = TimerQueue::new();
        let handle = queue.schedule_after(Duration::MAX, ms(1), ());
        assert_eq!(queue.deadline(handle), Some(Duration::MAX));
    }

    #[test]
    fn slot_supersedes_previous_timer() {
        let mut queue = TimerQueue::new();
        let mut slot = TimerSlot::new();

        let first = slot.replace(&mut queue, ms(0), ms(500), 1);
        let second = slot.replace(&mut queue, ms(100), ms(500), 2);

        assert!(!queue.is_pending(first));
        assert!(slot.is_pending(&queue));
        assert_eq!(slot.handle(), Some(second));

        let (handle, token) = queue.pop_due(ms(600)).unwrap();
        assert_eq!(token, 2);
        assert!(slot.take_if(handle));
        assert!(!slot.take_if(handle));
        assert_eq!(slot.handle(), None);
    }

    #[test]
    fn slot_cancel_is_idempotent() {
        let mut queue = TimerQueue::new();
        let mut slot = TimerSlot::new();
        slot.replace(&mut queue, ms(0), ms(1), 'z');
        assert_eq!(slot.cancel(&mut queue), Some('z'));
        assert_eq!(slot.cancel(&mut queue), None);
        assert!(queue.is_empty());
    }
}
