// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use thiserror::Error;

/// Errors reported by explicit [`PageSet`] mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PageSetError {
    /// The index does not address a page (or, for insertion, a gap).
    #[error("page index {index} is out of range for {len} pages")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of pages at the time of the call.
        len: usize,
    },
}

/// Ordered pages plus a clamped current index.
///
/// Invariant: `current <= max(0, len - 1)` after every operation. An empty set
/// reports `current == 0` with no addressable page.
#[derive(Clone, Debug)]
pub struct PageSet<T> {
    pages: Vec<T>,
    current: usize,
    seen: bool,
    revision: u64,
}

impl<T> Default for PageSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageSet<T> {
    /// Creates an empty page set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: 0,
            seen: false,
            revision: 0,
        }
    }

    /// Creates a page set from `pages`, starting at `start` (clamped).
    #[must_use]
    pub fn from_pages(pages: impl IntoIterator<Item = T>, start: usize) -> Self {
        let mut set = Self::new();
        set.insert_initial(pages, start);
        set
    }

    /// Fills the set with its initial pages and start index.
    ///
    /// Any existing pages are replaced; this is the same operation as
    /// [`replace_all`](Self::replace_all).
    pub fn insert_initial(&mut self, pages: impl IntoIterator<Item = T>, start: usize) {
        self.replace_all(pages, start);
    }

    /// Replaces every page and moves to `start` (clamped).
    pub fn replace_all(&mut self, pages: impl IntoIterator<Item = T>, start: usize) {
        self.pages.clear();
        self.pages.extend(pages);
        self.seen = false;
        self.current = start;
        self.settle();
        self.bump();
        log::trace!("page set replaced: {} pages, current {}", self.pages.len(), self.current);
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns the current page index.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the current page, or `None` when the set is empty.
    #[must_use]
    pub fn current_page(&self) -> Option<&T> {
        self.pages.get(self.current)
    }

    /// Returns the current page mutably, or `None` when the set is empty.
    pub fn current_page_mut(&mut self) -> Option<&mut T> {
        self.pages.get_mut(self.current)
    }

    /// Returns the page at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.pages.get(index)
    }

    /// Returns the page at `index` mutably.
    ///
    /// Editing a page in place does not bump the revision; the page count and
    /// current index cannot change through this reference.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.pages.get_mut(index)
    }

    /// Returns all pages in display order.
    #[must_use]
    pub fn pages(&self) -> &[T] {
        &self.pages
    }

    /// Iterates over pages in display order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.pages.iter()
    }

    /// Index of the last page, or `None` when empty.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.pages.len().checked_sub(1)
    }

    /// Returns `true` once the last page has been current.
    ///
    /// Hosts use this to tell whether the viewer was browsed to the end.
    #[must_use]
    pub fn seen(&self) -> bool {
        self.seen
    }

    /// Returns the revision counter.
    ///
    /// The revision bumps whenever pages are added or removed or the current
    /// page moves.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Moves to `index`, clamping it into range.
    ///
    /// Returns `true` if the current page changed.
    pub fn set_current(&mut self, index: usize) -> bool {
        let before = self.current;
        self.current = index;
        self.settle();
        if self.current == before {
            return false;
        }
        self.bump();
        true
    }

    /// Moves to the next page, if there is one.
    pub fn next(&mut self) -> bool {
        self.set_current(self.current.saturating_add(1))
    }

    /// Moves to the previous page, if there is one.
    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.set_current(index),
            None => false,
        }
    }

    /// Appends a page.
    pub fn push(&mut self, page: T) {
        self.pages.push(page);
        self.settle();
        self.bump();
    }

    /// Inserts a page at `index`, shifting later pages right.
    ///
    /// Inserting at or before the current page advances the current index so
    /// the page being viewed stays in view.
    pub fn insert(&mut self, index: usize, page: T) -> Result<(), PageSetError> {
        let len = self.pages.len();
        if index > len {
            return Err(PageSetError::OutOfRange { index, len });
        }
        self.pages.insert(index, page);
        if len > 0 && index <= self.current {
            self.current += 1;
        }
        self.settle();
        self.bump();
        log::trace!("inserted page {index}, current {}", self.current);
        Ok(())
    }

    /// Removes and returns the page at `index`.
    ///
    /// The page adjacent to the one on screen stays in place:
    /// - removing a page before the current one shifts the current index left;
    /// - removing the current page keeps the index, so the following page
    ///   slides in, or the new last page when the current page was last;
    /// - removing a later page leaves the current index alone.
    pub fn remove_at(&mut self, index: usize) -> Result<T, PageSetError> {
        let len = self.pages.len();
        if index >= len {
            return Err(PageSetError::OutOfRange { index, len });
        }
        let removed = self.pages.remove(index);
        if index < self.current {
            self.current -= 1;
        }
        self.settle();
        self.bump();
        log::trace!("removed page {index}, {} left, current {}", self.pages.len(), self.current);
        Ok(removed)
    }

    /// Removes every page.
    pub fn clear(&mut self) {
        if self.pages.is_empty() && self.current == 0 {
            return;
        }
        self.pages.clear();
        self.current = 0;
        self.bump();
    }

    fn settle(&mut self) {
        self.current = self.current.min(self.last_index().unwrap_or(0));
        if self.last_index() == Some(self.current) {
            self.seen = true;
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<'a, T> IntoIterator for &'a PageSet<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
