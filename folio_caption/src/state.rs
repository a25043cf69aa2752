// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::ops::Range;

use crate::fit::TextFitter;
use crate::measure::{FitError, LineMeasure};

/// Notification produced by every [`CaptionState`] transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionChange {
    /// Text the host should render now.
    pub text: String,
    /// Whether the caption is showing its expanded form.
    pub expanded: bool,
}

/// Expand/collapse state for a single caption.
///
/// The state keeps the full caption, its fitted short form, and whether the
/// full form is showing. The rendered text is always the full text while
/// expanded and the short text while collapsed.
///
/// Expanding a caption that was never truncated does not enter the expanded
/// state, so hosts never show a collapse affordance for text that has nothing
/// to collapse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptionState {
    fitter: TextFitter,
    full_text: String,
    short_text: String,
    expanded: bool,
    fit_error: Option<FitError>,
}

impl Default for CaptionState {
    fn default() -> Self {
        Self::new(TextFitter::default())
    }
}

impl CaptionState {
    /// Creates an empty, collapsed caption.
    #[must_use]
    pub fn new(fitter: TextFitter) -> Self {
        Self {
            fitter,
            full_text: String::new(),
            short_text: String::new(),
            expanded: false,
            fit_error: None,
        }
    }

    /// Returns the fitter used to compute the short text.
    #[must_use]
    pub fn fitter(&self) -> &TextFitter {
        &self.fitter
    }

    /// Returns the untruncated caption.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Returns the fitted caption shown while collapsed.
    #[must_use]
    pub fn short_text(&self) -> &str {
        &self.short_text
    }

    /// Returns the text that should currently be rendered.
    #[must_use]
    pub fn text(&self) -> &str {
        if self.expanded {
            &self.full_text
        } else {
            &self.short_text
        }
    }

    /// Returns `true` while the full text is showing.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns `true` if fitting actually truncated the caption.
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        self.short_text != self.full_text
    }

    /// Returns the error from the most recent fit, if it fell back to the full
    /// text.
    #[must_use]
    pub fn fit_error(&self) -> Option<FitError> {
        self.fit_error
    }

    /// Byte range of the ellipsis marker in [`text`](Self::text), if it is
    /// showing.
    ///
    /// Hosts use this to style the marker differently from the caption.
    #[must_use]
    pub fn ellipsis_range(&self) -> Option<Range<usize>> {
        if self.expanded || !self.is_expandable() {
            return None;
        }
        let marker = self.fitter.ellipsis();
        if marker.is_empty() || !self.short_text.ends_with(marker) {
            return None;
        }
        let end = self.short_text.len();
        Some(end - marker.len()..end)
    }

    /// Replaces the caption and re-renders in the current mode.
    pub fn set_full_text<M>(&mut self, text: impl Into<String>, measure: &M) -> CaptionChange
    where
        M: LineMeasure + ?Sized,
    {
        self.full_text = text.into();
        self.refit(measure)
    }

    /// Replaces the fitter (line budget or marker) and re-renders.
    pub fn set_fitter<M>(&mut self, fitter: TextFitter, measure: &M) -> CaptionChange
    where
        M: LineMeasure + ?Sized,
    {
        self.fitter = fitter;
        self.refit(measure)
    }

    /// Recomputes the short text after the measurement context changed, for
    /// example a new wrap width after rotation, and re-renders.
    pub fn refit<M>(&mut self, measure: &M) -> CaptionChange
    where
        M: LineMeasure + ?Sized,
    {
        match self.fitter.try_fit(&self.full_text, measure) {
            Ok(short) => {
                self.short_text = short;
                self.fit_error = None;
            }
            Err(err) => {
                self.short_text.clone_from(&self.full_text);
                self.fit_error = Some(err);
            }
        }
        if self.expanded {
            self.expand()
        } else {
            self.collapse()
        }
    }

    /// Shows the full text.
    ///
    /// The expanded flag only becomes `true` when the caption is expandable.
    pub fn expand(&mut self) -> CaptionChange {
        self.expanded = self.is_expandable();
        self.change()
    }

    /// Shows the short text.
    pub fn collapse(&mut self) -> CaptionChange {
        self.expanded = false;
        self.change()
    }

    /// Flips between the expanded and collapsed forms.
    pub fn toggle(&mut self) -> CaptionChange {
        if self.expanded {
            self.collapse()
        } else {
            self.expand()
        }
    }

    fn change(&self) -> CaptionChange {
        CaptionChange {
            text: self.text().into(),
            expanded: self.expanded,
        }
    }
}
