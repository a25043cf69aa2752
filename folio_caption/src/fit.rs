// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::measure::{FitError, LineMeasure};

/// Ellipsis marker appended to truncated captions by default.
pub const DEFAULT_ELLIPSIS: &str = "... more";

/// Number of caption lines visible while collapsed by default.
pub const DEFAULT_MAX_LINES: usize = 2;

/// Truncates text with an ellipsis marker until it fits a line budget.
///
/// Fitting works on the end of the text: the marker is appended once and then
/// characters immediately before it are removed one at a time until the
/// measurement reports at most [`max_lines`](Self::max_lines) lines. The marker
/// itself is never shortened. If even the bare marker does not fit, the bare
/// marker is the result.
///
/// Text that already fits is returned unchanged, which makes fitting
/// idempotent: the output of a fit is always a fixed point of the same fit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFitter {
    max_lines: usize,
    ellipsis: String,
}

impl Default for TextFitter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES, DEFAULT_ELLIPSIS)
    }
}

impl TextFitter {
    /// Creates a fitter with a line budget and an ellipsis marker.
    #[must_use]
    pub fn new(max_lines: usize, ellipsis: impl Into<String>) -> Self {
        Self {
            max_lines,
            ellipsis: ellipsis.into(),
        }
    }

    /// Returns the maximum number of visible lines.
    #[must_use]
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Returns the ellipsis marker.
    #[must_use]
    pub fn ellipsis(&self) -> &str {
        &self.ellipsis
    }

    /// Fits `full_text`, reporting degenerate measurements as errors.
    pub fn try_fit<M>(&self, full_text: &str, measure: &M) -> Result<String, FitError>
    where
        M: LineMeasure + ?Sized,
    {
        if measure.line_count(full_text)? <= self.max_lines {
            return Ok(full_text.to_owned());
        }

        let mut candidate = String::with_capacity(full_text.len() + self.ellipsis.len());
        candidate.push_str(full_text);
        candidate.push_str(&self.ellipsis);

        // Byte offset where the marker starts; everything before it is fair game.
        let mut cut = full_text.len();
        while measure.line_count(&candidate)? > self.max_lines {
            let Some((index, _)) = candidate[..cut].char_indices().next_back() else {
                break;
            };
            candidate.replace_range(index..cut, "");
            cut = index;
        }
        Ok(candidate)
    }

    /// Fits `full_text`, falling back to the full text when the measurement is
    /// degenerate.
    #[must_use]
    pub fn fit<M>(&self, full_text: &str, measure: &M) -> String
    where
        M: LineMeasure + ?Sized,
    {
        self.try_fit(full_text, measure)
            .unwrap_or_else(|_| full_text.to_owned())
    }
}
