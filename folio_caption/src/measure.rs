// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line measurement seams between the fitter and the host text stack.

use core::fmt;

use thiserror::Error;

/// Errors produced while measuring candidate caption strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FitError {
    /// The measurement reported a non-positive or non-finite line height, so
    /// no line count can be derived from it.
    #[error("text measurement reported a degenerate line height")]
    DegenerateMeasurement,
}

/// Counts the number of visible lines a string occupies.
///
/// Any `Fn(&str) -> usize` closure is a `LineMeasure`, which keeps tests and
/// simple hosts free of boilerplate. Hosts with a real text stack usually go
/// through [`WrapMeasure`] instead.
pub trait LineMeasure {
    /// Returns the number of lines `text` occupies.
    fn line_count(&self, text: &str) -> Result<usize, FitError>;
}

impl<F> LineMeasure for F
where
    F: Fn(&str) -> usize,
{
    fn line_count(&self, text: &str) -> Result<usize, FitError> {
        Ok(self(text))
    }
}

/// Font metrics supplied by the host.
///
/// Implementations capture whatever font and attributes the caption is
/// rendered with; the wrap width is passed per call because it follows the
/// viewport.
pub trait TextMetrics {
    /// Height of a single line of text.
    fn line_height(&self) -> f64;

    /// Height of `text` when wrapped to `width`.
    fn text_height(&self, text: &str, width: f64) -> f64;
}

/// Adapts a [`TextMetrics`] implementation to [`LineMeasure`] at a fixed width.
///
/// The line count is the wrapped height divided by the single-line height,
/// truncated towards zero.
pub struct WrapMeasure<'a, M: ?Sized> {
    metrics: &'a M,
    width: f64,
}

impl<'a, M: TextMetrics + ?Sized> WrapMeasure<'a, M> {
    /// Creates a measure that wraps text to `width`.
    #[must_use]
    pub fn new(metrics: &'a M, width: f64) -> Self {
        Self { metrics, width }
    }

    /// Returns the wrap width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the wrapped height of `text`.
    #[must_use]
    pub fn text_height(&self, text: &str) -> f64 {
        self.metrics.text_height(text, self.width)
    }
}

impl<M: TextMetrics + ?Sized> LineMeasure for WrapMeasure<'_, M> {
    fn line_count(&self, text: &str) -> Result<usize, FitError> {
        let line_height = self.metrics.line_height();
        if !line_height.is_finite() || line_height <= 0.0 {
            return Err(FitError::DegenerateMeasurement);
        }
        let lines = self.text_height(text) / line_height;
        if !lines.is_finite() || lines <= 0.0 {
            return Ok(0);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Partial lines are dropped on purpose; the value is finite and positive"
        )]
        let lines = lines as usize;
        Ok(lines)
    }
}

impl<M: ?Sized> fmt::Debug for WrapMeasure<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapMeasure")
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Metrics {
        line_height: f64,
        chars_per_line: f64,
    }

    impl TextMetrics for Metrics {
        fn line_height(&self) -> f64 {
            self.line_height
        }

        fn text_height(&self, text: &str, width: f64) -> f64 {
            let per_line = (self.chars_per_line * width / 100.0).max(1.0);
            let chars = text.chars().count() as f64;
            let mut lines = 0.0;
            while lines * per_line < chars {
                lines += 1.0;
            }
            lines * self.line_height
        }
    }

    #[test]
    fn closures_measure_directly() {
        let measure = |text: &str| text.len();
        assert_eq!(measure.line_count("abc"), Ok(3));
    }

    #[test]
    fn wrap_measure_divides_height_by_line_height() {
        let metrics = Metrics {
            line_height: 12.0,
            chars_per_line: 10.0,
        };
        let measure = WrapMeasure::new(&metrics, 100.0);
        assert_eq!(measure.line_count(""), Ok(0));
        assert_eq!(measure.line_count("0123456789"), Ok(1));
        assert_eq!(measure.line_count("0123456789a"), Ok(2));

        // Halving the width doubles the line count.
        let narrow = WrapMeasure::new(&metrics, 50.0);
        assert_eq!(narrow.line_count("0123456789"), Ok(2));
    }

    #[test]
    fn zero_line_height_is_degenerate() {
        let metrics = Metrics {
            line_height: 0.0,
            chars_per_line: 10.0,
        };
        let measure = WrapMeasure::new(&metrics, 100.0);
        assert_eq!(
            measure.line_count("text"),
            Err(FitError::DegenerateMeasurement)
        );
    }

    #[test]
    fn nan_line_height_is_degenerate() {
        let metrics = Metrics {
            line_height: f64::NAN,
            chars_per_line: 10.0,
        };
        let measure = WrapMeasure::new(&metrics, 100.0);
        assert_eq!(
            measure.line_count("text"),
            Err(FitError::DegenerateMeasurement)
        );
    }
}
