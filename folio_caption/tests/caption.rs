// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `folio_caption` crate.
//!
//! These drive the fitter and caption state through a small greedy word-wrap
//! measurement, closer to what a host text stack reports than a fixed
//! characters-per-line rule.

use folio_caption::{
    CaptionState, DEFAULT_ELLIPSIS, FitError, LineMeasure, TextFitter, TextMetrics, WrapMeasure,
};

/// Monospace metrics: every character is 8 units wide, lines are 16 tall.
struct Mono;

impl TextMetrics for Mono {
    fn line_height(&self) -> f64 {
        16.0
    }

    fn text_height(&self, text: &str, width: f64) -> f64 {
        let columns = ((width / 8.0) as usize).max(1);
        let mut lines = 0_usize;
        for paragraph in text.split('\n') {
            let mut used = 0_usize;
            lines += 1;
            for word in paragraph.split(' ') {
                let len = word.chars().count();
                let needed = if used == 0 { len } else { used + 1 + len };
                if needed <= columns {
                    used = needed;
                } else {
                    lines += 1;
                    used = len.min(columns);
                }
            }
        }
        lines as f64 * 16.0
    }
}

const CAPTIONS: &[&str] = &[
    "",
    "Sunset",
    "Sunset over the harbour, taken from the old lighthouse.",
    "A very long caption describing the scene in detail: the boats, the gulls, \
     the fishermen mending their nets, and the lights of the town coming on one by one.",
    "Line one\nLine two\nLine three\nLine four",
];

#[test]
fn default_fitter_uses_two_lines_and_more_marker() {
    let fitter = TextFitter::default();
    assert_eq!(fitter.max_lines(), 2);
    assert_eq!(fitter.ellipsis(), DEFAULT_ELLIPSIS);
}

#[test]
fn fitted_captions_fit_their_budget() {
    let measure = WrapMeasure::new(&Mono, 160.0);
    for max_lines in 1..4 {
        let fitter = TextFitter::new(max_lines, DEFAULT_ELLIPSIS);
        for &caption in CAPTIONS {
            let fitted = fitter.try_fit(caption, &measure).unwrap();
            let lines = measure.line_count(&fitted).unwrap();
            assert!(
                lines <= max_lines,
                "{fitted:?} takes {lines} lines, budget is {max_lines}"
            );
        }
    }
}

#[test]
fn fitting_twice_changes_nothing() {
    let measure = WrapMeasure::new(&Mono, 160.0);
    let fitter = TextFitter::default();
    for &caption in CAPTIONS {
        let once = fitter.fit(caption, &measure);
        assert_eq!(fitter.fit(&once, &measure), once);
    }
}

#[test]
fn truncated_captions_keep_a_prefix_of_the_original() {
    let measure = WrapMeasure::new(&Mono, 160.0);
    let fitter = TextFitter::default();
    for &caption in CAPTIONS {
        let fitted = fitter.fit(caption, &measure);
        if fitted != caption {
            let prefix = fitted.strip_suffix(DEFAULT_ELLIPSIS).unwrap();
            assert!(caption.starts_with(prefix));
        }
    }
}

#[test]
fn rotating_to_a_wider_viewport_unfolds_the_caption() {
    let caption = CAPTIONS[2];
    let mut state = CaptionState::default();

    let portrait = WrapMeasure::new(&Mono, 160.0);
    let change = state.set_full_text(caption, &portrait);
    assert!(state.is_expandable());
    assert!(change.text.ends_with(DEFAULT_ELLIPSIS));

    let landscape = WrapMeasure::new(&Mono, 640.0);
    let change = state.refit(&landscape);
    assert!(!state.is_expandable());
    assert_eq!(change.text, caption);
}

#[test]
fn zero_height_font_leaves_caption_untruncated() {
    struct Collapsed;
    impl TextMetrics for Collapsed {
        fn line_height(&self) -> f64 {
            0.0
        }
        fn text_height(&self, _: &str, _: f64) -> f64 {
            0.0
        }
    }

    let measure = WrapMeasure::new(&Collapsed, 160.0);
    let mut state = CaptionState::default();
    let change = state.set_full_text(CAPTIONS[3], &measure);
    assert_eq!(change.text, CAPTIONS[3]);
    assert_eq!(state.fit_error(), Some(FitError::DegenerateMeasurement));
}
