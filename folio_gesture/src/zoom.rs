// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-page zoom state and the double-tap zoom toggle.

use kurbo::{Point, Rect, Size};

/// Zoom factor at which a page counts as "not zoomed".
///
/// This is deliberately independent of [`ZoomLimits::min`]: a page whose
/// minimum scale is below `1.0` still reports as zoomed while it sits at its
/// minimum.
pub const BASELINE_SCALE: f64 = 1.0;

/// Minimum and maximum zoom factors for a page.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomLimits {
    /// Smallest allowed zoom factor.
    pub min: f64,
    /// Largest allowed zoom factor.
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 3.0 }
    }
}

impl ZoomLimits {
    /// Creates limits, normalizing them so that `min <= max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Clamps `scale` into the limits.
    ///
    /// Unlike [`f64::clamp`] this never panics on limits built by hand with
    /// `min > max`; `max` wins in that case.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// The outcome of a double-tap zoom toggle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomPlan {
    /// Zoom factor to animate to.
    pub scale: f64,
    /// Rectangle, in unscaled content coordinates, that should fill the page
    /// once zoomed. It is centered on the tap and never clamped to the content
    /// bounds; edge clamping is up to the host's scroll view.
    pub rect: Rect,
}

/// Plans a double-tap zoom toggle.
///
/// The toggle never zooms incrementally: anything above `min` zooms all the
/// way out, anything at `min` zooms all the way in. The zoom rectangle has the
/// size of `content_size / scale` and is centered on `tap`.
///
/// A non-positive target scale yields an empty rectangle at the tap.
#[must_use]
pub fn plan_zoom_toggle(tap: Point, current: f64, min: f64, max: f64, content_size: Size) -> ZoomPlan {
    let scale = if current > min { min } else { max };
    if !(scale > 0.0) {
        return ZoomPlan {
            scale,
            rect: Rect::from_origin_size(tap, Size::ZERO),
        };
    }
    let size = Size::new(content_size.width / scale, content_size.height / scale);
    let origin = Point::new(tap.x - size.width / 2.0, tap.y - size.height / 2.0);
    ZoomPlan {
        scale,
        rect: Rect::from_origin_size(origin, size),
    }
}

/// Zoom state of a single page.
///
/// Invariant: `limits.min <= scale <= limits.max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    scale: f64,
    limits: ZoomLimits,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomState {
    /// Creates a state resting at the minimum zoom.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        let limits = ZoomLimits::new(limits.min, limits.max);
        Self {
            scale: limits.min,
            limits,
        }
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns `true` when the page is away from [`BASELINE_SCALE`].
    #[must_use]
    pub fn has_zoomed(&self) -> bool {
        self.scale != BASELINE_SCALE
    }

    /// Replaces the limits and clamps the current scale into them.
    pub fn set_limits(&mut self, min: f64, max: f64) {
        self.limits = ZoomLimits::new(min, max);
        self.scale = self.limits.clamp(self.scale);
    }

    /// Sets the zoom factor, clamped into the limits.
    ///
    /// Returns `true` if the scale changed.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        let clamped = self.limits.clamp(scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Returns to the minimum zoom, as happens whenever the page is laid out
    /// again.
    pub fn reset(&mut self) {
        self.scale = self.limits.min;
    }

    /// Plans a double-tap toggle from the current state.
    #[must_use]
    pub fn plan_toggle(&self, tap: Point, content_size: Size) -> ZoomPlan {
        plan_zoom_toggle(tap, self.scale, self.limits.min, self.limits.max, content_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_from_unzoomed_zooms_to_max() {
        let plan = plan_zoom_toggle(Point::new(50.0, 50.0), 1.0, 1.0, 3.0, Size::new(300.0, 600.0));
        assert_eq!(plan.scale, 3.0);
        assert_eq!(plan.rect.size(), Size::new(100.0, 200.0));
        assert_eq!(plan.rect.origin(), Point::new(0.0, -50.0));
    }

    #[test]
    fn toggle_from_any_zoom_returns_to_min() {
        for current in [1.5, 2.0, 3.0] {
            let plan =
                plan_zoom_toggle(Point::new(10.0, 10.0), current, 1.0, 3.0, Size::new(300.0, 600.0));
            assert_eq!(plan.scale, 1.0);
            assert_eq!(plan.rect.size(), Size::new(300.0, 600.0));
        }
    }

    #[test]
    fn rect_is_centered_on_tap() {
        let tap = Point::new(123.0, 456.0);
        let plan = plan_zoom_toggle(tap, 1.0, 1.0, 4.0, Size::new(400.0, 800.0));
        assert_eq!(plan.rect.center(), tap);
    }

    #[test]
    fn zero_scale_yields_empty_rect() {
        let plan = plan_zoom_toggle(Point::new(5.0, 5.0), 0.0, 0.0, 0.0, Size::new(10.0, 10.0));
        assert_eq!(plan.rect, Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn limits_are_normalized() {
        let limits = ZoomLimits::new(4.0, 0.5);
        assert_eq!(limits, ZoomLimits { min: 0.5, max: 4.0 });

        let state = ZoomState::new(ZoomLimits { min: 3.0, max: 1.0 });
        assert_eq!(state.scale(), 1.0);
        assert_eq!(state.limits(), ZoomLimits { min: 1.0, max: 3.0 });
    }

    #[test]
    fn set_scale_clamps_and_reports_changes() {
        let mut state = ZoomState::default();
        assert!(!state.has_zoomed());

        assert!(state.set_scale(10.0));
        assert_eq!(state.scale(), 3.0);
        assert!(state.has_zoomed());

        assert!(!state.set_scale(3.0));

        state.reset();
        assert_eq!(state.scale(), 1.0);
        assert!(!state.has_zoomed());
    }

    #[test]
    fn baseline_not_min_decides_has_zoomed() {
        let mut state = ZoomState::new(ZoomLimits::new(0.5, 2.0));
        assert_eq!(state.scale(), 0.5);
        assert!(state.has_zoomed());

        state.set_scale(1.0);
        assert!(!state.has_zoomed());
    }

    #[test]
    fn set_limits_clamps_current_scale() {
        let mut state = ZoomState::default();
        state.set_scale(3.0);
        state.set_limits(1.0, 2.0);
        assert_eq!(state.scale(), 2.0);
    }

    #[test]
    fn state_toggle_round_trips() {
        let mut state = ZoomState::default();
        let tap = Point::new(100.0, 100.0);
        let size = Size::new(300.0, 300.0);

        let zoom_in = state.plan_toggle(tap, size);
        state.set_scale(zoom_in.scale);
        let zoom_out = state.plan_toggle(tap, size);
        assert_eq!(zoom_out.scale, 1.0);
    }
}
