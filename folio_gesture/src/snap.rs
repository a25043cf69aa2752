// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page snapping for horizontally paged content.

/// Tunables for [`SnapConfig::plan`].
///
/// The planner does not use the magnitude of the release velocity, only its
/// sign: any flick carries the scroll `flick_speed * momentum` further in the
/// direction of travel before snapping.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Speed assigned to a release with non-zero velocity.
    pub flick_speed: f64,
    /// How far, in speed units, momentum carries the scroll.
    pub momentum: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            flick_speed: 2.0,
            momentum: 60.0,
        }
    }
}

/// Where a released drag should come to rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPlan {
    /// Target content offset, a multiple of the page pitch.
    pub target_offset: f64,
    /// Page index at the target offset, before clamping to the page count.
    ///
    /// This is `round(target_offset / page_width)` and may be negative or
    /// past the last page when the drag overscrolled an edge.
    pub page_index: isize,
}

impl SnapPlan {
    /// Returns the page index clamped into `0..page_count`.
    ///
    /// An empty page set clamps to `0`.
    #[must_use]
    pub fn clamped_index(&self, page_count: usize) -> usize {
        let last = page_count.saturating_sub(1);
        usize::try_from(self.page_index).map_or(0, |index| index.min(last))
    }
}

impl SnapConfig {
    /// Plans the resting offset for a drag released at `offset` with `velocity`.
    ///
    /// The page pitch is `page_width + spacing`. A positive velocity rounds the
    /// predicted offset up to the next pitch multiple, a negative velocity
    /// rounds it down, and an exactly zero velocity rounds to the nearest
    /// multiple. The asymmetric rounding guarantees that a deliberate flick
    /// always advances at least one page.
    ///
    /// A non-positive pitch or page width leaves the offset where it is.
    #[must_use]
    pub fn plan(&self, offset: f64, velocity: f64, page_width: f64, spacing: f64) -> SnapPlan {
        let pitch = page_width + spacing;
        if !(pitch > 0.0 && page_width > 0.0) {
            return SnapPlan {
                target_offset: offset,
                page_index: 0,
            };
        }

        let speed = if velocity > 0.0 {
            self.flick_speed
        } else if velocity < 0.0 {
            -self.flick_speed
        } else {
            0.0
        };

        let predicted = offset + speed * self.momentum;
        let pages = predicted / pitch;
        let snapped = if speed > 0.0 {
            pages.ceil()
        } else if speed < 0.0 {
            pages.floor()
        } else {
            pages.round()
        };
        let target_offset = snapped * pitch;

        #[expect(
            clippy::cast_possible_truncation,
            reason = "Page indices are far below isize::MAX; callers clamp immediately after"
        )]
        let page_index = (target_offset / page_width).round() as isize;

        SnapPlan {
            target_offset,
            page_index,
        }
    }
}

/// Plans a snap with the default [`SnapConfig`].
#[must_use]
pub fn plan_snap(offset: f64, velocity: f64, page_width: f64, spacing: f64) -> SnapPlan {
    SnapConfig::default().plan(offset, velocity, page_width, spacing)
}

/// Content offset at which page `index` is aligned with the viewport.
#[must_use]
pub fn page_offset(index: usize, page_width: f64, spacing: f64) -> f64 {
    index as f64 * (page_width + spacing)
}
