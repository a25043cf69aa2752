// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Scales `content` to fit inside `bounds`, preserving its aspect ratio.
///
/// The result touches `bounds` on the limiting axis. Degenerate inputs (any
/// non-positive dimension) produce [`Size::ZERO`].
#[must_use]
pub fn aspect_fit(content: Size, bounds: Size) -> Size {
    if !(content.width > 0.0 && content.height > 0.0 && bounds.width > 0.0 && bounds.height > 0.0) {
        return Size::ZERO;
    }
    if content.width / content.height > bounds.width / bounds.height {
        Size::new(bounds.width, bounds.width / content.width * content.height)
    } else {
        Size::new(bounds.height / content.height * content.width, bounds.height)
    }
}

/// Positions content of `size` inside `bounds`.
///
/// Each axis is centered while the content is smaller than the bounds and
/// pinned to the origin otherwise, which is what keeps a zoomed-out image in
/// the middle of its page while a zoomed-in one scrolls edge to edge.
#[must_use]
pub fn center_content(size: Size, bounds: Size) -> Rect {
    let x = if size.width < bounds.width {
        (bounds.width - size.width) / 2.0
    } else {
        0.0
    };
    let y = if size.height < bounds.height {
        (bounds.height - size.height) / 2.0
    } else {
        0.0
    };
    Rect::from_origin_size(Point::new(x, y), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_content_is_width_limited() {
        let fitted = aspect_fit(Size::new(2000.0, 1000.0), Size::new(400.0, 800.0));
        assert_eq!(fitted, Size::new(400.0, 200.0));
    }

    #[test]
    fn tall_content_is_height_limited() {
        let fitted = aspect_fit(Size::new(1000.0, 4000.0), Size::new(400.0, 800.0));
        assert_eq!(fitted, Size::new(200.0, 800.0));
    }

    #[test]
    fn degenerate_sizes_fit_to_zero() {
        assert_eq!(aspect_fit(Size::ZERO, Size::new(400.0, 800.0)), Size::ZERO);
        assert_eq!(aspect_fit(Size::new(10.0, 10.0), Size::new(0.0, 800.0)), Size::ZERO);
    }

    #[test]
    fn small_content_is_centered() {
        let rect = center_content(Size::new(400.0, 200.0), Size::new(400.0, 800.0));
        assert_eq!(rect, Rect::new(0.0, 300.0, 400.0, 500.0));
    }

    #[test]
    fn large_content_is_pinned_to_origin() {
        let rect = center_content(Size::new(1200.0, 600.0), Size::new(400.0, 800.0));
        assert_eq!(rect, Rect::new(0.0, 100.0, 1200.0, 700.0));
    }
}
