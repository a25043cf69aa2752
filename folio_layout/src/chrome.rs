// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header and footer geometry.

use kurbo::{Point, Rect, Size};

/// Fixed spacing and control sizes used when laying out the chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChromeConfig {
    /// Horizontal inset of header buttons and the caption from the viewport
    /// edges.
    pub edge_inset: f64,
    /// Distance from the top of the viewport to the header.
    pub header_top: f64,
    /// Footer height on top of the caption height.
    pub footer_padding: f64,
    /// Height of the separator line above the page indicator.
    pub separator_height: f64,
    /// Gap between the caption and the separator.
    pub caption_gap: f64,
    /// Gap between the separator and the page indicator.
    pub separator_gap: f64,
    /// Gap between the page indicator and the bottom of the footer.
    pub page_label_gap: f64,
    /// Size of the save button.
    pub save_button: Size,
    /// Distance from the top of the footer to the save button.
    pub save_button_top: f64,
    /// Size of the play button drawn over video pages.
    pub play_button: Size,
    /// Whether the "3/10" page indicator is laid out.
    pub show_page_indicator: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            edge_inset: 17.0,
            header_top: 16.0,
            footer_padding: 40.0,
            separator_height: 0.5,
            caption_gap: 15.0,
            separator_gap: 2.0,
            page_label_gap: 2.0,
            save_button: Size::new(50.0, 50.0),
            save_button_top: 10.0,
            play_button: Size::new(60.0, 60.0),
            show_page_indicator: false,
        }
    }
}

/// Intrinsic sizes of the chrome content, measured by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeMetrics {
    /// Size of the close button.
    pub close_button: Size,
    /// Size of the delete button.
    pub delete_button: Size,
    /// Height of the caption as currently rendered (collapsed or expanded).
    pub caption_height: f64,
    /// Size of the page indicator label.
    pub page_label: Size,
}

impl Default for ChromeMetrics {
    fn default() -> Self {
        Self {
            close_button: Size::new(60.0, 25.0),
            delete_button: Size::new(70.0, 25.0),
            caption_height: 0.0,
            page_label: Size::ZERO,
        }
    }
}

/// Header frames, in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeaderLayout {
    /// The header bar.
    pub frame: Rect,
    /// Close button, at the trailing edge.
    pub close_button: Rect,
    /// Delete button, at the leading edge.
    pub delete_button: Rect,
}

/// Footer frames, in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLayout {
    /// The footer bar, anchored to the bottom of the viewport.
    pub frame: Rect,
    /// Caption label.
    pub caption: Rect,
    /// Hairline separator between caption and page indicator.
    pub separator: Rect,
    /// Page indicator, when enabled.
    pub page_label: Option<Rect>,
    /// Save button, centered at the top of the footer.
    pub save_button: Rect,
}

impl ChromeConfig {
    /// Lays out the header at the top of `viewport`.
    ///
    /// The header is as tall as the taller of its two buttons.
    #[must_use]
    pub fn header(&self, viewport: Rect, metrics: &ChromeMetrics) -> HeaderLayout {
        let height = metrics.close_button.height.max(metrics.delete_button.height);
        let frame = Rect::from_origin_size(
            Point::new(viewport.x0, viewport.y0 + self.header_top),
            Size::new(viewport.width(), height),
        );
        let close_button = Rect::from_origin_size(
            Point::new(frame.x1 - metrics.close_button.width - self.edge_inset, frame.y0),
            metrics.close_button,
        );
        let delete_button = Rect::from_origin_size(
            Point::new(frame.x0 + self.edge_inset, frame.y0),
            metrics.delete_button,
        );
        HeaderLayout {
            frame,
            close_button,
            delete_button,
        }
    }

    /// Lays out the footer at the bottom of `viewport`.
    ///
    /// From the bottom up: page indicator, separator, caption. The footer
    /// height is the caption height plus the fixed padding and separator, so
    /// expanding the caption grows the footer upwards.
    #[must_use]
    pub fn footer(&self, viewport: Rect, metrics: &ChromeMetrics) -> FooterLayout {
        let caption_height = metrics.caption_height.max(0.0);
        let height = caption_height + self.footer_padding + self.separator_height;
        let width = viewport.width();
        let frame = Rect::from_origin_size(
            Point::new(viewport.x0, viewport.y1 - height),
            Size::new(width, height),
        );

        let label = metrics.page_label;
        let label_origin = Point::new(
            frame.x0 + (width - label.width) / 2.0,
            frame.y1 - label.height - self.page_label_gap,
        );
        let page_label = Rect::from_origin_size(label_origin, label);

        let separator = Rect::from_origin_size(
            Point::new(frame.x0, label_origin.y - self.separator_gap - self.separator_height),
            Size::new(width, self.separator_height),
        );

        let caption = Rect::from_origin_size(
            Point::new(
                frame.x0 + self.edge_inset,
                separator.y0 - caption_height - self.caption_gap,
            ),
            Size::new(self.caption_width(width), caption_height),
        );

        let save_button = Rect::from_origin_size(
            Point::new(
                frame.x0 + (width - self.save_button.width) / 2.0,
                frame.y0 + self.save_button_top,
            ),
            self.save_button,
        );

        FooterLayout {
            frame,
            caption,
            separator,
            page_label: self.show_page_indicator.then_some(page_label),
            save_button,
        }
    }

    /// Width available to the caption for a viewport of `viewport_width`.
    ///
    /// Captions must be measured at this width for the fitted text to match
    /// the caption frame.
    #[must_use]
    pub fn caption_width(&self, viewport_width: f64) -> f64 {
        (viewport_width - 2.0 * self.edge_inset).max(0.0)
    }
}
