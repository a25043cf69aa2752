// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome visibility state machine.

/// Whether a piece of chrome is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// Showing.
    #[default]
    Visible,
    /// Faded out.
    Hidden,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Visible`].
    #[must_use]
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }

    /// Returns the opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    fn from_visible(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

/// What changed when the caption expanded or collapsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaptionChromeChange {
    /// New overlay visibility, if it changed.
    pub overlay: Option<Visibility>,
    /// New delete control visibility, if it changed.
    pub delete_control: Option<bool>,
}

/// Visibility of the viewer chrome.
///
/// Three independent pieces are tracked:
/// - the *controls* (header, footer and play button), toggled by taps and
///   zooming;
/// - the *overlay* behind the footer, shown while the caption is expanded;
/// - the *delete control*, hidden while the caption is expanded.
///
/// Every transition reports whether anything changed so callers only emit
/// notifications for real changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chrome {
    controls: Visibility,
    overlay: Visibility,
    restore_overlay: Option<Visibility>,
    delete_control: bool,
}

impl Default for Chrome {
    fn default() -> Self {
        Self::new()
    }
}

impl Chrome {
    /// Controls visible, overlay hidden, delete control visible.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            controls: Visibility::Visible,
            overlay: Visibility::Hidden,
            restore_overlay: None,
            delete_control: true,
        }
    }

    /// Visibility of header, footer and play button.
    #[must_use]
    pub fn controls(&self) -> Visibility {
        self.controls
    }

    /// Visibility of the background overlay.
    #[must_use]
    pub fn overlay(&self) -> Visibility {
        self.overlay
    }

    /// Whether the delete control is showing.
    #[must_use]
    pub fn is_delete_control_visible(&self) -> bool {
        self.delete_control
    }

    /// Flips the controls, as a plain tap on an unzoomed page does.
    pub fn toggle_controls(&mut self) -> Visibility {
        self.controls = self.controls.toggled();
        self.controls
    }

    /// Sets the controls. Returns `true` if they changed.
    pub fn set_controls(&mut self, controls: Visibility) -> bool {
        if self.controls == controls {
            return false;
        }
        self.controls = controls;
        true
    }

    /// Hides the controls while zoomed and shows them again at the baseline.
    ///
    /// Returns `true` if they changed.
    pub fn zoom_changed(&mut self, zoomed: bool) -> bool {
        self.set_controls(Visibility::from_visible(!zoomed))
    }

    /// Tracks the caption's expanded state.
    ///
    /// Expanding shows the overlay and remembers what it was before;
    /// collapsing restores that state.
    pub fn caption_expanded(&mut self, expanded: bool) -> CaptionChromeChange {
        let overlay_before = self.overlay;
        let delete_before = self.delete_control;

        if expanded {
            if self.restore_overlay.is_none() {
                self.restore_overlay = Some(self.overlay);
            }
            self.overlay = Visibility::Visible;
        } else if let Some(restore) = self.restore_overlay.take() {
            self.overlay = restore;
        }
        self.delete_control = !expanded;

        CaptionChromeChange {
            overlay: (self.overlay != overlay_before).then_some(self.overlay),
            delete_control: (self.delete_control != delete_before).then_some(self.delete_control),
        }
    }
}
