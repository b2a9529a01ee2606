// SPDX-License-Identifier: MPL-2.0
//! Orientation selection for the adaptive screen layout.
//!
//! The mode is derived from the render size on every pass and never stored,
//! so a window resize or device rotation simply produces a different value
//! on the next render.

use iced::Size;

/// The two compositions the screen can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationMode {
    /// Artwork stacked above the navigation controls.
    Portrait,
    /// Artwork and navigation controls side by side.
    Landscape,
}

/// Chooses the layout for the given available render size.
///
/// A surface wider than it is tall selects [`OrientationMode::Landscape`];
/// a square surface counts as portrait.
#[must_use]
pub fn select_layout(available: Size) -> OrientationMode {
    if available.width > available.height {
        OrientationMode::Landscape
    } else {
        OrientationMode::Portrait
    }
}
