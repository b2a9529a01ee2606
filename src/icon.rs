// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Decodes the embedded PNG branding asset into an RGBA icon for the window
//! title bar. Falls back to `None` if decoding fails.

use iced::window::{icon, Icon};

/// Decode the embedded PNG icon.
/// Returns `None` if parsing fails.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the PNG so packaging does not need to locate assets on disk.
    const ICON_BYTES: &[u8] = include_bytes!("../assets/branding/art_space.png");

    icon::from_file_data(ICON_BYTES, None).ok()
}
