// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used by the artwork display panel.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so the card stays readable in both light and dark modes
/// without hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
