// SPDX-License-Identifier: MPL-2.0
//! Navigation controls: the "Previous" and "Next" buttons.
//!
//! The buttons only ever request a step; the resulting index is computed by
//! `NavigationState`, the single owner of the cursor. Activation therefore
//! has exactly one side effect upstream: a cursor update and re-render.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Horizontal, Element};

/// Messages emitted by the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Step back one artwork, wrapping past the start.
    Previous,
    /// Step forward one artwork, wrapping past the end.
    Next,
}

/// Context required to render the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Zero-based index of the artwork on display.
    pub current_index: usize,
    /// Catalog size, for the position counter.
    pub total_count: usize,
}

/// Renders the button row with a position counter underneath.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let previous = button(Text::new(ctx.i18n.tr("nav-previous")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Previous);

    let next = button(Text::new(ctx.i18n.tr("nav-next")).size(typography::BODY))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Next);

    let buttons = Row::new().spacing(spacing::LG).push(previous).push(next);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(buttons);

    // Counter is pointless for a single-artwork catalog
    if ctx.total_count > 1 {
        let position = format!("{}/{}", ctx.current_index + 1, ctx.total_count);
        content = content.push(
            Text::new(position)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    content.into()
}
