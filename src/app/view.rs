// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The top-level render reads the size the `responsive` widget reports,
//! selects the portrait or landscape composition from it, and hands the
//! resolved artwork to the chosen layout. Orientation is recomputed on
//! every render pass and never stored.

use super::Message;
use crate::catalog::Catalog;
use crate::i18n::fluent::I18n;
use crate::orientation::{self, OrientationMode};
use crate::ui::layout;
use iced::widget::responsive;
use iced::{Element, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub current_index: usize,
}

/// Renders the screen for the current cursor and available size.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    responsive(move |available: Size| {
        let layout_ctx = layout::ViewContext {
            i18n: ctx.i18n,
            artwork: ctx.catalog.get(ctx.current_index),
            current_index: ctx.current_index,
            total_count: ctx.catalog.count().get(),
        };

        let screen = match orientation::select_layout(available) {
            OrientationMode::Portrait => layout::portrait(layout_ctx),
            OrientationMode::Landscape => layout::landscape(layout_ctx),
        };

        screen.map(Message::Controls)
    })
    .into()
}
