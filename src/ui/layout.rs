// SPDX-License-Identifier: MPL-2.0
//! Portrait and landscape screen compositions.
//!
//! Both layouts render the same two regions, the artwork display panel and
//! the navigation controls; only the arrangement and proportions differ.
//! Index arithmetic never happens here: the controls' messages pass through
//! unchanged.

use crate::catalog::Artwork;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::{artwork_panel, controls};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Row};
use iced::{Element, Length};

/// Context required to render either composition.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: &'a Artwork,
    pub current_index: usize,
    pub total_count: usize,
}

/// Panel stacked above the controls; the panel takes the dominant share of
/// the vertical space.
pub fn portrait(ctx: ViewContext<'_>) -> Element<'_, controls::Message> {
    let panel = Container::new(artwork_panel::view(ctx.artwork))
        .width(Length::Fill)
        .height(Length::FillPortion(7));

    let nav = Container::new(controls_view(&ctx))
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(panel)
        .push(nav)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Panel and controls side by side, each taking roughly half the width.
pub fn landscape(ctx: ViewContext<'_>) -> Element<'_, controls::Message> {
    let panel = Container::new(artwork_panel::view(ctx.artwork))
        .width(Length::FillPortion(1))
        .height(Length::Fill);

    let nav = Container::new(controls_view(&ctx))
        .width(Length::FillPortion(1))
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(panel)
        .push(nav)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn controls_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, controls::Message> {
    controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        current_index: ctx.current_index,
        total_count: ctx.total_count,
    })
}
