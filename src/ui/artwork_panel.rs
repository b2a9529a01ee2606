// SPDX-License-Identifier: MPL-2.0
//! Artwork display panel: a card showing one artwork's image, title, and
//! description.
//!
//! The panel receives the already-resolved [`Artwork`]; which artwork is
//! selected is decided upstream. It is generic over the message type, so it
//! cannot emit navigation messages or observe the cursor.

use crate::catalog::Artwork;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Image, Text};
use iced::{alignment::Horizontal, ContentFit, Element, Length};

/// Renders a single artwork inside a card surface.
pub fn view<'a, M: 'a>(artwork: &'a Artwork) -> Element<'a, M> {
    let image = Image::new(artwork.image().clone())
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fill);

    let title = Text::new(artwork.title()).size(typography::TITLE_MD);

    let mut card = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(image)
        .push(title);

    if !artwork.description().is_empty() {
        card = card.push(
            Text::new(artwork.description())
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    Container::new(card)
        .padding(spacing::MD)
        .style(styles::container::card)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
