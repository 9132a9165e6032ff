/// Full-viewport lightbox overlay
///
/// The content region is wrapped in `opaque` and reports its own presses
/// as `PressRegion::Content`, so only the surrounding backdrop dismisses.
use iced::widget::{button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Element, Length};
use std::time::Instant;

use super::carousel::{arrow, current_image, dots};
use super::style;
use crate::state::card::{CardMessage, CardState};
use crate::state::lightbox::PressRegion;

/// Widest the content panel grows on large screens
const MAX_CONTENT_WIDTH: f32 = 1200.0;

/// The overlay layer for a card whose lightbox session is open
pub fn overlay(card: &CardState, now: Instant) -> Element<'_, CardMessage> {
    let close = button(text("✕").size(18))
        .on_press(CardMessage::CloseLightbox)
        .padding([4, 10])
        .style(style::nav_button(true));

    let title = row![text(&card.data.title).size(18), horizontal_space(), close].align_y(Alignment::Center);

    let mut body = column![title, current_image(card, Length::Fill, now)]
        .spacing(12)
        .height(Length::Fill);

    if card.has_navigation() {
        body = body.push(
            row![
                arrow("‹", CardMessage::Previous, true),
                horizontal_space(),
                dots(card, true),
                horizontal_space(),
                arrow("›", CardMessage::Next, true),
            ]
            .align_y(Alignment::Center),
        );
    }

    let content = mouse_area(
        container(body)
            .padding(16)
            .max_width(MAX_CONTENT_WIDTH)
            .style(style::lightbox_content),
    )
    .on_press(CardMessage::LightboxPressed(PressRegion::Content));

    let backdrop = mouse_area(center(opaque(content)).padding(32).style(style::backdrop))
        .on_press(CardMessage::LightboxPressed(PressRegion::Backdrop));

    opaque(backdrop)
}

/// Layer `overlay` over `base`, covering the whole viewport
pub fn modal<'a, Message: 'a>(base: Element<'a, Message>, overlay: Element<'a, Message>) -> Element<'a, Message> {
    stack![base, overlay].into()
}
