/// Inline carousel: the image panel on wide layouts
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, horizontal_space, image, mouse_area, row, stack, text, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};
use std::time::Instant;

use super::style;
use crate::state::card::{CardMessage, CardState};
use crate::state::gallery::Direction;

/// Height of the inline image panel
const INLINE_HEIGHT: f32 = 320.0;

/// Horizontal travel of the slide effect, in logical pixels
const SLIDE_DISTANCE: f32 = 10.0;

/// Opacity and signed horizontal shift of the entering image at `now`.
/// Positive shifts come in from the right.
pub fn slide(card: &CardState, now: Instant) -> (f32, f32) {
    let Some(transition) = card.carousel.transition() else {
        return (1.0, 0.0);
    };

    let progress = transition.progress_at(now);
    let shift = (1.0 - progress) * SLIDE_DISTANCE;

    match transition.direction {
        Direction::Forward => (progress, shift),
        Direction::Backward => (progress, -shift),
    }
}

/// The image at the shared index, mid-slide if a transition is running
pub fn current_image<'a>(card: &'a CardState, height: Length, now: Instant) -> Element<'a, CardMessage> {
    let (opacity, shift) = slide(card, now);

    let picture = image(image::Handle::from_path(card.current_image()))
        .width(Length::Fill)
        .height(height)
        .content_fit(ContentFit::Contain)
        .opacity(opacity);

    row![
        Space::with_width(shift.max(0.0)),
        picture,
        Space::with_width((-shift).max(0.0)),
    ]
    .into()
}

pub fn arrow<'a>(glyph: &'static str, message: CardMessage, revealed: bool) -> Element<'a, CardMessage> {
    button(text(glyph).size(22))
        .on_press(message)
        .padding([2, 12])
        .style(style::nav_button(revealed))
        .into()
}

/// One dot per image; the current one is drawn wider
pub fn dots<'a>(card: &CardState, revealed: bool) -> Element<'a, CardMessage> {
    let current = card.carousel.index();

    Row::with_children((0..card.gallery.len()).map(|index| {
        let active = index == current;
        let width = if active { 24.0 } else { 6.0 };

        button(Space::new(Length::Fixed(width), Length::Fixed(6.0)))
            .on_press(CardMessage::GoTo(index))
            .padding(0)
            .style(style::dot(active, revealed))
            .into()
    }))
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

/// Image panel with hover-revealed arrows and dots.
/// Single-image galleries get no controls at all.
pub fn inline(card: &CardState, now: Instant) -> Element<'_, CardMessage> {
    let picture = container(current_image(card, Length::Fixed(INLINE_HEIGHT), now))
        .width(Length::Fill)
        .padding(4)
        .style(style::image_frame);

    let mut layers = stack![picture];

    if card.has_navigation() {
        let revealed = card.hover.reveals_controls();

        let arrows = container(
            row![
                arrow("‹", CardMessage::Previous, revealed),
                horizontal_space(),
                arrow("›", CardMessage::Next, revealed),
            ]
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .padding([0, 8]);

        let indicator = container(dots(card, revealed))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(12);

        layers = layers.push(arrows).push(indicator);
    }

    mouse_area(layers)
        .on_enter(CardMessage::PointerEntered)
        .on_exit(CardMessage::PointerLeft)
        .into()
}
