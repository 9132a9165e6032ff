/// Thumbnail strip for narrow layouts
///
/// Lists every gallery image regardless of the current index. Pressing
/// one selects it and opens the lightbox.
use iced::widget::{button, image, scrollable, Row};
use iced::{ContentFit, Element, Length};

use super::style;
use crate::state::card::{CardMessage, CardState};

const THUMB_WIDTH: f32 = 96.0;
const THUMB_HEIGHT: f32 = 64.0;

pub fn view(card: &CardState) -> Element<'_, CardMessage> {
    let thumbs = Row::with_children((0..card.gallery.len()).filter_map(|index| {
        let path = card.thumbnail(index)?;

        Some(
            button(
                image(image::Handle::from_path(path))
                    .width(Length::Fixed(THUMB_WIDTH))
                    .height(Length::Fixed(THUMB_HEIGHT))
                    .content_fit(ContentFit::Cover),
            )
            .on_press(CardMessage::ThumbnailPressed(index))
            .padding(2)
            .style(style::thumbnail)
            .into(),
        )
    }))
    .spacing(8);

    scrollable(thumbs)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}
