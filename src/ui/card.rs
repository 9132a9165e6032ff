/// Card shell: text, links and tags around the gallery
use iced::widget::{button, column, container, image, mouse_area, row, text, Column, Row};
use iced::{mouse, Alignment, Element, Length, Pixels};
use iced_aw::Wrap;
use std::time::Instant;

use super::{carousel, strip, style, Layout};
use crate::state::card::{CardMessage, CardState};
use crate::state::data::{IconSource, LinkKind, Links, TechIcon};

const MAX_CARD_WIDTH: f32 = 960.0;
const ICON_SIZE: f32 = 18.0;

pub fn view(card: &CardState, layout: Layout, now: Instant) -> Element<'_, CardMessage> {
    let data = &card.data;

    let mut details = column![text(&data.title).size(24), made_with(&data.icons)]
        .spacing(12)
        .push(text(&data.description).size(15));

    if !data.features.is_empty() {
        details = details.push(features(&data.features));
    }
    details = details.push_maybe(links(&data.links));
    if !data.tags.is_empty() {
        details = details.push(tags(&data.tags));
    }

    let body: Element<'_, CardMessage> = match layout {
        Layout::Wide => row![
            details.width(Length::FillPortion(45)),
            container(carousel::inline(card, now)).width(Length::FillPortion(55)),
        ]
        .spacing(32)
        .align_y(Alignment::Center)
        .into(),
        Layout::Narrow => column![details, strip::view(card)].spacing(16).into(),
    };

    let shell = container(body)
        .padding(24)
        .width(Length::Fill)
        .max_width(MAX_CARD_WIDTH)
        .style(style::card);

    // Only the designated card doubles as a navigation link. Carousel
    // buttons capture their own presses, so they never reach this area.
    if card.is_link() {
        mouse_area(shell)
            .on_press(CardMessage::Activate)
            .interaction(mouse::Interaction::Pointer)
            .into()
    } else {
        shell.into()
    }
}

fn made_with(icons: &[TechIcon]) -> Element<'_, CardMessage> {
    let mut entries: Vec<Element<'_, CardMessage>> = vec![text("Made with:").size(14).into()];

    entries.extend(icons.iter().map(|icon| match &icon.source {
        IconSource::Image(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(ICON_SIZE))
            .height(Length::Fixed(ICON_SIZE))
            .into(),
        IconSource::Symbol(_) => container(text(icon.caption()).size(12))
            .padding([2, 8])
            .style(style::chip)
            .into(),
    }));

    Wrap::with_elements(entries)
        .spacing(Pixels(8.0))
        .line_spacing(Pixels(6.0))
        .into()
}

fn features(features: &[String]) -> Element<'_, CardMessage> {
    Column::with_children(features.iter().map(|feature| {
        row![text("•").size(14), text(feature).size(14)]
            .spacing(8)
            .into()
    }))
    .spacing(6)
    .into()
}

fn links(links: &Links) -> Option<Element<'_, CardMessage>> {
    let present = links.present();
    if present.is_empty() {
        return None;
    }

    let buttons = present.into_iter().map(|kind| {
        let (label, filled) = match kind {
            LinkKind::Live => ("↗ Live", true),
            LinkKind::Demo => ("▶ Demo", true),
            LinkKind::Source => ("GitHub", false),
        };

        let link = button(text(label).size(14))
            .on_press(CardMessage::OpenLink(kind))
            .padding([8, 16]);

        if filled {
            link.style(style::link_filled).into()
        } else {
            link.style(style::link_outlined).into()
        }
    });

    Some(Row::with_children(buttons).spacing(8).into())
}

fn tags(tags: &[String]) -> Element<'_, CardMessage> {
    let chips: Vec<Element<'_, CardMessage>> = tags
        .iter()
        .map(|tag| {
            container(text(tag).size(12))
                .padding([2, 10])
                .style(style::chip)
                .into()
        })
        .collect();

    Wrap::with_elements(chips)
        .spacing(Pixels(6.0))
        .line_spacing(Pixels(6.0))
        .into()
}
