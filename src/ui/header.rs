/// Header bar with the section links and the theme toggle
use iced::alignment::Horizontal;
use iced::widget::{button, container, row, text, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::navigation::{NavigationState, Section};
use crate::Message;

pub fn view<'a>(navigation: &NavigationState, dark: bool) -> Element<'a, Message> {
    let links = Row::with_children(Section::ALL.iter().map(|section| {
        let active = *section == navigation.active_section;

        button(text(section.name()).size(14))
            .on_press(Message::SectionSelected(*section))
            .padding([6, 12])
            .style(style::header_link(active))
            .into()
    }))
    .spacing(4);

    let toggle = button(text(if dark { "☾" } else { "☀" }).size(14))
        .on_press(Message::ToggleTheme)
        .padding([6, 12])
        .style(style::header_link(false));

    container(row![links, toggle].spacing(12).align_y(Alignment::Center))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(12)
        .style(style::header)
        .into()
}
