/// Widget styles shared by the card, carousel, lightbox and header
use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

const PILL: f32 = 999.0;

/// Card container; brightened slightly in the dark theme
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: Color {
                a: 0.1,
                ..palette.background.strong.color
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Frame around the inline carousel image
pub fn image_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 2.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..container::Style::default()
    }
}

/// Small rounded chip used for tags and symbolic icons
pub fn chip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.strong.color.into()),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: PILL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Dimmed full-viewport layer behind the lightbox
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

pub fn lightbox_content(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..palette.background.base.color
            }
            .into(),
        ),
        shadow: Shadow {
            color: Color {
                a: 0.05,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Round previous/next button. While `revealed` is false it is drawn fully
/// transparent but stays in the layout.
pub fn nav_button(revealed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if !revealed {
            return button::Style {
                background: None,
                text_color: Color::TRANSPARENT,
                border: Border::default(),
                shadow: Shadow::default(),
            };
        }

        let palette = theme.extended_palette();
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => 1.0,
            _ => 0.9,
        };

        button::Style {
            background: Some(
                Color {
                    a: alpha,
                    ..palette.background.base.color
                }
                .into(),
            ),
            text_color: palette.background.base.text,
            border: Border {
                radius: PILL.into(),
                ..Border::default()
            },
            shadow: Shadow {
                color: Color {
                    a: 0.3,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, 2.0),
                blur_radius: 6.0,
            },
        }
    }
}

/// Position indicator dot
pub fn dot(active: bool, revealed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| {
        let alpha = match (revealed, active) {
            (false, _) => 0.0,
            (true, true) => 1.0,
            (true, false) => 0.5,
        };

        button::Style {
            background: Some(Color { a: alpha, ..Color::WHITE }.into()),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: PILL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}

pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
        _ => palette.background.strong.color,
    };

    button::Style {
        background: None,
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
    }
}

/// Filled pill for "Live" and "Demo" links
pub fn link_filled(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb8(0x1f, 0x29, 0x37),
        _ => Color::from_rgb8(0x11, 0x18, 0x27),
    };

    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            radius: PILL.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Outlined pill for the source link
pub fn link_outlined(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.base.text,
        _ => Color {
            a: 0.7,
            ..palette.background.base.text
        },
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: text_color,
            width: 1.0,
            radius: PILL.into(),
        },
        shadow: Shadow::default(),
    }
}

pub fn header_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let background = if active {
            Some(palette.background.strong.color.into())
        } else {
            None
        };
        let text_color = match (active, status) {
            (true, _) | (_, button::Status::Hovered) => palette.background.base.text,
            _ => Color {
                a: 0.6,
                ..palette.background.base.text
            },
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: PILL.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        }
    }
}
