use iced::widget::{Space, button, row, svg, text};
use iced::{Element, Length, alignment};

use crate::fonts::FontsConfig;
use crate::theme::{ThemeProps, with_alpha};

const LINK_BUTTON_PADDING: [f32; 2] = [12.0, 24.0];
const LINK_BUTTON_ICON_SIZE: f32 = 18.0;
const LINK_BUTTON_SPACING: f32 = 8.0;
const LINK_BUTTON_RADIUS: f32 = 8.0;

/// UI events emitted by a link button.
#[derive(Debug, Clone)]
pub(crate) enum LinkButtonEvent {
    Pressed,
}

/// Visual variants for a link button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinkButtonVariant {
    Primary,
    Outline,
}

/// Props for rendering a text button with an optional leading icon.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LinkButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: Option<&'static [u8]>,
    pub(crate) variant: LinkButtonVariant,
    pub(crate) fill_width: bool,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a call-to-action button.
pub(crate) fn view<'a>(props: LinkButtonProps<'a>) -> Element<'a, LinkButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;
    let bright_accent = palette.bright_accent;
    let deep_accent = palette.deep_accent;
    let bright_foreground = palette.bright_foreground;
    let variant = props.variant;

    let icon_color = match variant {
        LinkButtonVariant::Primary => bright_foreground,
        LinkButtonVariant::Outline => accent,
    };

    let mut content = row![]
        .spacing(LINK_BUTTON_SPACING)
        .align_y(alignment::Vertical::Center);
    if props.fill_width {
        content = content.push(Space::new().width(Length::Fill));
    }
    if let Some(icon) = props.icon {
        content = content.push(
            svg::Svg::new(svg::Handle::from_memory(icon))
                .width(Length::Fixed(LINK_BUTTON_ICON_SIZE))
                .height(Length::Fixed(LINK_BUTTON_ICON_SIZE))
                .style(move |_, _| svg::Style {
                    color: Some(icon_color),
                }),
        );
    }
    content = content.push(
        text(props.label.to_string())
            .size(props.fonts.ui.size)
            .font(props.fonts.heading.font_type),
    );
    if props.fill_width {
        content = content.push(Space::new().width(Length::Fill));
    }

    let width = if props.fill_width {
        Length::Fill
    } else {
        Length::Shrink
    };

    button(content)
        .on_press(LinkButtonEvent::Pressed)
        .padding(LINK_BUTTON_PADDING)
        .width(width)
        .style(move |_, status| {
            let hovered = matches!(status, button::Status::Hovered);
            let (background, text_color, border_color) = match variant {
                LinkButtonVariant::Primary => (
                    if hovered { bright_accent } else { accent },
                    bright_foreground,
                    accent,
                ),
                LinkButtonVariant::Outline => (
                    if hovered {
                        with_alpha(deep_accent, 0.6)
                    } else {
                        iced::Color::TRANSPARENT
                    },
                    accent,
                    accent,
                ),
            };

            button::Style {
                background: Some(background.into()),
                text_color,
                border: iced::Border {
                    width: 1.0,
                    color: border_color,
                    radius: LINK_BUTTON_RADIUS.into(),
                },
                ..button::Style::default()
            }
        })
        .into()
}
