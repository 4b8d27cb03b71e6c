use iced::widget::container;
use iced::{Element, Length, Theme};

use crate::theme::{ThemeProps, with_alpha};

const CARD_PADDING: f32 = 24.0;
const CARD_RADIUS: f32 = 12.0;

/// Props for rendering a content card.
pub(crate) struct CardProps<'a, Message> {
    pub(crate) content: Element<'a, Message, Theme, iced::Renderer>,
    pub(crate) height: Length,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a translucent bordered card around `content`.
pub(crate) fn view<'a, Message: 'a>(
    props: CardProps<'a, Message>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let background = props
        .theme
        .overrides
        .and_then(|overrides| overrides.background)
        .unwrap_or(with_alpha(palette.surface, 0.5));
    let radius = props
        .theme
        .overrides
        .and_then(|overrides| overrides.border_radius)
        .unwrap_or(CARD_RADIUS);
    let border = with_alpha(palette.dim_accent, 0.3);
    let foreground = palette.foreground;

    container(props.content)
        .width(Length::Fill)
        .height(props.height)
        .padding(CARD_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: radius.into(),
            },
            ..Default::default()
        })
        .into()
}
