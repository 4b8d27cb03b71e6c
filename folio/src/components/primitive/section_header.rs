use iced::widget::{column, container, text};
use iced::{Element, Length, alignment};

use crate::content::SectionCopy;
use crate::fonts::FontsConfig;
use crate::theme::ThemeProps;

const UNDERLINE_WIDTH: f32 = 80.0;
const UNDERLINE_HEIGHT: f32 = 4.0;
const SUBTITLE_MAX_WIDTH: f32 = 680.0;
const HEADER_SPACING: f32 = 12.0;

/// Props for rendering a section title block.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SectionHeaderProps<'a> {
    pub(crate) copy: SectionCopy,
    pub(crate) height: f32,
    pub(crate) title_size: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a centered title with an accent underline and a subtitle.
pub(crate) fn view<'a, Message: 'a>(
    props: SectionHeaderProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;

    let title = text(props.copy.title)
        .size(props.title_size)
        .font(props.fonts.heading.font_type)
        .color(accent)
        .align_x(alignment::Horizontal::Center);

    let underline = container(text(""))
        .width(Length::Fixed(UNDERLINE_WIDTH))
        .height(Length::Fixed(UNDERLINE_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(accent.into()),
            border: iced::Border {
                radius: (UNDERLINE_HEIGHT / 2.0).into(),
                ..iced::Border::default()
            },
            ..Default::default()
        });

    let subtitle = text(props.copy.subtitle)
        .size(props.fonts.ui.size)
        .color(palette.dim_foreground)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let content = column![
        title,
        underline,
        container(subtitle).max_width(SUBTITLE_MAX_WIDTH),
    ]
    .spacing(HEADER_SPACING)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .into()
}
