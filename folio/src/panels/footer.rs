use chrono::Datelike;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::content::{BUILT_WITH, CONTACT, PROFILE, SOCIAL_LINKS};
use crate::fonts::FontsConfig;
use crate::icons;
use crate::layout::{CONTENT_MAX_WIDTH, PAGE_PADDING_X};
use crate::theme::{ThemeProps, with_alpha};

const FOOTER_SPACING: f32 = 16.0;
const SOCIAL_SPACING: f32 = 16.0;
const SOCIAL_BUTTON_SIZE: f32 = 36.0;
const SOCIAL_ICON_SIZE: f32 = 20.0;
const SEPARATOR_HEIGHT: f32 = 1.0;

/// Events emitted by the footer.
#[derive(Debug, Clone)]
pub(crate) enum FooterEvent {
    OpenLink(String),
}

/// Props for rendering the footer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FooterProps<'a> {
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Copyright line for the current calendar year.
fn copyright_line(year: i32) -> String {
    format!("\u{a9} {year} {}. All rights reserved.", PROFILE.full_name())
}

/// Render the page footer.
pub(crate) fn view<'a>(props: FooterProps<'a>) -> Element<'a, FooterEvent> {
    let palette = props.theme.theme.iced_palette();
    let border = with_alpha(palette.dim_accent, 0.3);
    let separator_color = palette.border;
    let surface = palette.background;

    let copyright = text(copyright_line(chrono::Local::now().year()))
        .size(props.fonts.ui.size * 0.9)
        .color(palette.dim_foreground)
        .align_x(alignment::Horizontal::Center);

    let links = SOCIAL_LINKS
        .iter()
        .map(|link| (icons::social_icon(link.kind), link.url.to_string()))
        .chain(std::iter::once((icons::MAIL, CONTACT.mailto())))
        .map(|(icon, uri)| {
            icon_button_view(IconButtonProps {
                icon,
                theme: props.theme,
                size: SOCIAL_BUTTON_SIZE,
                icon_size: SOCIAL_ICON_SIZE,
            })
            .map(move |_| FooterEvent::OpenLink(uri.clone()))
        });

    let separator = container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    let built_with = text(BUILT_WITH)
        .size(props.fonts.ui.size * 0.8)
        .color(palette.faint_foreground)
        .align_x(alignment::Horizontal::Center);

    let content = column![
        copyright,
        row(links)
            .spacing(SOCIAL_SPACING)
            .align_y(alignment::Vertical::Center),
        separator,
        built_with,
    ]
    .spacing(FOOTER_SPACING)
    .width(Length::Fill)
    .max_width(CONTENT_MAX_WIDTH)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .padding([0.0, PAGE_PADDING_X])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(surface.into()),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn given_year_when_formatting_copyright_then_owner_and_year_are_included() {
        assert_eq!(
            copyright_line(2026),
            "\u{a9} 2026 Harmandeep Singh. All rights reserved."
        );
    }
}
