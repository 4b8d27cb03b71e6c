use iced::widget::{Space, button, container, svg};
use iced::{Element, Length, alignment};

use super::super::event::{NavigationEvent, NavigationIntent};
use super::super::model::{NavigationViewModel, ScrollTarget};
use crate::icons;
use crate::theme::{ThemeProps, with_alpha};

const BUTTON_SIZE: f32 = 48.0;
const ICON_SIZE: f32 = 22.0;
const CORNER_MARGIN: f32 = 24.0;

/// Props for rendering the floating back-to-top control.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackToTopButtonProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the control in the bottom-right corner.
///
/// Colors follow the fade opacity; the button only accepts presses while
/// the control is visible.
pub(crate) fn view<'a>(
    props: BackToTopButtonProps<'a>,
) -> Element<'a, NavigationEvent> {
    let opacity = props.vm.back_to_top_opacity;
    if opacity <= 0.0 && !props.vm.back_to_top_visible {
        return Space::new().into();
    }

    let palette = props.theme.theme.iced_palette();
    let accent = with_alpha(palette.accent, opacity);
    let bright_accent = with_alpha(palette.bright_accent, opacity);
    let icon_color = with_alpha(palette.bright_foreground, opacity);

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::ARROW_UP))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(icon_color),
        });

    let mut control = button(
        container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(BUTTON_SIZE))
    .height(Length::Fixed(BUTTON_SIZE))
    .padding(0.0)
    .style(move |_, status| {
        let background = if matches!(status, button::Status::Hovered) {
            bright_accent
        } else {
            accent
        };
        button::Style {
            background: Some(background.into()),
            border: iced::Border {
                radius: (BUTTON_SIZE / 2.0).into(),
                ..iced::Border::default()
            },
            ..button::Style::default()
        }
    });

    if props.vm.back_to_top_visible {
        control = control.on_press(NavigationEvent::Intent(
            NavigationIntent::ScrollTo(ScrollTarget::Top),
        ));
    }

    container(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(CORNER_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
