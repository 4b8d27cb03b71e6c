use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::theme::{StyleOverrides, ThemeProps};

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
}

const ICON_BUTTON_PADDING: f32 = 0.0;

/// Render a square icon button: dim icon on a transparent ground, accent
/// on hover.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let (base_color, hover_color) = resolve_icon_colors(
        palette.dim_foreground,
        palette.accent,
        props.theme.overrides,
    );

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(|_, _| button::Style::default())
        .into()
}

fn resolve_icon_colors(
    default_base: iced::Color,
    accent: iced::Color,
    overrides: Option<StyleOverrides>,
) -> (iced::Color, iced::Color) {
    if let Some(color) = overrides.and_then(|overrides| overrides.foreground) {
        return (color, color);
    }

    (default_base, accent)
}

#[cfg(test)]
mod tests {
    use super::resolve_icon_colors;
    use crate::theme::StyleOverrides;

    const BASE: iced::Color = rgb(0.1, 0.2, 0.3);
    const ACCENT: iced::Color = rgb(0.8, 0.2, 0.2);

    const fn rgb(r: f32, g: f32, b: f32) -> iced::Color {
        iced::Color { r, g, b, a: 1.0 }
    }

    #[test]
    fn given_no_override_when_resolving_then_hover_uses_accent() {
        let (base, hover) = resolve_icon_colors(BASE, ACCENT, None);

        assert_eq!(base, BASE);
        assert_eq!(hover, ACCENT);
    }

    #[test]
    fn given_foreground_override_when_resolving_then_override_is_used_for_all_states()
     {
        let override_color = iced::Color::from_rgb(0.3, 0.2, 0.1);
        let overrides = Some(StyleOverrides {
            background: None,
            foreground: Some(override_color),
            border_radius: None,
        });

        let (base, hover) = resolve_icon_colors(BASE, ACCENT, overrides);

        assert_eq!(base, override_color);
        assert_eq!(hover, override_color);
    }
}
