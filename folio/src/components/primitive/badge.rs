use iced::widget::{container, text};
use iced::{Element, alignment};

use crate::fonts::FontsConfig;
use crate::theme::{ThemeProps, with_alpha};

const BADGE_FONT_SCALE: f32 = 0.85;
const BADGE_PADDING: [f32; 2] = [6.0, 12.0];
const BADGE_RADIUS: f32 = 999.0;

/// Visual variants for a badge.
#[derive(Debug, Clone, Copy)]
pub(crate) enum BadgeVariant {
    /// Tinted accent pill, used for certifications and percentages.
    Accent,
    /// Neutral outline pill, used for competency labels.
    Outline,
}

/// Props for rendering a badge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BadgeProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) variant: BadgeVariant,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render a rounded label pill.
///
/// The label is copied, so the element does not borrow from `props`.
pub(crate) fn view<'a, Message: 'a>(
    props: BadgeProps<'_>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let (background, foreground, border) = match props.variant {
        BadgeVariant::Accent => (
            with_alpha(palette.accent, 0.2),
            palette.bright_accent,
            with_alpha(palette.accent, 0.3),
        ),
        BadgeVariant::Outline => (
            with_alpha(palette.surface_raised, 0.5),
            palette.foreground,
            palette.faint_foreground,
        ),
    };

    let label = text(props.label.to_string())
        .size(props.fonts.ui.size * BADGE_FONT_SCALE)
        .font(props.fonts.ui.font_type)
        .align_x(alignment::Horizontal::Center);

    container(label)
        .padding(BADGE_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            text_color: Some(foreground),
            border: iced::Border {
                width: 1.0,
                color: border,
                radius: BADGE_RADIUS.into(),
            },
            ..Default::default()
        })
        .into()
}
