use iced::widget::{Space, container, row};
use iced::{Element, Length};

use crate::theme::{ThemeProps, with_alpha};

const PROGRESS_PRECISION: u16 = 1000;

/// Props for rendering a horizontal progress bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProgressBarProps<'a> {
    /// Filled share in `0.0..=1.0`; values outside are clamped.
    pub(crate) ratio: f32,
    pub(crate) height: f32,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a rounded track with an accent fill.
pub(crate) fn view<'a, Message: 'a>(
    props: ProgressBarProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;
    let track = with_alpha(palette.surface_raised, 0.8);
    let radius = props.height / 2.0;
    let (filled, rest) = fill_portions(props.ratio);

    let mut bar = row![];
    if filled > 0 {
        bar = bar.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(move |_| iced::widget::container::Style {
                    background: Some(accent.into()),
                    border: iced::Border {
                        radius: radius.into(),
                        ..iced::Border::default()
                    },
                    ..Default::default()
                }),
        );
    }
    if rest > 0 {
        bar = bar.push(
            Space::new()
                .width(Length::FillPortion(rest))
                .height(Length::Fill),
        );
    }

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(props.height))
        .style(move |_| iced::widget::container::Style {
            background: Some(track.into()),
            border: iced::Border {
                radius: radius.into(),
                ..iced::Border::default()
            },
            ..Default::default()
        })
        .into()
}

/// Split the bar width into filled and empty portions.
fn fill_portions(ratio: f32) -> (u16, u16) {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    let filled = (ratio * f32::from(PROGRESS_PRECISION)).round() as u16;
    (filled, PROGRESS_PRECISION - filled)
}
