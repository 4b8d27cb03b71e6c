use iced::widget::{Space, button, column, container, opaque, text};
use iced::{Element, Length, alignment};

use super::super::event::{NavigationEvent, NavigationIntent};
use super::super::model::NavigationViewModel;
use crate::fonts::FontsConfig;
use crate::layout::{NAV_BAR_HEIGHT, PAGE_PADDING_X};
use crate::theme::{ThemeProps, with_alpha};

const ITEM_PADDING: [f32; 2] = [12.0, 16.0];
const ITEM_SPACING: f32 = 4.0;
const PANEL_PADDING: f32 = 8.0;
const OVERLAY_ALPHA: f32 = 0.95;

/// Props for rendering the narrow-viewport overlay menu.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverlayMenuProps<'a> {
    pub(crate) vm: NavigationViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the dropdown panel below the nav bar, or nothing when hidden.
pub(crate) fn view<'a>(
    props: OverlayMenuProps<'a>,
) -> Element<'a, NavigationEvent> {
    if !props.vm.overlay_visible() {
        return Space::new().into();
    }

    let palette = props.theme.theme.iced_palette();
    let accent = palette.accent;
    let foreground = palette.foreground;
    let hover_background = with_alpha(palette.deep_accent, 0.6);

    let items = props.vm.items.iter().map(|item| {
        let is_active = item.section == props.vm.active_section;
        let label_color = if is_active { accent } else { foreground };

        button(
            text(item.label)
                .size(props.fonts.ui.size)
                .font(props.fonts.ui.font_type)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .on_press(NavigationEvent::Intent(NavigationIntent::SelectSection(
            item.section,
        )))
        .width(Length::Fill)
        .padding(ITEM_PADDING)
        .style(move |_, status| {
            let hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: hovered.then(|| hover_background.into()),
                text_color: if hovered { accent } else { label_color },
                border: iced::Border {
                    radius: 6.0.into(),
                    ..iced::Border::default()
                },
                ..button::Style::default()
            }
        })
        .into()
    });

    let background = with_alpha(palette.overlay, OVERLAY_ALPHA);
    let border = with_alpha(palette.dim_accent, 0.4);

    let panel = container(
        column(items).spacing(ITEM_SPACING).width(Length::Fill),
    )
    .width(Length::Fill)
    .padding([PANEL_PADDING, PAGE_PADDING_X])
    .style(move |_| iced::widget::container::Style {
        background: Some(background.into()),
        border: iced::Border {
            width: 1.0,
            color: border,
            radius: 0.0.into(),
        },
        ..Default::default()
    });

    column![
        Space::new().height(Length::Fixed(NAV_BAR_HEIGHT)),
        opaque(panel)
    ]
    .width(Length::Fill)
    .into()
}
